//! JSON-lines command runner.
//!
//! Each input line is one command tagged by `op`; each command produces
//! exactly one output line tagged by `status`.

use std::io::{BufRead, Write};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use payments_hex::PaymentService;
use payments_types::{
    AmountExceedingQuery, AppError, CreatePaymentRequest, EditPaymentMessageRequest, ErrorKind,
    FindPaymentRequest, Payment, PaymentRepository, PaymentResponse, RepoError, UserRepository,
    ValidationService,
};

/// A single request to the payment core.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    CreatePayment(CreatePaymentRequest),
    EditPaymentMessage(EditPaymentMessageRequest),
    AmountExceeding(AmountExceedingQuery),
    FindPayment(FindPaymentRequest),
    ListPayments,
}

/// Successful command payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data {
    One(Option<PaymentResponse>),
    Many(Vec<PaymentResponse>),
}

/// Result line written for every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok { data: Data },
    Error { kind: &'static str, message: String },
}

impl Outcome {
    fn one(payment: Payment) -> Self {
        Outcome::Ok {
            data: Data::One(Some(payment.into())),
        }
    }

    fn many(payments: Vec<Payment>) -> Self {
        Outcome::Ok {
            data: Data::Many(payments.into_iter().map(Into::into).collect()),
        }
    }

    fn failed(kind: ErrorKind, message: impl Into<String>) -> Self {
        Outcome::Error {
            kind: kind.as_str(),
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok { .. })
    }
}

impl From<Result<Payment, AppError>> for Outcome {
    fn from(result: Result<Payment, AppError>) -> Self {
        match result {
            Ok(payment) => Outcome::one(payment),
            Err(err) => err.into(),
        }
    }
}

impl From<AppError> for Outcome {
    fn from(err: AppError) -> Self {
        Outcome::failed(err.kind(), err.message())
    }
}

impl From<RepoError> for Outcome {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

/// Counts reported once the input is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Feeds commands to one payment service for the lifetime of the run.
pub struct Runner<U, P, V>
where
    U: UserRepository,
    P: PaymentRepository,
    V: ValidationService,
{
    service: PaymentService<U, P, V>,
}

impl<U, P, V> Runner<U, P, V>
where
    U: UserRepository,
    P: PaymentRepository,
    V: ValidationService,
{
    pub fn new(service: PaymentService<U, P, V>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &PaymentService<U, P, V> {
        &self.service
    }

    /// Executes one parsed command.
    pub fn execute(&self, command: Command) -> Outcome {
        match command {
            Command::CreatePayment(req) => {
                self.service.create_payment(req.user_id, req.amount).into()
            }
            Command::EditPaymentMessage(req) => self
                .service
                .edit_payment_message(req.payment_id, req.message)
                .into(),
            Command::AmountExceeding(query) => {
                match self.service.get_all_by_amount_exceeding(query.threshold) {
                    Ok(payments) => Outcome::many(payments),
                    Err(err) => err.into(),
                }
            }
            Command::FindPayment(req) => match self.service.payments().find_by_id(req.payment_id) {
                Ok(found) => Outcome::Ok {
                    data: Data::One(found.map(Into::into)),
                },
                Err(err) => err.into(),
            },
            Command::ListPayments => match self.service.payments().find_all() {
                Ok(payments) => Outcome::many(payments),
                Err(err) => err.into(),
            },
        }
    }

    /// Parses and executes one input line. Blank lines yield `None`.
    pub fn execute_line(&self, line: &str) -> Option<Outcome> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let outcome = match serde_json::from_str::<Command>(line) {
            Ok(command) => self.execute(command),
            Err(err) => {
                tracing::warn!(%err, "skipping malformed command");
                Outcome::failed(ErrorKind::InvalidArgument, format!("malformed command: {}", err))
            }
        };
        Some(outcome)
    }

    /// Processes every line of `input`, writing one JSON result line per command.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();

        for (index, line) in input.split(b'\n').enumerate() {
            let bytes = line.with_context(|| format!("failed to read command line {}", index + 1))?;
            let decoded = match std::str::from_utf8(&bytes) {
                Ok(text) => self.execute_line(text),
                Err(err) => {
                    tracing::warn!(line = index + 1, %err, "skipping command that is not UTF-8");
                    Some(Outcome::failed(
                        ErrorKind::InvalidArgument,
                        format!("malformed command: {}", err),
                    ))
                }
            };
            let Some(outcome) = decoded else {
                continue;
            };

            summary.processed += 1;
            if !outcome.is_ok() {
                summary.failed += 1;
            }

            serde_json::to_writer(&mut output, &outcome).context("failed to write result")?;
            writeln!(output).context("failed to write result")?;
        }

        output.flush().context("failed to flush results")?;
        Ok(summary)
    }
}
