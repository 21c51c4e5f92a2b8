//! Executes a list of SQL statements in order and reports the outcome.

use std::time::Duration;

use crate::management_api::{ManagementApi, QueryError};

/// How many captured error messages the per-file summary shows.
const ERROR_DISPLAY_LIMIT: usize = 5;
/// Captured error messages are cut to this many characters.
const MAX_ERROR_MESSAGE_CHARS: usize = 100;

/// Outcome of applying one SQL file.
#[derive(Debug, Default)]
pub struct FileReport {
    pub success_count: usize,
    pub error_count: usize,
    /// Truncated, human-readable descriptions of each failure, in order.
    pub errors: Vec<String>,
}

pub struct SqlRunner<'a> {
    api: &'a ManagementApi,
    statement_delay: Duration,
}

impl<'a> SqlRunner<'a> {
    pub fn new(api: &'a ManagementApi, statement_delay: Duration) -> Self {
        Self {
            api,
            statement_delay,
        }
    }

    /// Runs every statement strictly in order. A failure never stops the
    /// run; there is no transactional grouping, so later statements execute
    /// regardless of earlier outcomes.
    pub async fn run_statements(&self, statements: &[String], description: &str) -> FileReport {
        tracing::info!(description, total = statements.len(), "executing statements");

        let mut report = FileReport::default();
        let total = statements.len();

        for (index, statement) in statements.iter().enumerate() {
            if statement.trim().is_empty() {
                continue;
            }

            let position = index + 1;
            match self.api.execute(statement).await {
                Ok(_) => {
                    report.success_count += 1;
                    tracing::info!(statement = position, total, "statement executed");
                }
                Err(err) => {
                    report.error_count += 1;
                    let message = truncate_chars(&failure_message(&err), MAX_ERROR_MESSAGE_CHARS);
                    tracing::warn!(statement = position, total, %message, "statement failed");
                    report.errors.push(format!("statement {position}: {message}"));
                }
            }

            // Fixed pause between statements to stay under API rate limits.
            tokio::time::sleep(self.statement_delay).await;
        }

        tracing::info!(
            description,
            success = report.success_count,
            errors = report.error_count,
            "file completed"
        );

        for error in report.errors.iter().take(ERROR_DISPLAY_LIMIT) {
            tracing::warn!(%error, "captured error");
        }

        report
    }
}

/// The remote's own error text for HTTP failures, the transport error's
/// description otherwise.
fn failure_message(err: &QueryError) -> String {
    match err {
        QueryError::HttpStatus { message, .. } => message.clone(),
        QueryError::Request(source) => source.to_string(),
    }
}

fn truncate_chars(message: &str, max_chars: usize) -> String {
    message.chars().take(max_chars).collect()
}
