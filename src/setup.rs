//! Top-level orchestration: apply every configured SQL file in order,
//! accumulate totals across files, then verify and summarize.

use crate::config::Config;
use crate::management_api::ManagementApi;
use crate::runner::SqlRunner;
use crate::splitter::split_statements;
use crate::verify;

/// Statement totals accumulated across every file of one run.
#[derive(Debug, Default)]
pub struct RunTotals {
    pub success: usize,
    pub errors: usize,
}

pub async fn run(config: &Config) -> RunTotals {
    tracing::info!(project = %config.project_ref, "starting database setup");

    let api = ManagementApi::new(config);
    let runner = SqlRunner::new(&api, config.statement_delay);
    let mut totals = RunTotals::default();

    for script in config.script_files() {
        let sql = match tokio::fs::read_to_string(&script.path).await {
            Ok(sql) => sql,
            Err(err) => {
                tracing::warn!(
                    path = %script.path.display(),
                    description = script.description,
                    error = %err,
                    "skipping unreadable SQL file"
                );
                continue;
            }
        };

        let statements = split_statements(&sql);
        let report = runner.run_statements(&statements, script.description).await;
        totals.success += report.success_count;
        totals.errors += report.error_count;
    }

    verify::verify_tables(&api).await;

    if totals.errors == 0 {
        tracing::info!(statements = totals.success, "database setup completed successfully");
    } else {
        tracing::warn!(
            statements = totals.success,
            errors = totals.errors,
            "setup completed with errors (some, like 'already exists', may be expected)"
        );
    }

    print_followup_notes();

    totals
}

/// Static reminders carried over from the manual setup runbook.
fn print_followup_notes() {
    tracing::info!("test credentials: students student1@babson.edu / student2@babson.edu");
    tracing::info!("test credentials: business owners john@techcorp.com / sarah@healthplus.com");
    tracing::info!("password for all test accounts: Test123!@#");
    tracing::info!("next: open the Supabase SQL editor and run verify-database-setup.sql");
}
