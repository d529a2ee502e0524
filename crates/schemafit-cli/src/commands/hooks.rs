//! Implementation of the `schemafit hooks` command.
//!
//! Registration without patching, for repairing a hook document that a
//! failed or interrupted run left behind. Best-effort like the pipeline's
//! registration phase: per-hook failures are reported, never fatal.

use tracing::instrument;

use schemafit_adapters::JsonHookRegistry;
use schemafit_core::application::{RegistrarService, services::RegistrationStatus};

use crate::{
    cli::{HooksArgs, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

/// Execute the `schemafit hooks` command.
#[instrument(skip_all, fields(project_dir = %args.project_dir.display()))]
pub fn execute(args: HooksArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // 1. Validate the project directory
    let project_dir = super::existing_project_dir(&args.project_dir)?;

    // 2. Register the standard hooks
    let registrar = RegistrarService::new(Box::new(JsonHookRegistry::new(&project_dir)));
    let report = registrar.register_hooks(&RegistrarService::standard_hooks());

    // 3. Display
    if output.is_json() {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into());
        println!("{json}");
        return Ok(());
    }

    output.header("Hooks:")?;
    for outcome in &report.outcomes {
        let line = match &outcome.status {
            RegistrationStatus::Registered => format!("  {}: registered", outcome.record),
            RegistrationStatus::Failed { reason } => {
                format!("  {}: failed ({})", outcome.record, reason)
            }
        };
        output.print(&line)?;
    }

    if report.all_registered() {
        output.success("All hooks registered")?;
    } else {
        output.warning("Some hooks could not be registered; re-run: schemafit hooks")?;
    }

    Ok(())
}
