//! Implementation of the `schemafit entity` command.
//!
//! The host generator invokes this after each entity pass. The naming
//! patches are idempotent, so re-running them re-aligns whatever the host
//! regenerated without disturbing files that already carry the replacements.

use tracing::{info, instrument};

use schemafit_adapters::{BuiltinRuleCatalog, LocalFilesystem};
use schemafit_core::application::{
    PatchReport, PatchService,
    ports::ConfigSource,
    services::FileStatus,
};

use crate::{
    cli::{EntityArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `schemafit entity` command.
///
/// Unlike `apply`, a patch failure here surfaces directly: there are no
/// later phases to protect, so containment would only hide the problem
/// from the hook that invoked us.
#[instrument(skip_all, fields(project_dir = %args.project_dir.display(), dry_run = args.dry_run))]
pub fn execute(
    args: EntityArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate the project directory
    let project_dir = super::existing_project_dir(&args.project_dir)?;

    // 2. Resolve the context
    let source = super::resolve_source(
        &project_dir,
        args.test_case.as_deref(),
        &config.fixture_root(),
    )?;
    let context = source.load_context().map_err(CliError::Core)?;

    // 3. Re-apply (or preview) the naming patches
    let service = PatchService::new(
        Box::new(LocalFilesystem::new()),
        Box::new(BuiltinRuleCatalog::new()),
    );

    if !output.is_json() {
        output.header(&format!(
            "Re-aligning naming strategies at {}...",
            project_dir.display()
        ))?;
    }

    let report = if args.dry_run {
        service.preview_naming_strategy_patches(&project_dir, &context)
    } else {
        service.apply_naming_strategy_patches(&project_dir, &context)
    }
    .map_err(CliError::Core)?;

    info!(
        replacements = report.total_replacements(),
        "Entity pass completed"
    );

    // 4. Display
    if output.is_json() {
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into());
        println!("{json}");
        return Ok(());
    }

    display_report(&report, args.dry_run, &output)
}

fn display_report(report: &PatchReport, dry_run: bool, output: &OutputManager) -> CliResult<()> {
    for outcome in &report.outcomes {
        let line = match &outcome.status {
            FileStatus::Patched { replacements } => format!(
                "  {}: {} replacement(s)",
                outcome.path.display(),
                replacements
            ),
            FileStatus::Unchanged => format!("  {}: already aligned", outcome.path.display()),
            FileStatus::Skipped { reason } => {
                format!("  {}: skipped ({})", outcome.path.display(), reason)
            }
        };
        output.print(&line)?;
    }

    if dry_run {
        output.info("Dry run: nothing was written")?;
        return Ok(());
    }

    output.success(&format!(
        "Naming strategies re-aligned ({} replacement(s))",
        report.total_replacements()
    ))?;
    Ok(())
}
