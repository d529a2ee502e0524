//! Implementation of the `schemafit apply` command.
//!
//! Responsibility: translate CLI arguments into pipeline options, wire the
//! production adapters into the pipeline, and display the run report. No
//! business logic lives here.

use tracing::{info, instrument};

use schemafit_adapters::{BuiltinRuleCatalog, CommandInstaller, JsonHookRegistry, LocalFilesystem};
use schemafit_core::application::{
    GenerationPipeline, InstallStatus, PatchService, PipelineOptions, RegistrarService, RunReport,
    services::{FileOutcome, FileStatus, RegistrationOutcome, RegistrationStatus},
};

use crate::{
    cli::{ApplyArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `schemafit apply` command.
///
/// Dispatch sequence:
/// 1. Validate the project directory
/// 2. Select the configuration source (live document or fixture)
/// 3. Wire the production adapters into the pipeline
/// 4. Run the pipeline
/// 5. Display the report (human or JSON)
#[instrument(skip_all, fields(project_dir = %args.project_dir.display(), dry_run = args.dry_run))]
pub fn execute(
    args: ApplyArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Validate the project directory
    let project_dir = super::existing_project_dir(&args.project_dir)?;

    // 2. Select the configuration source
    let source = super::resolve_source(
        &project_dir,
        args.test_case.as_deref(),
        &config.fixture_root(),
    )?;

    // 3. Wire the production adapters.  The skip decision is run policy, so
    //    the real installer is always wired; the options gate it.
    let pipeline = GenerationPipeline::new(
        source,
        PatchService::new(
            Box::new(LocalFilesystem::new()),
            Box::new(BuiltinRuleCatalog::new()),
        ),
        RegistrarService::new(Box::new(JsonHookRegistry::new(&project_dir))),
        Box::new(CommandInstaller::new()),
    );

    let options = PipelineOptions {
        project_dir,
        dry_run: args.dry_run,
        skip_install: args.skip_install || config.defaults.skip_install,
    };

    // 4. Run.  The header stays out of JSON mode so stdout remains parseable.
    if !output.is_json() {
        output.header(&format!(
            "Adapting project at {}...",
            options.project_dir.display()
        ))?;
    }
    info!(project_dir = %options.project_dir.display(), "Adaptation started");

    let report = pipeline.run(&options).map_err(CliError::Core)?;

    info!(run_id = %report.run_id, "Adaptation completed");

    // 5. Display
    if output.is_json() {
        // Serialise the full report to stdout (bypasses OutputManager because
        // JSON output must be parseable even in non-TTY pipes).
        let json = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".into());
        println!("{json}");
        return Ok(());
    }

    display_report(&report, &output)
}

// ── Report rendering ──────────────────────────────────────────────────────────

fn display_report(report: &RunReport, output: &OutputManager) -> CliResult<()> {
    output.print(&format!("  Source:  {}", report.source))?;
    if let Some(name) = report.context.base_name() {
        output.print(&format!("  Project: {name}"))?;
    }

    if let Some(patches) = &report.patches {
        output.print("")?;
        output.print(&format!("Patched files ({}):", patches.build_tool))?;
        for outcome in &patches.outcomes {
            output.print(&file_status_line(outcome))?;
        }
    }

    if let Some(registrations) = &report.registrations {
        output.print("")?;
        output.print("Hooks:")?;
        for outcome in &registrations.outcomes {
            output.print(&registration_line(outcome))?;
        }
    }

    output.print("")?;
    output.print(&install_line(&report.install))?;

    for warning in &report.warnings {
        output.warning(warning)?;
    }

    if report.dry_run {
        output.info("Dry run: nothing was written")?;
        return Ok(());
    }

    let replacements = report
        .patches
        .as_ref()
        .map(|p| p.total_replacements())
        .unwrap_or(0);
    if report.has_warnings() {
        output.warning(&format!(
            "Adaptation finished with {} warning(s)",
            report.warnings.len()
        ))?;
    } else {
        output.success(&format!(
            "Project adapted ({replacements} replacement(s))"
        ))?;
    }

    Ok(())
}

fn file_status_line(outcome: &FileOutcome) -> String {
    match &outcome.status {
        FileStatus::Patched { replacements } => format!(
            "  {}: {} replacement(s)",
            outcome.path.display(),
            replacements
        ),
        FileStatus::Unchanged => format!("  {}: already aligned", outcome.path.display()),
        FileStatus::Skipped { reason } => {
            format!("  {}: skipped ({})", outcome.path.display(), reason)
        }
    }
}

fn registration_line(outcome: &RegistrationOutcome) -> String {
    match &outcome.status {
        RegistrationStatus::Registered => format!("  {}: registered", outcome.record),
        RegistrationStatus::Failed { reason } => {
            format!("  {}: failed ({})", outcome.record, reason)
        }
    }
}

fn install_line(install: &InstallStatus) -> String {
    match install {
        InstallStatus::Installed { manager } => format!("Install: {manager} install succeeded"),
        InstallStatus::Skipped { reason } => format!("Install: skipped ({reason})"),
        InstallStatus::Failed { manager, reason } => {
            format!("Install: {manager} install failed ({reason})")
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn patched_file_line_names_path_and_count() {
        let line = file_status_line(&FileOutcome {
            path: PathBuf::from("pom.xml"),
            status: FileStatus::Patched { replacements: 2 },
        });
        assert!(line.contains("pom.xml"));
        assert!(line.contains("2 replacement(s)"));
    }

    #[test]
    fn unchanged_file_line_says_aligned() {
        let line = file_status_line(&FileOutcome {
            path: PathBuf::from("pom.xml"),
            status: FileStatus::Unchanged,
        });
        assert!(line.contains("already aligned"));
    }

    #[test]
    fn skipped_file_line_carries_the_reason() {
        let line = file_status_line(&FileOutcome {
            path: PathBuf::from("src/test/resources/config/application.yml"),
            status: FileStatus::Skipped {
                reason: "not found".into(),
            },
        });
        assert!(line.contains("skipped (not found)"));
    }

    #[test]
    fn install_lines_cover_every_status() {
        assert!(
            install_line(&InstallStatus::Installed {
                manager: "yarn".into()
            })
            .contains("yarn install succeeded")
        );
        assert!(
            install_line(&InstallStatus::Skipped {
                reason: "dry run".into()
            })
            .contains("skipped (dry run)")
        );
        assert!(
            install_line(&InstallStatus::Failed {
                manager: "npm".into(),
                reason: "exit status 1".into()
            })
            .contains("npm install failed")
        );
    }
}
