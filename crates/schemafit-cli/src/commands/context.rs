//! Implementation of the `schemafit context` command.
//!
//! Resolves the project configuration exactly the way a run would, then
//! prints it instead of acting on it. Useful for checking what a fixture
//! or a live document actually contains before patching anything.

use tracing::instrument;

use schemafit_core::application::ports::ConfigSource;

use crate::{
    cli::{ContextArgs, ContextFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `schemafit context` command.
#[instrument(skip_all, fields(project_dir = %args.project_dir.display()))]
pub fn execute(
    args: ContextArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let project_dir = super::existing_project_dir(&args.project_dir)?;
    let source = super::resolve_source(
        &project_dir,
        args.test_case.as_deref(),
        &config.fixture_root(),
    )?;
    let context = source.load_context().map_err(CliError::Core)?;

    match args.format {
        ContextFormat::Json => {
            let json = serde_json::to_string_pretty(&context).unwrap_or_else(|_| "{}".into());
            println!("{json}");
        }
        ContextFormat::Table => {
            output.header(&format!("Resolved from {}", source.describe()))?;
            print_field(&output, "Base name", context.base_name())?;
            print_field(&output, "Package", context.package_name())?;
            print_field(&output, "Application", context.application_name())?;
            print_field(&output, "Client framework", context.client_framework())?;
            print_field(&output, "Package manager", context.client_package_manager())?;
            print_field(&output, "Build tool", context.build_tool_raw())?;
            if let Some(dir) = context.server_dir() {
                output.print(&format!("  {:<18} {}", "Server dir:", dir.display()))?;
            }
            output.print(&format!(
                "  {:<18} {}",
                "Resource dir:",
                context.resource_dir().display()
            ))?;
            output.print(&format!(
                "  {:<18} {}",
                "Webapp dir:",
                context.webapp_dir().display()
            ))?;

            let missing = context.missing_fields();
            if !missing.is_empty() {
                output.warning(&format!("Missing fields: {}", missing.join(", ")))?;
            }
        }
    }

    Ok(())
}

fn print_field(output: &OutputManager, label: &str, value: Option<&str>) -> CliResult<()> {
    output.print(&format!(
        "  {:<18} {}",
        format!("{label}:"),
        value.unwrap_or("(not set)")
    ))?;
    Ok(())
}
