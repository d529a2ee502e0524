//! Generation Pipeline - the explicit run state machine.
//!
//! One adaptation run walks a fixed phase sequence:
//!
//! ```text
//! Initializing -> Resolving -> Patching -> Registering -> Installing -> Done
//! ```
//!
//! Each phase has defined entry and exit conditions (documented on
//! [`Phase`]), and the error policy is per phase, not per error type:
//!
//! - **Resolving** failures are fatal. Without a context there is nothing
//!   sensible to patch, so the run stops and the caller sees the error.
//! - **Patching**, **Registering**, and **Installing** failures are
//!   contained: logged at warning level, recorded on the report, and the
//!   machine still advances. A run that reaches Resolving successfully
//!   always reaches Done.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ports::{ConfigSource, PackageInstaller},
        services::{
            patch_service::{PatchReport, PatchService},
            registrar_service::{RegistrarService, RegistrationReport},
        },
    },
    domain::GeneratorContext,
    error::SchemafitResult,
};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// The pipeline's states, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Entry: adapters injected. Exit: run options logged.
    Initializing,
    /// Entry: a configuration source is selected. Exit: a `GeneratorContext`
    /// exists. Failure here aborts the run.
    Resolving,
    /// Entry: context resolved. Exit: patch report recorded (possibly a
    /// contained failure).
    Patching,
    /// Entry: patching concluded. Exit: registration report recorded.
    /// Skipped entirely on dry runs.
    Registering,
    /// Entry: registration concluded. Exit: install status recorded.
    Installing,
    /// Terminal.
    Done,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Initializing => "initializing",
            Self::Resolving => "resolving",
            Self::Patching => "patching",
            Self::Registering => "registering",
            Self::Installing => "installing",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Run options & report ──────────────────────────────────────────────────────

/// Caller-supplied knobs for one run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Root of the generated project; all target paths resolve against it.
    pub project_dir: PathBuf,
    /// Stage and report, but write nothing and register nothing.
    pub dry_run: bool,
    /// Leave the package-manager install step out.
    pub skip_install: bool,
}

/// How the install phase ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum InstallStatus {
    Installed { manager: String },
    Skipped { reason: String },
    Failed { manager: String, reason: String },
}

/// Everything one run did, for display and `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub source: String,
    pub dry_run: bool,
    pub context: GeneratorContext,
    pub patches: Option<PatchReport>,
    pub registrations: Option<RegistrationReport>,
    pub install: InstallStatus,
    pub warnings: Vec<String>,
}

impl RunReport {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// The full adaptation run: resolve, patch, register, install.
pub struct GenerationPipeline {
    config_source: Box<dyn ConfigSource>,
    patcher: PatchService,
    registrar: RegistrarService,
    installer: Box<dyn PackageInstaller>,
}

impl GenerationPipeline {
    pub fn new(
        config_source: Box<dyn ConfigSource>,
        patcher: PatchService,
        registrar: RegistrarService,
        installer: Box<dyn PackageInstaller>,
    ) -> Self {
        Self {
            config_source,
            patcher,
            registrar,
            installer,
        }
    }

    /// Drive the state machine from `Initializing` to `Done`.
    ///
    /// Returns `Err` only for fatal resolution failures; every later phase
    /// folds its failures into the report's warnings.
    #[instrument(skip_all, fields(project_dir = %options.project_dir.display(), dry_run = options.dry_run))]
    pub fn run(&self, options: &PipelineOptions) -> SchemafitResult<RunReport> {
        let run_id = Uuid::new_v4();
        let mut warnings: Vec<String> = Vec::new();
        let mut context: Option<GeneratorContext> = None;
        let mut patches: Option<PatchReport> = None;
        let mut registrations: Option<RegistrationReport> = None;
        let mut install = InstallStatus::Skipped {
            reason: "install phase not reached".into(),
        };

        let mut phase = Phase::Initializing;
        loop {
            info!(%run_id, %phase, "Entering phase");
            phase = match phase {
                Phase::Initializing => {
                    info!(
                        source = %self.config_source.describe(),
                        "Starting database adaptation run"
                    );
                    Phase::Resolving
                }

                Phase::Resolving => {
                    // Fatal on failure: the `?` is the abort.
                    let ctx = self.config_source.load_context()?;
                    let missing = ctx.missing_fields();
                    if !missing.is_empty() {
                        warn!(?missing, "Configuration is missing recognized fields");
                        warnings
                            .push(format!("configuration missing fields: {}", missing.join(", ")));
                    }
                    info!(context = %ctx, "Context resolved");
                    context = Some(ctx);
                    Phase::Patching
                }

                Phase::Patching => {
                    let ctx = context.as_ref().expect("entered Patching without context");
                    let result = if options.dry_run {
                        self.patcher
                            .preview_naming_strategy_patches(&options.project_dir, ctx)
                    } else {
                        self.patcher
                            .apply_naming_strategy_patches(&options.project_dir, ctx)
                    };
                    match result {
                        Ok(report) => {
                            for skipped in report.skipped() {
                                warnings.push(format!(
                                    "skipped {}: not found",
                                    skipped.path.display()
                                ));
                            }
                            patches = Some(report);
                        }
                        Err(e) => {
                            // Contained: targets are left as they were.
                            warn!(error = %e, "Patching failed, continuing run");
                            warnings.push(format!("patching failed: {e}"));
                        }
                    }
                    Phase::Registering
                }

                Phase::Registering => {
                    if options.dry_run {
                        info!("Dry run, skipping hook registration");
                    } else {
                        let report = self
                            .registrar
                            .register_hooks(&RegistrarService::standard_hooks());
                        for failure in report.failures() {
                            warnings.push(format!("hook '{}' not registered", failure.record));
                        }
                        registrations = Some(report);
                    }
                    Phase::Installing
                }

                Phase::Installing => {
                    let ctx = context.as_ref().expect("entered Installing without context");
                    install = self.install_step(ctx, options, &mut warnings);
                    Phase::Done
                }

                Phase::Done => break,
            };
        }

        let context = context.expect("reached Done without context");
        info!(%run_id, warnings = warnings.len(), "Run complete");
        Ok(RunReport {
            run_id,
            source: self.config_source.describe(),
            dry_run: options.dry_run,
            context,
            patches,
            registrations,
            install,
            warnings,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn install_step(
        &self,
        context: &GeneratorContext,
        options: &PipelineOptions,
        warnings: &mut Vec<String>,
    ) -> InstallStatus {
        if options.dry_run {
            return InstallStatus::Skipped {
                reason: "dry run".into(),
            };
        }
        if options.skip_install {
            return InstallStatus::Skipped {
                reason: "--skip-install".into(),
            };
        }
        let Some(manager) = context.client_package_manager() else {
            info!("No client package manager configured, skipping install");
            return InstallStatus::Skipped {
                reason: "no client package manager configured".into(),
            };
        };

        match self.installer.install(manager, &options.project_dir) {
            Ok(()) => {
                info!(%manager, "Dependencies installed");
                InstallStatus::Installed {
                    manager: manager.to_string(),
                }
            }
            Err(e) => {
                warn!(%manager, error = %e, "Install failed, continuing run");
                warnings.push(format!("install failed: {e}"));
                warnings.push(format!(
                    "To install your dependencies manually, run: {manager} install"
                ));
                InstallStatus::Failed {
                    manager: manager.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }
}
