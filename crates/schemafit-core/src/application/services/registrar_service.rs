//! Registrar Service - registers this module's hooks with the host framework.
//!
//! Registration is fire-and-forget: the current run never depends on it
//! succeeding, only later runs do. Failures are therefore modeled as data in
//! the returned [`RegistrationReport`], never as an `Err` from the service,
//! so callers cannot accidentally turn a recoverable registry hiccup into a
//! failed run.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::ports::HookRegistry,
    domain::{DomainValidator as validator, HookTiming, HookedGenerator, ModuleHookRecord},
};

/// The name this module registers itself under.
pub const MODULE_NAME: &str = "schemafit";

/// What happened to one registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum RegistrationStatus {
    Registered,
    Failed { reason: String },
}

/// One record plus its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub record: ModuleHookRecord,
    #[serde(flatten)]
    pub status: RegistrationStatus,
}

/// Outcome of every registration attempted in one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReport {
    pub outcomes: Vec<RegistrationOutcome>,
}

impl RegistrationReport {
    pub fn all_registered(&self) -> bool {
        self.outcomes
            .iter()
            .all(|o| o.status == RegistrationStatus::Registered)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RegistrationOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, RegistrationStatus::Failed { .. }))
    }
}

/// Hook registration service.
pub struct RegistrarService {
    registry: Box<dyn HookRegistry>,
}

impl RegistrarService {
    pub fn new(registry: Box<dyn HookRegistry>) -> Self {
        Self { registry }
    }

    /// The two hooks this module always registers: re-run after whole-app
    /// generation and after each entity generation.
    pub fn standard_hooks() -> Vec<ModuleHookRecord> {
        vec![
            ModuleHookRecord::new(
                MODULE_NAME,
                HookedGenerator::App,
                HookTiming::Post,
                "apply",
                "Adapts a freshly generated application to a pre-existing database",
            ),
            ModuleHookRecord::new(
                MODULE_NAME,
                HookedGenerator::Entity,
                HookTiming::Post,
                "entity",
                "Re-aligns naming strategies after an entity is generated",
            ),
        ]
    }

    /// Register each record, best-effort.
    ///
    /// Never fails the run: per-record failures come back inside the report
    /// and are logged at warning level.
    #[instrument(skip_all, fields(records = records.len()))]
    pub fn register_hooks(&self, records: &[ModuleHookRecord]) -> RegistrationReport {
        let mut outcomes = Vec::with_capacity(records.len());

        for record in records {
            let status = match validator::validate_hook_record(record)
                .map_err(|e| e.to_string())
                .and_then(|()| self.registry.register(record).map_err(|e| e.to_string()))
            {
                Ok(()) => {
                    info!(hook = %record, "Hook registered");
                    RegistrationStatus::Registered
                }
                Err(reason) => {
                    warn!(hook = %record, %reason, "Hook registration failed, continuing");
                    RegistrationStatus::Failed { reason }
                }
            };
            outcomes.push(RegistrationOutcome {
                record: record.clone(),
                status,
            });
        }

        RegistrationReport { outcomes }
    }
}
