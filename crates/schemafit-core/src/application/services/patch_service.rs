//! Patch Service - applies naming-strategy rewrites to generated files.
//!
//! This service coordinates the patching workflow:
//! 1. Parse the build tool out of the resolved context
//! 2. Fetch and validate that tool's patch plan from the rule catalog
//! 3. Stage every rewrite in memory
//! 4. Commit the staged writes to the filesystem
//!
//! Staging before writing is what makes the build tool's required file set
//! all-or-nothing: a required file that is missing or unreadable fails the
//! invocation before a single byte is written. Optional files degrade to
//! per-file skips.

use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, RuleCatalog},
    },
    domain::{DomainValidator as validator, GeneratorContext, Necessity},
    error::{SchemafitError, SchemafitResult},
};

/// How one target file fared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum FileStatus {
    /// Rules matched; the file was rewritten.
    Patched { replacements: usize },
    /// Rules matched nothing; the file already carries the replacements.
    Unchanged,
    /// Optional file absent; nothing to do.
    Skipped { reason: String },
}

/// Per-file outcome of a patch invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

/// Everything one patch invocation did, for display and logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchReport {
    pub build_tool: String,
    pub outcomes: Vec<FileOutcome>,
}

impl PatchReport {
    pub fn total_replacements(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                FileStatus::Patched { replacements } => replacements,
                _ => 0,
            })
            .sum()
    }

    pub fn skipped(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Skipped { .. }))
    }
}

/// A fully-staged rewrite, not yet on disk.
struct StagedWrite {
    path: PathBuf,
    content: String,
    replacements: usize,
}

/// Main patching service.
///
/// Orchestrates plan lookup, staging, and committing of naming-strategy
/// rewrites.
pub struct PatchService {
    filesystem: Box<dyn Filesystem>,
    catalog: Box<dyn RuleCatalog>,
}

impl PatchService {
    /// Create a new patch service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use schemafit_core::application::{PatchService, ports::*};
    ///
    /// let service = PatchService::new(
    ///     filesystem, // impl Filesystem
    ///     catalog,    // impl RuleCatalog
    /// );
    /// ```
    pub fn new(filesystem: Box<dyn Filesystem>, catalog: Box<dyn RuleCatalog>) -> Self {
        Self {
            filesystem,
            catalog,
        }
    }

    /// Apply the naming-strategy patches for the context's build tool.
    ///
    /// This is the main use case - rewrites the generated project's ORM
    /// naming-strategy declarations so nothing auto-derives table or column
    /// names. Idempotent: a second invocation over the same tree reports
    /// every file `Unchanged`.
    #[instrument(
        skip_all,
        fields(
            project_dir = %project_dir.display(),
            build_tool = context.build_tool_raw().unwrap_or("<unset>")
        )
    )]
    pub fn apply_naming_strategy_patches(
        &self,
        project_dir: &Path,
        context: &GeneratorContext,
    ) -> SchemafitResult<PatchReport> {
        let (report, staged) = self.stage(project_dir, context)?;

        // Commit. Only files whose content actually changed get written;
        // in-place mutation with no cross-file transaction (§ accepted risk:
        // interruption mid-commit leaves earlier files rewritten).
        for write in &staged {
            self.filesystem.write_file(&write.path, &write.content)?;
            info!(
                path = %write.path.display(),
                replacements = write.replacements,
                "Patched naming strategies"
            );
        }

        info!(
            files_patched = staged.len(),
            total_replacements = report.total_replacements(),
            "Naming-strategy patching completed"
        );
        Ok(report)
    }

    /// Stage the patches without writing anything.
    ///
    /// Same validation and same report as
    /// [`apply_naming_strategy_patches`](Self::apply_naming_strategy_patches),
    /// with the commit step left out. Backs `--dry-run`.
    #[instrument(skip_all, fields(project_dir = %project_dir.display()))]
    pub fn preview_naming_strategy_patches(
        &self,
        project_dir: &Path,
        context: &GeneratorContext,
    ) -> SchemafitResult<PatchReport> {
        let (report, _staged) = self.stage(project_dir, context)?;
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Resolve the plan and stage every rewrite in memory.
    ///
    /// Failure anywhere in here guarantees zero files were modified.
    fn stage(
        &self,
        project_dir: &Path,
        context: &GeneratorContext,
    ) -> SchemafitResult<(PatchReport, Vec<StagedWrite>)> {
        // 1. Parse the build tool; an unrecognized or missing value fails
        //    before any filesystem access.
        let tool = context.build_tool().map_err(SchemafitError::Domain)?;

        // 2. Fetch and validate the plan.
        let plan = self.catalog.plan_for(tool, context)?;
        validator::validate_plan(&plan).map_err(SchemafitError::Domain)?;
        info!(
            build_tool = %tool,
            targets = plan.entries().len(),
            "Patch plan resolved"
        );

        // 3. Stage rewrites.
        let mut outcomes = Vec::with_capacity(plan.entries().len());
        let mut staged = Vec::new();

        for entry in plan.entries() {
            let path = project_dir.join(entry.path());

            if !self.filesystem.exists(&path) {
                match entry.necessity() {
                    Necessity::Required => {
                        // Required miss voids the invocation; nothing has
                        // been written yet.
                        return Err(ApplicationError::MissingTargetFile { path }.into());
                    }
                    Necessity::Optional => {
                        warn!(path = %path.display(), "Optional patch target missing, skipping");
                        outcomes.push(FileOutcome {
                            path: entry.path().to_path_buf(),
                            status: FileStatus::Skipped {
                                reason: "file not found".into(),
                            },
                        });
                        continue;
                    }
                }
            }

            let original = match self.filesystem.read_to_string(&path) {
                Ok(text) => text,
                Err(e) if entry.necessity() == Necessity::Optional => {
                    warn!(path = %path.display(), error = %e, "Optional patch target unreadable, skipping");
                    outcomes.push(FileOutcome {
                        path: entry.path().to_path_buf(),
                        status: FileStatus::Skipped {
                            reason: e.to_string(),
                        },
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };
            let (rewritten, replacements) = entry
                .apply_to(&original)
                .map_err(SchemafitError::Domain)?;

            if replacements == 0 {
                outcomes.push(FileOutcome {
                    path: entry.path().to_path_buf(),
                    status: FileStatus::Unchanged,
                });
            } else {
                outcomes.push(FileOutcome {
                    path: entry.path().to_path_buf(),
                    status: FileStatus::Patched { replacements },
                });
                staged.push(StagedWrite {
                    path,
                    content: rewritten,
                    replacements,
                });
            }
        }

        let report = PatchReport {
            build_tool: tool.to_string(),
            outcomes,
        };
        Ok((report, staged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BuildTool, PatchPlan, PatchRule, TargetFile};
    use crate::error::SchemafitError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Minimal in-process filesystem stub keyed by full path.
    struct StubFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl StubFs {
        fn with(files: &[(&str, &str)]) -> Self {
            Self {
                files: Mutex::new(
                    files
                        .iter()
                        .map(|(p, c)| (PathBuf::from(p), c.to_string()))
                        .collect(),
                ),
            }
        }
    }

    impl Filesystem for StubFs {
        fn read_to_string(&self, path: &Path) -> SchemafitResult<String> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "not found".into(),
                }
                .into()
            })
        }

        fn write_file(&self, path: &Path, content: &str) -> SchemafitResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> SchemafitResult<()> {
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    struct StubCatalog;

    impl RuleCatalog for StubCatalog {
        fn plan_for(
            &self,
            tool: BuildTool,
            _context: &GeneratorContext,
        ) -> SchemafitResult<PatchPlan> {
            Ok(PatchPlan::new(tool)
                .with_entry(TargetFile::required(
                    "pom.xml",
                    vec![PatchRule::literal("SpringStrategy", "FixedStrategy")],
                ))
                .with_entry(TargetFile::optional(
                    "src/main/resources/config/application.yml",
                    vec![PatchRule::literal("SpringStrategy", "FixedStrategy")],
                )))
        }
    }

    fn service(fs: StubFs) -> PatchService {
        PatchService::new(Box::new(fs), Box::new(StubCatalog))
    }

    fn maven_context() -> GeneratorContext {
        GeneratorContext::builder().build_tool("maven").build()
    }

    #[test]
    fn patches_required_and_optional_targets() {
        let fs = StubFs::with(&[
            ("/proj/pom.xml", "<naming>SpringStrategy</naming>"),
            (
                "/proj/src/main/resources/config/application.yml",
                "strategy: SpringStrategy",
            ),
        ]);
        let svc = service(fs);
        let report = svc
            .apply_naming_strategy_patches(Path::new("/proj"), &maven_context())
            .unwrap();

        assert_eq!(report.total_replacements(), 2);
        assert!(report.outcomes.iter().all(|o| matches!(
            o.status,
            FileStatus::Patched { replacements: 1 }
        )));
    }

    #[test]
    fn second_run_reports_unchanged_files() {
        let fs = StubFs::with(&[("/proj/pom.xml", "SpringStrategy")]);
        let svc = service(fs);
        let ctx = maven_context();

        svc.apply_naming_strategy_patches(Path::new("/proj"), &ctx)
            .unwrap();
        let second = svc
            .apply_naming_strategy_patches(Path::new("/proj"), &ctx)
            .unwrap();

        assert_eq!(second.total_replacements(), 0);
        assert!(matches!(second.outcomes[0].status, FileStatus::Unchanged));
    }

    #[test]
    fn missing_required_target_writes_nothing() {
        // Only the optional file exists; the required pom.xml is gone.
        let fs = StubFs::with(&[(
            "/proj/src/main/resources/config/application.yml",
            "strategy: SpringStrategy",
        )]);
        let svc = service(fs);
        let err = svc
            .apply_naming_strategy_patches(Path::new("/proj"), &maven_context())
            .unwrap_err();

        assert!(matches!(
            err,
            SchemafitError::Application(ApplicationError::MissingTargetFile { .. })
        ));
        // And the optional sibling was left untouched.
        let untouched = svc
            .filesystem
            .read_to_string(Path::new(
                "/proj/src/main/resources/config/application.yml",
            ))
            .unwrap();
        assert_eq!(untouched, "strategy: SpringStrategy");
    }

    #[test]
    fn missing_optional_target_is_skipped_not_fatal() {
        let fs = StubFs::with(&[("/proj/pom.xml", "SpringStrategy here")]);
        let svc = service(fs);
        let report = svc
            .apply_naming_strategy_patches(Path::new("/proj"), &maven_context())
            .unwrap();

        assert_eq!(report.skipped().count(), 1);
        assert_eq!(report.total_replacements(), 1);
    }

    #[test]
    fn unsupported_build_tool_fails_before_any_read() {
        let fs = StubFs::with(&[("/proj/pom.xml", "SpringStrategy")]);
        let svc = service(fs);
        let ctx = GeneratorContext::builder().build_tool("sbt").build();

        let err = svc
            .apply_naming_strategy_patches(Path::new("/proj"), &ctx)
            .unwrap_err();
        assert!(matches!(
            err,
            SchemafitError::Domain(crate::domain::DomainError::UnsupportedBuildTool { .. })
        ));
    }

    #[test]
    fn preview_stages_but_never_writes() {
        let fs = StubFs::with(&[("/proj/pom.xml", "SpringStrategy")]);
        let svc = service(fs);
        let report = svc
            .preview_naming_strategy_patches(Path::new("/proj"), &maven_context())
            .unwrap();

        assert_eq!(report.total_replacements(), 1);
        let after = svc
            .filesystem
            .read_to_string(Path::new("/proj/pom.xml"))
            .unwrap();
        assert_eq!(after, "SpringStrategy");
    }
}
