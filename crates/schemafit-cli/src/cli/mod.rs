//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "schemafit",
    bin_name = "schemafit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f5c4} Adapt generated projects to pre-existing databases",
    long_about = "Schemafit rewrites the ORM naming strategies of a freshly \
                  scaffolded server project so it maps cleanly onto an \
                  existing database schema, and hooks itself into the host \
                  generator so later passes stay aligned.",
    after_help = "EXAMPLES:\n\
        \x20 schemafit apply --project-dir ./my-app\n\
        \x20 schemafit apply --dry-run\n\
        \x20 schemafit context --test-case maven-app\n\
        \x20 schemafit completions bash > /usr/share/bash-completion/completions/schemafit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Adapt a generated project to its database.
    #[command(
        visible_alias = "a",
        about = "Run the full adaptation: patch, register hooks, install",
        after_help = "EXAMPLES:\n\
            \x20 schemafit apply --project-dir ./my-app\n\
            \x20 schemafit apply --dry-run\n\
            \x20 schemafit apply --test-case maven-app --skip-install"
    )]
    Apply(ApplyArgs),

    /// Re-align naming strategies after an entity was generated.
    #[command(
        about = "Re-apply the naming patches after an entity pass",
        after_help = "EXAMPLES:\n\
            \x20 schemafit entity --project-dir ./my-app\n\
            \x20 schemafit entity --dry-run"
    )]
    Entity(EntityArgs),

    /// Register this module's hooks with the host generator.
    #[command(
        about = "Register generator hooks without patching",
        after_help = "EXAMPLES:\n\
            \x20 schemafit hooks --project-dir ./my-app"
    )]
    Hooks(HooksArgs),

    /// Show the project configuration a run would resolve.
    #[command(
        visible_alias = "ctx",
        about = "Show the resolved project configuration",
        after_help = "EXAMPLES:\n\
            \x20 schemafit context --project-dir ./my-app\n\
            \x20 schemafit context --test-case gradle-app --format json"
    )]
    Context(ContextArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 schemafit completions bash > ~/.local/share/bash-completion/completions/schemafit\n\
            \x20 schemafit completions zsh  > ~/.zfunc/_schemafit\n\
            \x20 schemafit completions fish > ~/.config/fish/completions/schemafit.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Schemafit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 schemafit config get output.format\n\
            \x20 schemafit config set defaults.skip_install true\n\
            \x20 schemafit config list"
    )]
    Config(ConfigCommands),
}

// ── apply ─────────────────────────────────────────────────────────────────────

/// Arguments for `schemafit apply`.
#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Root of the generated project; all patch targets resolve against it.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Generated project to adapt"
    )]
    pub project_dir: PathBuf,

    /// Resolve a named fixture instead of the live `.yo-rc.json`.
    #[arg(
        long = "test-case",
        value_name = "ID",
        help = "Read a fixture configuration instead of the live one"
    )]
    pub test_case: Option<String>,

    /// Preview every rewrite without touching the tree.
    #[arg(long = "dry-run", help = "Show what would be patched without writing")]
    pub dry_run: bool,

    /// Leave the package-manager install step out.
    #[arg(long = "skip-install", help = "Skip the dependency install step")]
    pub skip_install: bool,
}

// ── entity ────────────────────────────────────────────────────────────────────

/// Arguments for `schemafit entity`.
#[derive(Debug, Args)]
pub struct EntityArgs {
    /// Root of the generated project.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Generated project to re-align"
    )]
    pub project_dir: PathBuf,

    /// Resolve a named fixture instead of the live `.yo-rc.json`.
    #[arg(
        long = "test-case",
        value_name = "ID",
        help = "Read a fixture configuration instead of the live one"
    )]
    pub test_case: Option<String>,

    /// Preview every rewrite without touching the tree.
    #[arg(long = "dry-run", help = "Show what would be patched without writing")]
    pub dry_run: bool,
}

// ── hooks ─────────────────────────────────────────────────────────────────────

/// Arguments for `schemafit hooks`.
#[derive(Debug, Args)]
pub struct HooksArgs {
    /// Root of the generated project; the hook document lives beneath it.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Generated project whose hook registry to update"
    )]
    pub project_dir: PathBuf,
}

// ── context ───────────────────────────────────────────────────────────────────

/// Arguments for `schemafit context`.
#[derive(Debug, Args)]
pub struct ContextArgs {
    /// Root of the generated project.
    #[arg(
        short = 'p',
        long = "project-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Generated project to inspect"
    )]
    pub project_dir: PathBuf,

    /// Resolve a named fixture instead of the live `.yo-rc.json`.
    #[arg(
        long = "test-case",
        value_name = "ID",
        help = "Read a fixture configuration instead of the live one"
    )]
    pub test_case: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ContextFormat,
}

/// Output format for the `context` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ContextFormat {
    /// Human-readable field table.
    Table,
    /// JSON object.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `schemafit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `schemafit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_apply_command() {
        let cli = Cli::parse_from([
            "schemafit",
            "apply",
            "--project-dir",
            "./my-app",
            "--dry-run",
        ]);
        if let Commands::Apply(args) = cli.command {
            assert_eq!(args.project_dir, PathBuf::from("./my-app"));
            assert!(args.dry_run);
            assert!(!args.skip_install);
            assert!(args.test_case.is_none());
        } else {
            panic!("expected Apply command");
        }
    }

    #[test]
    fn apply_alias() {
        let cli = Cli::parse_from(["schemafit", "a", "--skip-install"]);
        if let Commands::Apply(args) = cli.command {
            assert!(args.skip_install);
        } else {
            panic!("expected Apply command");
        }
    }

    #[test]
    fn project_dir_defaults_to_cwd() {
        let cli = Cli::parse_from(["schemafit", "entity"]);
        if let Commands::Entity(args) = cli.command {
            assert_eq!(args.project_dir, PathBuf::from("."));
        } else {
            panic!("expected Entity command");
        }
    }

    #[test]
    fn context_accepts_test_case_and_json_format() {
        let cli = Cli::parse_from([
            "schemafit",
            "context",
            "--test-case",
            "maven-app",
            "--format",
            "json",
        ]);
        if let Commands::Context(args) = cli.command {
            assert_eq!(args.test_case.as_deref(), Some("maven-app"));
            assert_eq!(args.format, ContextFormat::Json);
        } else {
            panic!("expected Context command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["schemafit", "--quiet", "--verbose", "hooks"]);
        assert!(result.is_err());
    }
}
