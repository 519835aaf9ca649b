//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use reactor_core::domain::{Architecture, ArtifactKind, ExtensionPolicy, StylesLanguage};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "reactor",
    bin_name = "reactor",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{269b} Flux and reflux React scaffolding",
    long_about = "reactor sets up React projects wired for flux or reflux and \
                  generates stores, actions, components, classes and dispatchers \
                  with matching test files.",
    after_help = "EXAMPLES:\n\
        \x20 reactor init todo-app --architecture flux --styles scss\n\
        \x20 reactor generate store Todo\n\
        \x20 reactor g component Todo/TodoItem\n\
        \x20 reactor completions bash > /usr/share/bash-completion/completions/reactor",
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
    /// Set up a new project in the project directory.
    #[command(
        about = "Initialise a React project",
        after_help = "EXAMPLES:\n\
            \x20 reactor init                      # prompt for everything\n\
            \x20 reactor init temp-test --architecture flux --yes\n\
            \x20 reactor init shop --styles stylus --full-extensions"
    )]
    Init(InitArgs),

    /// Generate one artifact with its test file.
    #[command(
        visible_alias = "g",
        about = "Generate a store, action, component, class or dispatcher",
        after_help = "EXAMPLES:\n\
            \x20 reactor generate store Test          # src/scripts/stores/TestStore.js\n\
            \x20 reactor g action Test                # src/scripts/actions/TestActionCreators.js\n\
            \x20 reactor g component Card/CardItem    # plus src/styles/Card/CardItem/main.css\n\
            \x20 reactor g class Util --dir ./my-app --dry-run"
    )]
    Generate(GenerateArgs),

    /// List the templates the generator can render.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 reactor list\n\
            \x20 reactor list --kind store\n\
            \x20 reactor list --format json"
    )]
    List(ListArgs),

    /// Read and write the project configuration (`.yo-rc.json`).
    #[command(
        about = "Project configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 reactor config get architecture\n\
            \x20 reactor config set styles-language scss\n\
            \x20 reactor config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 reactor completions bash > ~/.local/share/bash-completion/completions/reactor\n\
            \x20 reactor completions zsh  > ~/.zfunc/_reactor\n\
            \x20 reactor completions fish > ~/.config/fish/completions/reactor.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `reactor init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Application name. Defaults to the project directory name.
    #[arg(value_name = "APP_NAME", help = "Application name")]
    pub app_name: Option<String>,

    /// State management architecture.
    #[arg(
        short = 'a',
        long = "architecture",
        value_enum,
        help = "Architecture (flux, reflux or none)"
    )]
    pub architecture: Option<ArchitectureArg>,

    /// Stylesheet language.
    #[arg(short = 's', long = "styles", value_enum, help = "Styles language")]
    pub styles: Option<StylesArg>,

    /// Directory holding `index.html`, `scripts/` and `styles/`.
    #[arg(long = "app-path", value_name = "PATH", help = "Application source directory")]
    pub app_path: Option<String>,

    /// Use `.stylus` instead of the legacy four-character `.styl`.
    #[arg(long = "full-extensions", help = "Do not truncate style extensions")]
    pub full_extensions: bool,

    /// Accept defaults for anything not given on the command line.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and use defaults")]
    pub yes: bool,

    /// Re-initialise an existing project and overwrite its files.
    #[arg(short = 'f', long = "force", help = "Overwrite an existing project")]
    pub force: bool,

    /// Preview the files without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `reactor generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What to generate.
    #[arg(value_enum, value_name = "KIND", help = "Artifact kind")]
    pub kind: KindArg,

    /// Base name, optionally prefixed with directories (`Todo/TodoItem`).
    /// For `config`, the asset name (`package`, `karma`, ...).
    #[arg(value_name = "NAME", help = "Artifact name")]
    pub name: String,

    /// Place the file under this subdirectory of `scripts/` instead of the
    /// kind's default.
    #[arg(long = "subdir", value_name = "DIR", help = "Override the scripts subdirectory")]
    pub subdir: Option<String>,

    /// Overwrite files that already exist.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview the files without writing anything.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `reactor list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only templates for this kind.
    #[arg(short = 'k', long = "kind", value_enum, help = "Filter by artifact kind")]
    pub kind: Option<KindArg>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One id per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `reactor completions`.
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

/// Subcommands for `reactor config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// One of `architecture`, `styles-language`, `styles-extension`,
        /// `app-name`, `appPath`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set { key: String, value: String },
    /// Print all configuration values.
    List,
    /// Print the path to the project configuration file.
    Path,
    /// Show the user configuration (defaults for `reactor init`).
    User {
        /// Write the current user configuration to its default location.
        #[arg(long = "write")]
        write: bool,
    },
}

// ── value enums ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ArchitectureArg {
    Flux,
    Reflux,
    /// Plain React, no store library.
    None,
}

impl ArchitectureArg {
    pub fn to_domain(self) -> Option<Architecture> {
        match self {
            Self::Flux => Some(Architecture::Flux),
            Self::Reflux => Some(Architecture::Reflux),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StylesArg {
    Css,
    Sass,
    Scss,
    Less,
    #[value(alias = "styl")]
    Stylus,
}

impl From<StylesArg> for StylesLanguage {
    fn from(arg: StylesArg) -> Self {
        match arg {
            StylesArg::Css => Self::Css,
            StylesArg::Sass => Self::Sass,
            StylesArg::Scss => Self::Scss,
            StylesArg::Less => Self::Less,
            StylesArg::Stylus => Self::Stylus,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum KindArg {
    Store,
    #[value(alias = "actions")]
    Action,
    Component,
    Class,
    Dispatcher,
    Config,
}

impl From<KindArg> for ArtifactKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Store => Self::Store,
            KindArg::Action => Self::Action,
            KindArg::Component => Self::Component,
            KindArg::Class => Self::Class,
            KindArg::Dispatcher => Self::Dispatcher,
            KindArg::Config => Self::Config,
        }
    }
}

impl InitArgs {
    pub fn extension_policy(&self) -> Option<ExtensionPolicy> {
        self.full_extensions.then_some(ExtensionPolicy::Full)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_with_alias() {
        let cli = Cli::parse_from(["reactor", "g", "store", "Test"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.kind, KindArg::Store);
        assert_eq!(args.name, "Test");
        assert!(!args.force);
    }

    #[test]
    fn dir_is_global() {
        let cli = Cli::parse_from(["reactor", "generate", "class", "Util", "--dir", "app"]);
        assert_eq!(cli.global.dir.as_deref(), Some(std::path::Path::new("app")));
    }

    #[test]
    fn parse_init_flags() {
        let cli = Cli::parse_from([
            "reactor",
            "init",
            "temp-test",
            "--architecture",
            "flux",
            "--styles",
            "styl",
            "--full-extensions",
            "--yes",
        ]);
        let Commands::Init(args) = cli.command else {
            panic!("expected Init command");
        };
        assert_eq!(args.app_name.as_deref(), Some("temp-test"));
        assert_eq!(
            args.architecture.and_then(ArchitectureArg::to_domain),
            Some(Architecture::Flux)
        );
        assert_eq!(args.styles.map(StylesLanguage::from), Some(StylesLanguage::Stylus));
        assert_eq!(args.extension_policy(), Some(ExtensionPolicy::Full));
    }

    #[test]
    fn architecture_none_is_plain_react() {
        assert_eq!(ArchitectureArg::None.to_domain(), None);
    }

    #[test]
    fn every_kind_maps_to_domain() {
        for arg in KindArg::value_variants() {
            let kind = ArtifactKind::from(*arg);
            assert!(ArtifactKind::ALL.contains(&kind));
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["reactor", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
