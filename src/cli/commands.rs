use crate::gradle::{DEFAULT_APP_FOLDER, DEFAULT_KEY};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Extract Android versionCode values from Gradle build scripts
#[derive(Parser, Debug)]
#[command(
    name = "vercode",
    about = "Extract Android versionCode values from Gradle build scripts",
    version,
    author,
    long_about = "vercode reads the version code of an Android project from its Gradle \
                  build script. It understands product flavors: a flavor-specific value \
                  takes precedence over defaultConfig, which takes precedence over a \
                  plain whole-file scan."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Increase verbosity")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Extract the version code from a project's build scripts",
        long_about = "Searches the project tree for <app-folder>/build.gradle (or the \
                      Kotlin DSL variant) and extracts the version code, optionally \
                      scoped to a product flavor.\n\n\
                      Examples:\n  \
                      vercode extract\n  \
                      vercode extract /path/to/project --flavor paid\n  \
                      vercode extract --gradle-file app/build.gradle --format json"
    )]
    Extract(ExtractArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractArgs {
    #[arg(
        value_name = "PATH",
        help = "Project root to search (defaults to current directory)"
    )]
    pub project_path: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        env = "VERCODE_GRADLE_FILE",
        help = "Explicit path to the gradle file; skips directory discovery"
    )]
    pub gradle_file: Option<PathBuf>,

    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_APP_FOLDER,
        env = "VERCODE_APP_FOLDER",
        help = "Name of the application module folder to search for"
    )]
    pub app_folder: String,

    #[arg(
        short = 'k',
        long,
        value_name = "NAME",
        default_value = DEFAULT_KEY,
        env = "VERCODE_KEY",
        help = "Constant name holding the version code (e.g. an ext constant)"
    )]
    pub key: String,

    #[arg(
        long,
        value_name = "NAME",
        env = "VERCODE_FLAVOR",
        help = "Product flavor to read a flavor-specific version code from"
    )]
    pub flavor: Option<String>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
