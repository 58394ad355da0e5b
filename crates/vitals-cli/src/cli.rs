//! CLI argument definitions for the `vitals` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use vitals_eval::Policy;

#[derive(Parser)]
#[command(
    name = "vitals",
    version,
    about = "Biomarker evaluation - grade lab results and track overall health",
    long_about = "Grade blood test results against reference ranges.\n\n\
                  Values are entered by hand or imported from an AI extraction reply,\n\
                  stored locally, and rolled up into a single health status."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include lab values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Directory holding the stored biomarker mapping.
    #[arg(
        long = "store-dir",
        value_name = "DIR",
        env = "VITALS_STORE_DIR",
        default_value = ".vitals",
        global = true
    )]
    pub store_dir: PathBuf,
}

#[derive(Subcommand)]
pub enum Command {
    /// Grade the stored results, or a JSON file of results.
    Evaluate(EvaluateArgs),

    /// Show the overall health status of the stored results.
    Status,

    /// Enter results by hand, replacing the stored ones.
    Enter(EnterArgs),

    /// Import results from an AI extraction reply.
    Import(ImportArgs),

    /// Remove the stored results.
    Clear,

    /// Grade backend lab panels against the tolerance table.
    Panels(PanelsArgs),

    /// Show a weekly action plan from an AI reply, or print its prompt.
    Plan(PlanArgs),

    /// List the reference ranges.
    Biomarkers(BiomarkersArgs),
}

#[derive(Parser)]
pub struct EvaluateArgs {
    /// JSON object of biomarker values (default: the stored results).
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Classification strategy.
    #[arg(long = "policy", value_enum, default_value = "strict-band")]
    pub policy: PolicyArg,

    /// Print the evaluation as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct EnterArgs {
    /// Values as KEY=VALUE, e.g. `wbc=6.2 ldl=110`. An empty VALUE clears a field.
    #[arg(value_name = "KEY=VALUE", required = true)]
    pub values: Vec<String>,

    /// Start from the stored results instead of an empty form.
    #[arg(long = "merge")]
    pub merge: bool,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// File with the model reply (or service response with --response).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Treat FILE as an extraction service response envelope.
    #[arg(long = "response")]
    pub response: bool,

    /// HTTP status the service answered with.
    #[arg(long = "status", default_value_t = 200, requires = "response")]
    pub status: u16,
}

#[derive(Parser)]
pub struct PanelsArgs {
    /// JSON user profile with stored lab panels.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the panel reports as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// File with the model reply to render.
    #[arg(value_name = "FILE", conflicts_with = "prompt")]
    pub reply: Option<PathBuf>,

    /// Print the request prompt for the stored results.
    #[arg(long = "prompt")]
    pub prompt: bool,
}

#[derive(Parser)]
pub struct BiomarkersArgs {
    /// Which reference table to list.
    #[arg(long = "policy", value_enum, default_value = "strict-band")]
    pub policy: PolicyArg,
}

/// CLI classification strategy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    StrictBand,
    ToleranceScaled,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::StrictBand => Policy::StrictBand,
            PolicyArg::ToleranceScaled => Policy::ToleranceScaled,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
