//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

const SILENCE_ADD_HELP: &str = "\
hush uses a simplified Prometheus syntax to represent silences. The
non-option section of arguments constructs a list of matchers that the
silence will apply to:

  hush silence add alertname=foo node=bar

    Adds a silence matching alerts with the alertname=foo and node=bar
    label value pairs set.

  hush silence add foo node=bar

    If the first argument does not contain an operator it is taken as
    the value of the alertname pair.

  hush silence add 'alertname=~foo.*'

    The '=~' syntax (similar to Prometheus) represents a regex match;
    regex matchers can be combined with direct matchers.";

/// hush - Alertmanager silences distributor.
#[derive(Parser, Debug, Clone)]
#[command(name = "hush")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Alertmanager base URL to talk to.
    #[arg(long, env = "HUSH_ALERTMANAGER_URL")]
    pub alertmanager_url: String,

    /// Deadline for the whole command, e.g. `30s` or `1m`.
    #[arg(long, default_value = "30s")]
    pub timeout: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Silence management commands.
    Silence {
        /// Silence subcommand to execute.
        #[command(subcommand)]
        command: SilenceCommands,
    },
}

/// Silence subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum SilenceCommands {
    /// Add a new silence.
    #[command(after_help = SILENCE_ADD_HELP)]
    Add(AddArgs),
}

/// Arguments for the silence add command.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Matcher groups, e.g. `alertname=foo 'node=~bar.*'`.
    pub matchers: Vec<String>,

    /// Tenant to add the silence for.
    #[arg(short, long)]
    pub tenant: Option<String>,

    /// File with one tenant per line; the silence is added for each.
    #[arg(long, value_name = "FILE")]
    pub tenant_file: Option<PathBuf>,

    /// HTTP header carrying the tenant on each request.
    #[arg(long, default_value = "X-Scope-OrgID")]
    pub tenant_header: String,

    /// Username for the createdBy field. Defaults to the invoking user.
    #[arg(short, long)]
    pub author: Option<String>,

    /// Require a comment to be set.
    #[arg(long, hide = true, default_value_t = true, action = clap::ArgAction::Set)]
    pub require_comment: bool,

    /// Duration of the silence.
    #[arg(short, long, default_value = "1h")]
    pub duration: String,

    /// Maximum allowed silence duration.
    #[arg(long, default_value = "12h")]
    pub max_duration: String,

    /// When the silence should start, RFC3339 format (defaults to now).
    #[arg(long)]
    pub start: Option<String>,

    /// When the silence should end, RFC3339 format (overrides duration).
    #[arg(long)]
    pub end: Option<String>,

    /// A comment to help describe the silence.
    #[arg(short, long, default_value = "")]
    pub comment: String,
}
