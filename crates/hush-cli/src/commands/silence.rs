//! Silence command implementation.
//!
//! Wires argument parsing to the hush-silence pipeline: matchers, then the
//! time window, then one immutable request handed to the tenant dispatcher.
//! The whole dispatch runs under the command deadline.

use std::env;
use std::io::Write;
use std::time::Duration;

use chrono::Utc;
use tokio::time::timeout;
use tracing::debug;

use hush_silence::{
    parse_matchers, SilenceRequest, SilenceWindow, TenantDispatcher, TenantSelection, WindowParams,
};

use crate::cli::{AddArgs, SilenceCommands};
use crate::client::AlertmanagerClient;
use crate::error::CliError;

/// Handler for silence subcommands.
pub struct SilenceCommand<'a> {
    alertmanager_url: &'a str,
    deadline: Duration,
}

impl<'a> SilenceCommand<'a> {
    /// Creates a new silence command handler.
    #[must_use]
    pub const fn new(alertmanager_url: &'a str, deadline: Duration) -> Self {
        Self {
            alertmanager_url,
            deadline,
        }
    }

    /// Executes the silence subcommand.
    ///
    /// # Errors
    ///
    /// Returns error if the command fails.
    pub async fn execute<W: Write>(
        &self,
        out: &mut W,
        command: &SilenceCommands,
    ) -> Result<(), CliError> {
        match command {
            SilenceCommands::Add(args) => self.add(out, args).await,
        }
    }

    async fn add<W: Write>(&self, out: &mut W, args: &AddArgs) -> Result<(), CliError> {
        let matchers = parse_matchers(&args.matchers)?;

        let window = SilenceWindow::resolve(
            &WindowParams {
                start: args.start.as_deref(),
                end: args.end.as_deref(),
                duration: &args.duration,
                max_duration: &args.max_duration,
                require_comment: args.require_comment,
                comment: &args.comment,
            },
            Utc::now(),
        )?;

        let author = args.author.clone().unwrap_or_else(username);
        let request = SilenceRequest::new(matchers, window, author, args.comment.clone());
        debug!(
            matchers = request.matchers.len(),
            starts_at = %request.starts_at,
            ends_at = %request.ends_at,
            "silence request built"
        );

        let selection =
            TenantSelection::from_sources(args.tenant.clone(), args.tenant_file.clone())?;
        let client = AlertmanagerClient::new(self.alertmanager_url, &args.tenant_header)?;
        let dispatcher = TenantDispatcher::new(selection);

        let outcomes = timeout(self.deadline, dispatcher.dispatch(&client, &request, out))
            .await
            .map_err(|_| CliError::Timeout(format!("{:?}", self.deadline)))??;
        debug!(
            attempted = outcomes.len(),
            failed = outcomes.iter().filter(|o| !o.success).count(),
            "dispatch complete"
        );
        Ok(())
    }
}

/// Best-effort lookup of the invoking user's name; empty when unknown.
fn username() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_default()
}
