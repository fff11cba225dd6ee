//! Multi-tenant silence dispatch.
//!
//! A silence is submitted once per tenant, sequentially and in order. Tenant
//! selection is decided once per invocation from mutually exclusive sources:
//! nothing, a single tenant flag, or a line-delimited tenant file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, SilenceError};
use crate::types::{SilenceRequest, SubmissionOutcome};

/// Where the tenant set comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantSelection {
    /// No tenant configuration: submit once, unadorned.
    None,
    /// One tenant supplied directly: submit once with the tenant header.
    Single(String),
    /// A tenant-list file: submit once per line, in file order.
    File(PathBuf),
}

impl TenantSelection {
    /// Decides the selection from the two CLI sources.
    ///
    /// An empty tenant string counts as unset. Supplying both sources is a
    /// configuration error, raised here so the conflict fails before any
    /// submission is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::ConflictingTenantConfig`] if both a tenant and
    /// a tenant file are given.
    pub fn from_sources(tenant: Option<String>, tenant_file: Option<PathBuf>) -> Result<Self> {
        let tenant = tenant.filter(|t| !t.is_empty());
        match (tenant, tenant_file) {
            (Some(_), Some(_)) => Err(SilenceError::ConflictingTenantConfig),
            (Some(t), None) => Ok(Self::Single(t)),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => Ok(Self::None),
        }
    }
}

/// Submits one silence, optionally on behalf of a tenant.
///
/// Implementations attach the tenant to the request they make (an HTTP header
/// for the real client) and return the created silence's identifier.
pub trait SilenceSubmitter {
    /// Submits the request, returning the new silence ID.
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::Submission`] carrying the tenant context when
    /// the server rejects the silence or the request fails in transit.
    async fn submit(&self, request: &SilenceRequest, tenant: Option<&str>) -> Result<String>;
}

/// Dispatches one silence request across the selected tenant set.
#[derive(Debug, Clone)]
pub struct TenantDispatcher {
    selection: TenantSelection,
}

impl TenantDispatcher {
    /// Creates a dispatcher for the given tenant selection.
    #[must_use]
    pub const fn new(selection: TenantSelection) -> Self {
        Self { selection }
    }

    /// Submits `request` once per selected tenant, writing one outcome line
    /// per submission to `out`.
    ///
    /// File mode has partial-failure semantics: a failed tenant is reported
    /// and the loop continues, so every tenant in the file is attempted. In
    /// no-tenant and single-tenant modes a submission failure is returned as
    /// the command's failure.
    ///
    /// # Errors
    ///
    /// Returns [`SilenceError::TenantFileRead`] if the tenant file cannot be
    /// read, and [`SilenceError::Submission`] for fatal submission failures.
    pub async fn dispatch<S, W>(
        &self,
        submitter: &S,
        request: &SilenceRequest,
        out: &mut W,
    ) -> Result<Vec<SubmissionOutcome>>
    where
        S: SilenceSubmitter,
        W: Write,
    {
        match &self.selection {
            TenantSelection::None => {
                debug!("submitting silence without tenant");
                let id = submitter.submit(request, None).await?;
                writeln!(out, "Silence added: {id}")?;
                Ok(vec![SubmissionOutcome::success(None, id)])
            }
            TenantSelection::Single(tenant) => {
                debug!(tenant = %tenant, "submitting silence for single tenant");
                let id = submitter.submit(request, Some(tenant)).await?;
                writeln!(out, "Silence added for '{tenant}' tenant: {id}")?;
                Ok(vec![SubmissionOutcome::success(Some(tenant.clone()), id)])
            }
            TenantSelection::File(path) => {
                let tenants = read_tenant_file(path)?;
                let mut outcomes = Vec::with_capacity(tenants.len());
                for tenant in tenants {
                    debug!(tenant = %tenant, "submitting silence for tenant from file");
                    match submitter.submit(request, Some(&tenant)).await {
                        Ok(id) => {
                            writeln!(out, "Silence added for '{tenant}' tenant: {id}")?;
                            outcomes.push(SubmissionOutcome::success(Some(tenant), id));
                        }
                        Err(err) => {
                            writeln!(out, "{err}")?;
                            outcomes.push(SubmissionOutcome::failure(Some(tenant), err.to_string()));
                        }
                    }
                }
                Ok(outcomes)
            }
        }
    }
}

/// Reads a line-delimited tenant file.
///
/// Lines are split as-is: no trimming, no comment syntax. Interior blank
/// lines become empty tenant identifiers; a trailing newline does not produce
/// a phantom final tenant.
///
/// # Errors
///
/// Returns [`SilenceError::TenantFileRead`] if the file cannot be read.
pub fn read_tenant_file(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| SilenceError::TenantFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.lines().map(ToString::to_string).collect())
}
