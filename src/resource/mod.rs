//! Notebook resource enumeration
//!
//! Each enumerator connects a client for the requested region, lists one
//! resource type, normalizes every entry into a flat record and reports it.
//! A failure anywhere in a flow discards the records gathered so far and
//! yields [`ScanOutcome::Failed`].
//!
//! - [`notebooks`] - SageMaker notebook instances (list + describe)
//! - [`studio`] - SageMaker Studio apps (list only)
//! - [`arn`] - Region extraction from resource identifiers

pub mod arn;
pub mod notebooks;
pub mod studio;

#[cfg(test)]
pub(crate) mod testing;

use crate::aws::format_aws_error;

pub use arn::{region_from_arn, MalformedArn};
pub use notebooks::{enumerate_notebook_instances, NotebookInstanceRecord};
pub use studio::{enumerate_studio_apps, StudioAppRecord};

/// Why an enumeration produced no records
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("could not create SageMaker client for {region}: {cause:#}")]
    Connect { region: String, cause: anyhow::Error },

    #[error("{operation} failed: {cause:#}")]
    ProviderCall {
        operation: &'static str,
        cause: anyhow::Error,
    },

    #[error("notebook instance {0} has no ARN")]
    MissingArn(String),

    #[error(transparent)]
    MalformedArn(#[from] MalformedArn),
}

impl ScanError {
    /// Short message for the console
    pub fn display_message(&self) -> String {
        match self {
            ScanError::Connect { cause, .. } | ScanError::ProviderCall { cause, .. } => {
                format_aws_error(cause)
            }
            other => other.to_string(),
        }
    }
}

/// Result of one enumeration flow
#[derive(Debug)]
pub enum ScanOutcome<T> {
    /// At least one record, in provider order
    Found(Vec<T>),
    /// The provider returned no resources
    Empty,
    /// A provider call or normalization step failed
    Failed(ScanError),
}

impl<T> ScanOutcome<T> {
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            ScanOutcome::Empty
        } else {
            ScanOutcome::Found(records)
        }
    }

    /// Records found; empty for both [`ScanOutcome::Empty`] and [`ScanOutcome::Failed`]
    pub fn records(&self) -> &[T] {
        match self {
            ScanOutcome::Found(records) => records,
            _ => &[],
        }
    }

    pub fn into_records(self) -> Vec<T> {
        match self {
            ScanOutcome::Found(records) => records,
            _ => Vec::new(),
        }
    }

    pub fn error(&self) -> Option<&ScanError> {
        match self {
            ScanOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ScanOutcome::Failed(_))
    }
}

/// Region for the Studio scan: the first notebook's region, or `fallback`
pub fn studio_region(notebooks: &ScanOutcome<NotebookInstanceRecord>, fallback: &str) -> String {
    notebooks
        .records()
        .first()
        .map(|nb| nb.region.clone())
        .unwrap_or_else(|| fallback.to_string())
}
