//! AWS API interaction module
//!
//! Thin adapter over `aws-sdk-sagemaker`. The enumerators only see the
//! [`SageMakerApi`] and [`Connector`] traits, so they can be driven by the
//! real SDK client or by a scripted stand-in.
//!
//! # Module Structure
//!
//! - [`client`] - SDK-backed client and connector
//! - [`error`] - Operator-facing error messages
//!
//! # Example
//!
//! ```ignore
//! use nbaudit::aws::{AwsConnector, Connector};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let api = AwsConnector::default().connect("eu-west-1").await?;
//!     let instances = api.list_notebook_instances().await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;

use anyhow::Result;
use async_trait::async_trait;

pub use client::{AwsConnector, SageMakerClient};
pub use error::format_aws_error;

/// One entry of a notebook-instance listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotebookInstanceSummary {
    pub name: String,
}

/// Attributes returned by a notebook-instance describe call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotebookInstanceDetail {
    pub direct_internet_access: Option<String>,
    pub instance_type: Option<String>,
    pub arn: Option<String>,
}

/// One entry of a Studio app listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSummary {
    pub app_name: String,
    pub app_type: Option<String>,
    pub domain_id: Option<String>,
    pub user_profile_name: Option<String>,
}

/// Read-only SageMaker operations used by the enumerators.
///
/// Each call returns the first page only.
#[async_trait]
pub trait SageMakerApi: Send + Sync {
    async fn list_notebook_instances(&self) -> Result<Vec<NotebookInstanceSummary>>;

    async fn describe_notebook_instance(&self, name: &str) -> Result<NotebookInstanceDetail>;

    async fn list_apps(&self) -> Result<Vec<AppSummary>>;
}

/// Produces a [`SageMakerApi`] scoped to a region
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, region: &str) -> Result<Box<dyn SageMakerApi>>;
}
