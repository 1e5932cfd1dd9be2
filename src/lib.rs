//! nbaudit - inventory of SageMaker notebook compute
//!
//! Enumerates SageMaker notebook instances and Studio apps in one region,
//! normalizes them into flat records and reports each one to the console
//! and the log.
//!
//! # Module Structure
//!
//! - [`aws`] - SageMaker client adapter and error formatting
//! - [`config`] - Persistent configuration file
//! - [`report`] - Console/log reporting shared by both enumerators
//! - [`resource`] - Notebook-instance and Studio-app enumerators

pub mod aws;
pub mod config;
pub mod report;
pub mod resource;

/// Region used when neither the command line nor the config file names one.
pub const DEFAULT_REGION: &str = "us-east-1";
