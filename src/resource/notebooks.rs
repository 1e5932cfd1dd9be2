//! SageMaker notebook instances
//!
//! Lists the instances in a region, describes each one and reports whether
//! it has direct internet access.

use super::arn::region_from_arn;
use super::{ScanError, ScanOutcome};
use crate::aws::{Connector, NotebookInstanceDetail, NotebookInstanceSummary, SageMakerApi};
use crate::report::{Report, Reporter};
use serde::Serialize;
use std::io::Write;
use tracing::Instrument;

/// Subject used in progress and error lines
const SUBJECT: &str = "SageMaker notebook instances";

/// DirectInternetAccess value that marks an instance as public
pub const DIRECT_INTERNET_ENABLED: &str = "Enabled";

/// Normalized notebook instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookInstanceRecord {
    pub name: String,
    pub is_public: bool,
    pub instance_type: Option<String>,
    /// The instance's own ARN. SageMaker exposes no creator principal on
    /// this API, so "owner" is the resource identifier itself.
    pub owner_arn: String,
    pub region: String,
}

impl NotebookInstanceRecord {
    /// Build a record from a describe response
    pub fn from_detail(name: &str, detail: NotebookInstanceDetail) -> Result<Self, ScanError> {
        let arn = detail
            .arn
            .ok_or_else(|| ScanError::MissingArn(name.to_string()))?;
        let region = region_from_arn(&arn)?.to_string();

        Ok(Self {
            name: name.to_string(),
            is_public: detail.direct_internet_access.as_deref() == Some(DIRECT_INTERNET_ENABLED),
            instance_type: detail.instance_type,
            owner_arn: arn,
            region,
        })
    }
}

impl Report for NotebookInstanceRecord {
    fn subject(&self) -> &str {
        &self.name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Notebook Name", self.name.clone()),
            ("Is Public", self.is_public.to_string()),
            (
                "EC2 Instance Type",
                self.instance_type.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("Owner", self.owner_arn.clone()),
            ("Region", self.region.clone()),
        ]
    }
}

/// Enumerate the notebook instances of `region`
///
/// Only the first page of the listing is processed. Any failure discards
/// the records gathered so far.
pub async fn enumerate_notebook_instances<C, W>(
    connector: &C,
    region: &str,
    reporter: &mut Reporter<W>,
) -> ScanOutcome<NotebookInstanceRecord>
where
    C: Connector + ?Sized,
    W: Write,
{
    let span = tracing::info_span!("notebook_instances", region = %region);

    async {
        match scan(connector, region, reporter).await {
            Ok(records) => {
                tracing::info!("Found {} notebook instances", records.len());
                ScanOutcome::from_records(records)
            }
            Err(err) => {
                reporter.failure(SUBJECT, &err.to_string(), &err.display_message());
                ScanOutcome::Failed(err)
            }
        }
    }
    .instrument(span)
    .await
}

async fn scan<C, W>(
    connector: &C,
    region: &str,
    reporter: &mut Reporter<W>,
) -> Result<Vec<NotebookInstanceRecord>, ScanError>
where
    C: Connector + ?Sized,
    W: Write,
{
    let api = connector
        .connect(region)
        .await
        .map_err(|cause| ScanError::Connect {
            region: region.to_string(),
            cause,
        })?;

    reporter.progress("Fetching list of SageMaker notebook instances...");

    let summaries = api
        .list_notebook_instances()
        .await
        .map_err(|cause| ScanError::ProviderCall {
            operation: "ListNotebookInstances",
            cause,
        })?;

    if summaries.is_empty() {
        reporter.none_found("No SageMaker notebooks found.");
        return Ok(Vec::new());
    }

    let mut records = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        records.push(fetch_one(api.as_ref(), summary, reporter).await?);
    }

    Ok(records)
}

async fn fetch_one<W: Write>(
    api: &dyn SageMakerApi,
    summary: &NotebookInstanceSummary,
    reporter: &mut Reporter<W>,
) -> Result<NotebookInstanceRecord, ScanError> {
    reporter.item("notebook", &summary.name);

    let detail = api
        .describe_notebook_instance(&summary.name)
        .await
        .map_err(|cause| ScanError::ProviderCall {
            operation: "DescribeNotebookInstance",
            cause,
        })?;

    let record = NotebookInstanceRecord::from_detail(&summary.name, detail)?;
    reporter.record(&record);

    Ok(record)
}
