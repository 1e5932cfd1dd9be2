//! SageMaker Studio apps
//!
//! Records are built straight from the ListApps output; there is no
//! per-app describe call.

use super::{ScanError, ScanOutcome};
use crate::aws::{AppSummary, Connector};
use crate::report::{Report, Reporter};
use serde::Serialize;
use std::io::Write;
use tracing::Instrument;

const SUBJECT: &str = "SageMaker Studio notebooks";

/// Placeholder for attributes missing from the listing
pub const UNKNOWN: &str = "Unknown";

/// Normalized Studio app
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioAppRecord {
    pub app_name: String,
    pub app_type: String,
    pub domain_id: String,
    pub user_profile_name: String,
}

impl From<AppSummary> for StudioAppRecord {
    fn from(app: AppSummary) -> Self {
        let or_unknown = |value: Option<String>| value.unwrap_or_else(|| UNKNOWN.to_string());

        Self {
            app_name: app.app_name,
            app_type: or_unknown(app.app_type),
            domain_id: or_unknown(app.domain_id),
            user_profile_name: or_unknown(app.user_profile_name),
        }
    }
}

impl Report for StudioAppRecord {
    fn subject(&self) -> &str {
        &self.app_name
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("App Name", self.app_name.clone()),
            ("App Type", self.app_type.clone()),
            ("Domain ID", self.domain_id.clone()),
            ("User Profile Name", self.user_profile_name.clone()),
        ]
    }
}

/// Enumerate the Studio apps of `region`
///
/// Only the first page of the listing is processed.
pub async fn enumerate_studio_apps<C, W>(
    connector: &C,
    region: &str,
    reporter: &mut Reporter<W>,
) -> ScanOutcome<StudioAppRecord>
where
    C: Connector + ?Sized,
    W: Write,
{
    let span = tracing::info_span!("studio_apps", region = %region);

    async {
        match scan(connector, region, reporter).await {
            Ok(records) => {
                tracing::info!("Found {} Studio apps", records.len());
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
) -> Result<Vec<StudioAppRecord>, ScanError>
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

    reporter.progress("Fetching list of SageMaker Studio notebooks (apps)...");

    let apps = api.list_apps().await.map_err(|cause| ScanError::ProviderCall {
        operation: "ListApps",
        cause,
    })?;

    if apps.is_empty() {
        reporter.none_found("No SageMaker Studio notebooks found.");
        return Ok(Vec::new());
    }

    let records: Vec<StudioAppRecord> = apps
        .into_iter()
        .map(|app| {
            reporter.item("Studio notebook", &app.app_name);
            let record = StudioAppRecord::from(app);
            reporter.record(&record);
            record
        })
        .collect();

    Ok(records)
}
