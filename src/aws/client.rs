//! SageMaker Client
//!
//! `aws-sdk-sagemaker` backed implementation of [`SageMakerApi`], plus the
//! connector that builds one per region.

use super::{AppSummary, Connector, NotebookInstanceDetail, NotebookInstanceSummary, SageMakerApi};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sagemaker::config::retry::RetryConfig;
use aws_sdk_sagemaker::config::{Credentials, Region};
use aws_sdk_sagemaker::error::DisplayErrorContext;
use aws_sdk_sagemaker::types::{AppType, DirectInternetAccess, InstanceType};
use aws_sdk_sagemaker::Client;

/// SDK-backed SageMaker client
#[derive(Clone, Debug)]
pub struct SageMakerClient {
    client: Client,
}

impl SageMakerClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Region the underlying client is scoped to
    pub fn region(&self) -> Option<String> {
        self.client.config().region().map(|r| r.to_string())
    }
}

#[async_trait]
impl SageMakerApi for SageMakerClient {
    async fn list_notebook_instances(&self) -> Result<Vec<NotebookInstanceSummary>> {
        tracing::debug!("ListNotebookInstances");

        let output = self
            .client
            .list_notebook_instances()
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

        output
            .notebook_instances
            .unwrap_or_default()
            .into_iter()
            .map(|summary| {
                let name = present::<String>(summary.notebook_instance_name)
                    .ok_or_else(|| anyhow!("notebook instance summary without a name"))?;
                Ok(NotebookInstanceSummary { name })
            })
            .collect()
    }

    async fn describe_notebook_instance(&self, name: &str) -> Result<NotebookInstanceDetail> {
        tracing::debug!("DescribeNotebookInstance {}", name);

        let output = self
            .client
            .describe_notebook_instance()
            .notebook_instance_name(name)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

        Ok(NotebookInstanceDetail {
            direct_internet_access: present::<DirectInternetAccess>(output.direct_internet_access)
                .map(|v| v.as_str().to_string()),
            instance_type: present::<InstanceType>(output.instance_type)
                .map(|v| v.as_str().to_string()),
            arn: present::<String>(output.notebook_instance_arn),
        })
    }

    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        tracing::debug!("ListApps");

        let output = self
            .client
            .list_apps()
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(&e)))?;

        output
            .apps
            .unwrap_or_default()
            .into_iter()
            .map(|app| {
                let app_name = present::<String>(app.app_name)
                    .ok_or_else(|| anyhow!("studio app without a name"))?;
                Ok(AppSummary {
                    app_name,
                    app_type: present::<AppType>(app.app_type)
                        .map(|v| v.as_str().to_string()),
                    domain_id: present::<String>(app.domain_id),
                    user_profile_name: present::<String>(app.user_profile_name),
                })
            })
            .collect()
    }
}

/// Normalizes SDK members that are generated either as `T` or `Option<T>`
/// depending on whether the service model marks them required.
fn present<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

/// Builds a [`SageMakerClient`] per region from the default AWS config chain
#[derive(Clone, Debug, Default)]
pub struct AwsConnector {
    endpoint_url: Option<String>,
    credentials: Option<Credentials>,
}

impl AwsConnector {
    /// Send requests to `url` instead of the regional SageMaker endpoint
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Use fixed credentials instead of the default provider chain
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Connect and return the concrete client
    pub async fn client(&self, region: &str) -> SageMakerClient {
        tracing::debug!("Loading AWS config for region {}", region);

        // Throttling must abort the scan like any other failure
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .retry_config(RetryConfig::disabled());

        if let Some(url) = &self.endpoint_url {
            loader = loader.endpoint_url(url.clone());
        }
        if let Some(credentials) = &self.credentials {
            loader = loader.credentials_provider(credentials.clone());
        }

        let sdk_config = loader.load().await;
        SageMakerClient::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl Connector for AwsConnector {
    async fn connect(&self, region: &str) -> Result<Box<dyn SageMakerApi>> {
        Ok(Box::new(self.client(region).await))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_accepts_plain_and_optional_values() {
        assert_eq!(present::<String>("nb-1".to_string()), Some("nb-1".to_string()));
        assert_eq!(present::<String>(Some("nb-1".to_string())), Some("nb-1".to_string()));
        assert_eq!(present::<String>(None::<String>), None);
    }

    #[tokio::test]
    async fn test_client_is_scoped_to_requested_region() {
        let connector = AwsConnector::default()
            .with_endpoint_url("http://127.0.0.1:1")
            .with_credentials(Credentials::new("AKID", "SECRET", None, None, "test"));

        let client = connector.client("eu-west-1").await;

        assert_eq!(client.region().as_deref(), Some("eu-west-1"));
    }
}
