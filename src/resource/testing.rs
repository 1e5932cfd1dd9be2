//! Scripted in-memory SageMaker API for enumerator tests

use crate::aws::{
    AppSummary, Connector, NotebookInstanceDetail, NotebookInstanceSummary, SageMakerApi,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct ScriptedApi {
    notebooks: Option<Vec<NotebookInstanceSummary>>,
    details: HashMap<String, NotebookInstanceDetail>,
    apps: Option<Vec<AppSummary>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            notebooks: Some(Vec::new()),
            apps: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Make the list call fail
    pub fn failing_list() -> Self {
        Self::default()
    }

    /// Add a listed notebook; `detail` of `None` makes its describe call fail
    pub fn notebook(mut self, name: &str, detail: Option<NotebookInstanceDetail>) -> Self {
        if let Some(list) = self.notebooks.as_mut() {
            list.push(NotebookInstanceSummary {
                name: name.to_string(),
            });
        }
        if let Some(detail) = detail {
            self.details.insert(name.to_string(), detail);
        }
        self
    }

    pub fn app(mut self, app: AppSummary) -> Self {
        if let Some(list) = self.apps.as_mut() {
            list.push(app);
        }
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn log(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SageMakerApi for ScriptedApi {
    async fn list_notebook_instances(&self) -> Result<Vec<NotebookInstanceSummary>> {
        self.log("ListNotebookInstances".to_string());
        self.notebooks
            .clone()
            .ok_or_else(|| anyhow!("ThrottlingException: Rate exceeded"))
    }

    async fn describe_notebook_instance(&self, name: &str) -> Result<NotebookInstanceDetail> {
        self.log(format!("DescribeNotebookInstance {}", name));
        self.details
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("ValidationException: RecordNotFound {}", name))
    }

    async fn list_apps(&self) -> Result<Vec<AppSummary>> {
        self.log("ListApps".to_string());
        self.apps
            .clone()
            .ok_or_else(|| anyhow!("ThrottlingException: Rate exceeded"))
    }
}

/// Hands out clones of one [`ScriptedApi`] and remembers requested regions
#[derive(Clone)]
pub struct ScriptedConnector {
    api: ScriptedApi,
    refuse: bool,
    regions: Arc<Mutex<Vec<String>>>,
}

impl ScriptedConnector {
    pub fn new(api: ScriptedApi) -> Self {
        Self {
            api,
            refuse: false,
            regions: Arc::default(),
        }
    }

    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::new(ScriptedApi::new())
        }
    }

    pub fn regions(&self) -> Vec<String> {
        self.regions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for ScriptedConnector {
    async fn connect(&self, region: &str) -> Result<Box<dyn SageMakerApi>> {
        self.regions.lock().unwrap().push(region.to_string());
        if self.refuse {
            return Err(anyhow!("no credentials in the provider chain"));
        }
        Ok(Box::new(self.api.clone()))
    }
}

pub fn detail(access: &str, instance_type: &str, arn: &str) -> NotebookInstanceDetail {
    NotebookInstanceDetail {
        direct_internet_access: Some(access.to_string()),
        instance_type: Some(instance_type.to_string()),
        arn: Some(arn.to_string()),
    }
}

pub fn console(reporter: crate::report::Reporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}
