//! Scripted in-memory driver for unit tests

use ash::vk;
use std::cell::{Cell, RefCell};

use super::driver::{ExtensionInfo, InstanceDriver, InstanceRequest, LayerInfo};
use super::error::{InstanceError, InstanceResult};
use crate::foundation::ApiVersion;

/// Handle returned by [`FakeDriver::create_instance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeInstance(pub u64);

/// Driver answering from fixed lists and recording every creation request
pub struct FakeDriver {
    pub extensions: Vec<String>,
    pub layers: Vec<String>,
    pub version: ApiVersion,
    pub create_failure: Option<vk::Result>,
    pub query_failure: Option<vk::Result>,
    pub requests: RefCell<Vec<InstanceRequest>>,
    pub extension_queries: Cell<usize>,
    pub layer_queries: Cell<usize>,
}

impl FakeDriver {
    pub fn new(extensions: &[&str], layers: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|s| (*s).to_string()).collect(),
            layers: layers.iter().map(|s| (*s).to_string()).collect(),
            version: ApiVersion::new(1, 3, 250),
            create_failure: None,
            query_failure: None,
            requests: RefCell::new(Vec::new()),
            extension_queries: Cell::new(0),
            layer_queries: Cell::new(0),
        }
    }

    pub fn with_version(mut self, version: ApiVersion) -> Self {
        self.version = version;
        self
    }

    pub fn failing_creation(mut self, result: vk::Result) -> Self {
        self.create_failure = Some(result);
        self
    }

    pub fn failing_queries(mut self, result: vk::Result) -> Self {
        self.query_failure = Some(result);
        self
    }

    pub fn last_request(&self) -> Option<InstanceRequest> {
        self.requests.borrow().last().cloned()
    }

    pub fn creation_attempts(&self) -> usize {
        self.requests.borrow().len()
    }

    fn check_query(&self) -> InstanceResult<()> {
        self.query_failure.map_or(Ok(()), |result| Err(InstanceError::from_driver(result)))
    }
}

impl InstanceDriver for FakeDriver {
    type Instance = FakeInstance;

    fn supported_extensions(&self) -> InstanceResult<Vec<ExtensionInfo>> {
        self.extension_queries.set(self.extension_queries.get() + 1);
        self.check_query()?;
        Ok(self
            .extensions
            .iter()
            .map(|name| ExtensionInfo { name: name.clone(), spec_version: 1 })
            .collect())
    }

    fn supported_layers(&self) -> InstanceResult<Vec<LayerInfo>> {
        self.layer_queries.set(self.layer_queries.get() + 1);
        self.check_query()?;
        Ok(self
            .layers
            .iter()
            .map(|name| LayerInfo {
                name: name.clone(),
                spec_version: ApiVersion::V1_3,
                implementation_version: 1,
                description: format!("{name} (fake)"),
            })
            .collect())
    }

    fn max_api_version(&self) -> InstanceResult<ApiVersion> {
        Ok(self.version)
    }

    fn create_instance(&self, request: &InstanceRequest) -> InstanceResult<Self::Instance> {
        self.requests.borrow_mut().push(request.clone());
        match self.create_failure {
            Some(result) => Err(InstanceError::from_driver(result)),
            None => Ok(FakeInstance(self.requests.borrow().len() as u64)),
        }
    }
}
