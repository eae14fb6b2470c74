//! Vulkan instance creation
//!
//! [`create_instance`] is the whole procedure: pick the API version, collect the
//! extensions and layers the window system, platform and debug mode call for,
//! negotiate them against the driver and ask the driver for an instance.
//! [`VulkanInstance`] runs it against the system loader and owns the result.

use ash::{vk, Entry, Instance};

use super::capabilities::negotiate;
use super::debug::{debug_report_extension, DebugReportMessenger};
use super::driver::{AshDriver, ApplicationInfo, InstanceDriver, InstanceRequest};
use super::error::{InstanceError, InstanceResult};
use super::window::ExtensionSource;
use crate::config::{InstanceConfig, NegotiationPolicy, VersionPolicy};
use crate::foundation::logging::log_list;
use crate::foundation::ApiVersion;

/// Engine name reported to the driver
pub const ENGINE_NAME: &str = "Doing it the hard way";

/// Khronos validation layer
pub const VALIDATION_LAYER: &str = "VK_LAYER_KHRONOS_validation";

/// Pick the API version to request given what the loader supports
pub fn resolve_api_version(policy: VersionPolicy, available: ApiVersion) -> InstanceResult<ApiVersion> {
    match policy {
        VersionPolicy::Fixed { version } => {
            if version.variant() != available.variant() {
                log::warn!(
                    "Requesting Vulkan {} but the loader implements variant {}",
                    version,
                    available.variant()
                );
            } else if version > available {
                log::warn!(
                    "Requesting Vulkan {} but the loader only reports {}",
                    version,
                    available
                );
            }
            Ok(version)
        }
        VersionPolicy::Queried { floor } => {
            if available.variant() != floor.variant() {
                return Err(InstanceError::ApiVariantMismatch { available, required: floor });
            }
            let version = available.without_patch();
            if version < floor {
                return Err(InstanceError::ApiVersionTooLow { available, required: floor });
            }
            Ok(version)
        }
    }
}

/// Build the creation request for `config` without creating anything
pub fn build_request<D, S>(driver: &D, source: &S, config: &InstanceConfig) -> InstanceResult<InstanceRequest>
where
    D: InstanceDriver + ?Sized,
    S: ExtensionSource + ?Sized,
{
    let available = driver.max_api_version()?;
    log::info!(
        "System can support vulkan Variant: {}, Major: {}, Minor: {}, Patch: {}",
        available.variant(),
        available.major(),
        available.minor(),
        available.patch()
    );

    let version = resolve_api_version(config.version_policy, available)?;
    log::info!("Requesting Vulkan {}", version);

    let application = ApplicationInfo {
        application_name: config.application_name.clone(),
        application_version: version,
        engine_name: ENGINE_NAME.to_string(),
        engine_version: version,
        api_version: version,
    };

    let mut extensions = source.required_instance_extensions()?;
    extensions.extend(config.platform.required_extensions().into_iter().map(str::to_string));
    if config.debug_mode {
        extensions.push(debug_report_extension().to_string());
    }

    log::info!("extensions to be requested:");
    log_list(&extensions);

    let mut layers = Vec::new();
    if config.debug_mode {
        layers.push(VALIDATION_LAYER.to_string());
    }

    Ok(InstanceRequest {
        application,
        layers,
        extensions,
        flags: config.platform.instance_create_flags(),
    })
}

/// Negotiate capabilities and create an instance.
///
/// With [`NegotiationPolicy::Strict`] an unsupported extension or layer is
/// returned before the driver is asked to create anything.
pub fn create_instance<D, S>(driver: &D, source: &S, config: &InstanceConfig) -> InstanceResult<D::Instance>
where
    D: InstanceDriver + ?Sized,
    S: ExtensionSource + ?Sized,
{
    log::info!("Making an instance...");

    let request = build_request(driver, source, config)?;

    if let Err(error) = negotiate(driver, &request.extensions, &request.layers) {
        match config.negotiation {
            NegotiationPolicy::Strict => {
                log::error!("Failed to create Instance! {}", error);
                return Err(error);
            }
            NegotiationPolicy::Lenient => {
                log::warn!("{}; attempting instance creation anyway", error);
            }
        }
    }

    driver.create_instance(&request).map_err(|error| {
        log::error!("Failed to create Instance! {}", error);
        error
    })
}

/// Vulkan instance wrapper with RAII cleanup
pub struct VulkanInstance {
    debug_report: Option<DebugReportMessenger>,
    instance: Instance,
    // Keeps the loader alive for as long as the instance
    driver: AshDriver,
}

impl VulkanInstance {
    /// Load the system Vulkan library and create an instance
    pub fn new<S>(source: &S, config: &InstanceConfig) -> InstanceResult<Self>
    where
        S: ExtensionSource + ?Sized,
    {
        Self::with_driver(AshDriver::load()?, source, config)
    }

    /// Create an instance through an already loaded driver
    pub fn with_driver<S>(driver: AshDriver, source: &S, config: &InstanceConfig) -> InstanceResult<Self>
    where
        S: ExtensionSource + ?Sized,
    {
        let instance = create_instance(&driver, source, config)?;

        let debug_report = if config.debug_mode {
            match DebugReportMessenger::new(driver.entry(), &instance) {
                Ok(messenger) => Some(messenger),
                Err(error) => {
                    log::warn!("Debug report callback unavailable: {}", error);
                    None
                }
            }
        } else {
            None
        };

        log::info!("Instance created for \"{}\"", config.application_name);

        Ok(Self { debug_report, instance, driver })
    }

    /// The loaded instance function table
    pub const fn instance(&self) -> &Instance {
        &self.instance
    }

    /// The raw instance handle
    pub fn handle(&self) -> vk::Instance {
        self.instance.handle()
    }

    /// The loader entry point table
    pub const fn entry(&self) -> &Entry {
        self.driver.entry()
    }

    /// Whether a debug report callback is installed
    pub const fn has_debug_report(&self) -> bool {
        self.debug_report.is_some()
    }
}

impl Drop for VulkanInstance {
    fn drop(&mut self) {
        unsafe {
            if let Some(debug_report) = self.debug_report.as_mut() {
                debug_report.destroy();
            }

            self.instance.destroy_instance(None);
        }
    }
}
