//! Instance creation errors

use ash::vk;
use thiserror::Error;

use crate::foundation::ApiVersion;

/// Errors raised while negotiating capabilities or creating an instance
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstanceError {
    /// A requested instance extension is not advertised by the driver
    #[error("Extension \"{name}\" is not supported")]
    UnsupportedExtension {
        /// Extension name as requested
        name: String,
    },

    /// A requested instance layer is not installed
    #[error("Layer \"{name}\" is not supported")]
    UnsupportedLayer {
        /// Layer name as requested
        name: String,
    },

    /// The loader's highest API version is below the configured floor
    #[error("Vulkan {available} is available but at least {required} is required")]
    ApiVersionTooLow {
        /// Highest version the loader reported
        available: ApiVersion,
        /// Configured floor
        required: ApiVersion,
    },

    /// The loader implements a different API variant than the configured floor
    #[error("Vulkan {available} is a different API variant than the required {required}")]
    ApiVariantMismatch {
        /// Highest version the loader reported
        available: ApiVersion,
        /// Configured floor
        required: ApiVersion,
    },

    /// The driver rejected the requested configuration
    #[error("Unsupported instance configuration: {0:?}")]
    UnsupportedConfiguration(vk::Result),

    /// The driver ran out of host or device memory
    #[error("Out of memory: {0:?}")]
    OutOfMemory(vk::Result),

    /// Any other driver failure
    #[error("Vulkan API error: {0:?}")]
    Driver(vk::Result),

    /// The Vulkan library could not be loaded
    #[error("Failed to load Vulkan: {0}")]
    Loading(String),

    /// The window system failed to report its requirements
    #[error("Window system error: {0}")]
    Window(String),

    /// A name could not be passed to Vulkan as a C string
    #[error("Invalid name {0:?}: contains an interior NUL byte")]
    InvalidName(String),
}

impl InstanceError {
    /// Categorize a driver result code
    pub fn from_driver(result: vk::Result) -> Self {
        match result {
            vk::Result::ERROR_INCOMPATIBLE_DRIVER
            | vk::Result::ERROR_EXTENSION_NOT_PRESENT
            | vk::Result::ERROR_LAYER_NOT_PRESENT => Self::UnsupportedConfiguration(result),
            vk::Result::ERROR_OUT_OF_HOST_MEMORY | vk::Result::ERROR_OUT_OF_DEVICE_MEMORY => {
                Self::OutOfMemory(result)
            }
            _ => Self::Driver(result),
        }
    }

    /// Whether a different configuration could succeed on the same system
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedExtension { .. }
                | Self::UnsupportedLayer { .. }
                | Self::ApiVersionTooLow { .. }
                | Self::ApiVariantMismatch { .. }
                | Self::UnsupportedConfiguration(_)
                | Self::InvalidName(_)
        )
    }
}

impl From<vk::Result> for InstanceError {
    fn from(result: vk::Result) -> Self {
        Self::from_driver(result)
    }
}

/// Result type for instance operations
pub type InstanceResult<T> = Result<T, InstanceError>;
