//! Vulkan instance setup
//!
//! - `capabilities`: extension and layer negotiation
//! - `driver`: the loader interface and its `ash` implementation
//! - `instance`: request building, creation and the owning wrapper
//! - `debug`: debug report callback
//! - `platform`: per-platform instance requirements
//! - `window`: window system extension requirements

pub mod capabilities;
pub mod debug;
pub mod driver;
pub mod error;
pub mod instance;
pub mod platform;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

pub use capabilities::{check_support, negotiate};
pub use debug::debug_report_extension;
pub use driver::{AshDriver, ApplicationInfo, ExtensionInfo, InstanceDriver, InstanceRequest, LayerInfo};
pub use error::{InstanceError, InstanceResult};
pub use instance::{build_request, create_instance, resolve_api_version, VulkanInstance, ENGINE_NAME, VALIDATION_LAYER};
pub use platform::{portability_enumeration_extension, Platform};
pub use window::{ExtensionSource, GlfwContext};
