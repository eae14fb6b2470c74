//! # Hardway
//!
//! Vulkan instance creation done by hand: capability negotiation against the
//! loader, explicit configuration, and categorized errors.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hardway::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let glfw = GlfwContext::init()?;
//!     let config = InstanceConfig::new("Hello Vulkan");
//!     let instance = VulkanInstance::new(&glfw, &config)?;
//!     log::info!("Created instance {:?}", instance.handle());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod foundation;
pub mod vulkan;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, InstanceConfig, NegotiationPolicy, VersionPolicy},
        foundation::ApiVersion,
        vulkan::{
            check_support, create_instance, ExtensionSource, GlfwContext, InstanceDriver,
            InstanceError, InstanceResult, Platform, VulkanInstance,
        },
    };
}
