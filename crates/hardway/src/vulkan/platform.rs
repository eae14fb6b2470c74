//! Target platform and its instance requirements
//!
//! Apple platforms reach Vulkan through a portability implementation
//! (MoltenVK), which the loader only enumerates when the application opts in
//! with `VK_KHR_portability_enumeration` and the matching create flag.

use ash::vk;
use serde::{Deserialize, Serialize};

use super::driver::static_name;

/// Name of the portability enumeration instance extension
pub fn portability_enumeration_extension() -> &'static str {
    static_name(vk::KhrPortabilityEnumerationFn::name())
}

/// Operating system family the instance is created on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Microsoft Windows
    Windows,
    /// Linux and other desktop Unix
    Linux,
    /// Apple macOS
    MacOs,
    /// Apple iOS
    Ios,
    /// Anything else
    Other,
}

impl Platform {
    /// The platform this binary was compiled for
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Whether drivers on this platform are only enumerated through portability
    pub const fn requires_portability_enumeration(self) -> bool {
        matches!(self, Self::MacOs | Self::Ios)
    }

    /// Instance extensions the platform itself needs, beyond the window system's
    pub fn required_extensions(self) -> Vec<&'static str> {
        if self.requires_portability_enumeration() {
            vec![portability_enumeration_extension()]
        } else {
            Vec::new()
        }
    }

    /// Instance create flags the platform needs
    pub fn instance_create_flags(self) -> vk::InstanceCreateFlags {
        if self.requires_portability_enumeration() {
            vk::InstanceCreateFlags::ENUMERATE_PORTABILITY_KHR
        } else {
            vk::InstanceCreateFlags::empty()
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
