//! Window system requirements
//!
//! The window system decides which surface extensions an instance needs before
//! any window exists. [`GlfwContext`] asks GLFW; fixed lists work for headless
//! use and tests.

use super::error::{InstanceError, InstanceResult};

/// Something that knows which instance extensions the window system requires
pub trait ExtensionSource {
    /// Instance extensions required to present to this window system
    fn required_instance_extensions(&self) -> InstanceResult<Vec<String>>;
}

impl<S: AsRef<str>> ExtensionSource for [S] {
    fn required_instance_extensions(&self) -> InstanceResult<Vec<String>> {
        Ok(self.iter().map(|name| name.as_ref().to_string()).collect())
    }
}

impl<S: AsRef<str>, const N: usize> ExtensionSource for [S; N] {
    fn required_instance_extensions(&self) -> InstanceResult<Vec<String>> {
        self.as_slice().required_instance_extensions()
    }
}

impl<S: AsRef<str>> ExtensionSource for Vec<S> {
    fn required_instance_extensions(&self) -> InstanceResult<Vec<String>> {
        self.as_slice().required_instance_extensions()
    }
}

/// Initialized GLFW library, used only for its Vulkan queries
pub struct GlfwContext {
    glfw: glfw::Glfw,
}

impl GlfwContext {
    /// Initialize GLFW
    pub fn init() -> InstanceResult<Self> {
        let glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| InstanceError::Window(format!("GLFW initialization failed: {e:?}")))?;
        Ok(Self { glfw })
    }

    /// Whether GLFW found a Vulkan loader and ICD
    pub fn vulkan_supported(&self) -> bool {
        self.glfw.vulkan_supported()
    }
}

impl ExtensionSource for GlfwContext {
    fn required_instance_extensions(&self) -> InstanceResult<Vec<String>> {
        self.glfw
            .get_required_instance_extensions()
            .ok_or_else(|| InstanceError::Window("GLFW reports no Vulkan support".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lists() {
        let array = ["VK_KHR_surface", "VK_KHR_xlib_surface"];
        assert_eq!(
            array.required_instance_extensions().unwrap(),
            vec!["VK_KHR_surface".to_string(), "VK_KHR_xlib_surface".to_string()]
        );

        let owned = vec!["VK_KHR_surface".to_string()];
        assert_eq!(owned.required_instance_extensions().unwrap(), owned);

        let empty: Vec<String> = Vec::new();
        assert!(empty.required_instance_extensions().unwrap().is_empty());
    }
}
