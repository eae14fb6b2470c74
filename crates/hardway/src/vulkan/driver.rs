//! Driver interface
//!
//! The four calls instance creation needs from the Vulkan loader, behind the
//! [`InstanceDriver`] trait. [`AshDriver`] implements it on top of a loaded
//! `ash::Entry`.

use ash::{vk, Entry};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use super::error::{InstanceError, InstanceResult};
use crate::foundation::ApiVersion;

/// An instance extension advertised by the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionInfo {
    /// Extension name
    pub name: String,
    /// Extension revision
    pub spec_version: u32,
}

/// An instance layer installed on the system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerInfo {
    /// Layer name
    pub name: String,
    /// Vulkan version the layer was written against
    pub spec_version: ApiVersion,
    /// Layer's own version
    pub implementation_version: u32,
    /// Human readable description
    pub description: String,
}

/// Application descriptor handed to the driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationInfo {
    /// Application name
    pub application_name: String,
    /// Application version
    pub application_version: ApiVersion,
    /// Engine name
    pub engine_name: String,
    /// Engine version
    pub engine_version: ApiVersion,
    /// Highest Vulkan version the application uses
    pub api_version: ApiVersion,
}

/// Everything the driver needs to create an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRequest {
    /// Application descriptor
    pub application: ApplicationInfo,
    /// Layers to enable, in order
    pub layers: Vec<String>,
    /// Extensions to enable, in order
    pub extensions: Vec<String>,
    /// Instance create flags
    pub flags: vk::InstanceCreateFlags,
}

/// Instance-level queries and creation provided by a Vulkan loader
pub trait InstanceDriver {
    /// Instance handle produced on success
    type Instance;

    /// Instance extensions the loader and its implicit layers advertise
    fn supported_extensions(&self) -> InstanceResult<Vec<ExtensionInfo>>;

    /// Instance layers available on the system
    fn supported_layers(&self) -> InstanceResult<Vec<LayerInfo>>;

    /// Highest instance-level API version the loader supports
    fn max_api_version(&self) -> InstanceResult<ApiVersion>;

    /// Create an instance
    fn create_instance(&self, request: &InstanceRequest) -> InstanceResult<Self::Instance>;
}

/// Driver backed by the system Vulkan loader
pub struct AshDriver {
    entry: Entry,
}

impl AshDriver {
    /// Load the system Vulkan library
    pub fn load() -> InstanceResult<Self> {
        let entry = unsafe { Entry::load() }.map_err(|e| InstanceError::Loading(e.to_string()))?;
        Ok(Self { entry })
    }

    /// Wrap an entry that is already loaded
    pub const fn from_entry(entry: Entry) -> Self {
        Self { entry }
    }

    /// The underlying entry point table
    pub const fn entry(&self) -> &Entry {
        &self.entry
    }
}

impl InstanceDriver for AshDriver {
    type Instance = ash::Instance;

    fn supported_extensions(&self) -> InstanceResult<Vec<ExtensionInfo>> {
        let properties = self
            .entry
            .enumerate_instance_extension_properties(None)
            .map_err(InstanceError::from_driver)?;

        Ok(properties
            .iter()
            .map(|property| ExtensionInfo {
                name: vk_to_string(&property.extension_name),
                spec_version: property.spec_version,
            })
            .collect())
    }

    fn supported_layers(&self) -> InstanceResult<Vec<LayerInfo>> {
        let properties = self
            .entry
            .enumerate_instance_layer_properties()
            .map_err(InstanceError::from_driver)?;

        Ok(properties
            .iter()
            .map(|property| LayerInfo {
                name: vk_to_string(&property.layer_name),
                spec_version: ApiVersion::from_raw(property.spec_version),
                implementation_version: property.implementation_version,
                description: vk_to_string(&property.description),
            })
            .collect())
    }

    fn max_api_version(&self) -> InstanceResult<ApiVersion> {
        // Vulkan 1.0 loaders lack vkEnumerateInstanceVersion
        let version = self
            .entry
            .try_enumerate_instance_version()
            .map_err(InstanceError::from_driver)?
            .unwrap_or(vk::API_VERSION_1_0);
        Ok(ApiVersion::from_raw(version))
    }

    fn create_instance(&self, request: &InstanceRequest) -> InstanceResult<Self::Instance> {
        let app = &request.application;
        let application_name = to_cstring(&app.application_name)?;
        let engine_name = to_cstring(&app.engine_name)?;

        let app_info = vk::ApplicationInfo::builder()
            .application_name(&application_name)
            .application_version(app.application_version.raw())
            .engine_name(&engine_name)
            .engine_version(app.engine_version.raw())
            .api_version(app.api_version.raw());

        let layer_names = to_cstrings(&request.layers)?;
        let layer_ptrs: Vec<*const c_char> = layer_names.iter().map(|name| name.as_ptr()).collect();

        let extension_names = to_cstrings(&request.extensions)?;
        let extension_ptrs: Vec<*const c_char> =
            extension_names.iter().map(|name| name.as_ptr()).collect();

        let create_info = vk::InstanceCreateInfo::builder()
            .flags(request.flags)
            .application_info(&app_info)
            .enabled_layer_names(&layer_ptrs)
            .enabled_extension_names(&extension_ptrs);

        unsafe { self.entry.create_instance(&create_info, None) }.map_err(InstanceError::from_driver)
    }
}

/// Convert a fixed-size, NUL-terminated Vulkan name array into a `String`
pub fn vk_to_string(raw: &[c_char]) -> String {
    let bytes: Vec<u8> = raw
        .iter()
        .take_while(|&&c| c != 0)
        .map(|&c| c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

/// View an extension name constant from `ash` as `&str`
pub(crate) fn static_name(name: &'static CStr) -> &'static str {
    // Khronos extension names are ASCII
    name.to_str().unwrap_or_default()
}

fn to_cstring(name: &str) -> InstanceResult<CString> {
    CString::new(name).map_err(|_| InstanceError::InvalidName(name.to_string()))
}

fn to_cstrings(names: &[String]) -> InstanceResult<Vec<CString>> {
    names.iter().map(|name| to_cstring(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_array(name: &str) -> [c_char; vk::MAX_EXTENSION_NAME_SIZE] {
        let mut raw = [0 as c_char; vk::MAX_EXTENSION_NAME_SIZE];
        for (slot, byte) in raw.iter_mut().zip(name.bytes()) {
            *slot = byte as c_char;
        }
        raw
    }

    #[test]
    fn test_vk_to_string_stops_at_nul() {
        let raw = name_array("VK_KHR_surface");
        assert_eq!(vk_to_string(&raw), "VK_KHR_surface");
    }

    #[test]
    fn test_vk_to_string_empty() {
        let raw = [0 as c_char; 8];
        assert_eq!(vk_to_string(&raw), "");
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        let names = vec!["VK_KHR_surface".to_string(), "VK_bad\0name".to_string()];
        assert_eq!(
            to_cstrings(&names).unwrap_err(),
            InstanceError::InvalidName("VK_bad\0name".to_string())
        );
    }
}
