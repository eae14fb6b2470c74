//! Debug report callback
//!
//! Routes `VK_EXT_debug_report` messages from the validation layer into `log`.

// ash marks the debug report loader deprecated in favor of debug utils, but
// debug report is the extension this crate requests in debug mode.
#![allow(deprecated)]

use ash::extensions::ext::DebugReport;
use ash::{vk, Entry, Instance};
use std::ffi::{c_void, CStr};
use std::os::raw::c_char;

use super::driver::static_name;
use super::error::{InstanceError, InstanceResult};

/// Name of the debug report instance extension
pub fn debug_report_extension() -> &'static str {
    static_name(DebugReport::name())
}

/// Registered debug report callback.
///
/// Only [`VulkanInstance`](super::VulkanInstance) creates one, and it
/// unregisters the callback before destroying the instance.
///
/// ```compile_fail
/// fn register(entry: &ash::Entry, instance: &ash::Instance) {
///     let _ = hardway::vulkan::debug::DebugReportMessenger::new(entry, instance);
/// }
/// ```
pub struct DebugReportMessenger {
    loader: DebugReport,
    callback: vk::DebugReportCallbackEXT,
}

impl DebugReportMessenger {
    /// Register the callback on an instance created with the debug report extension
    pub(crate) fn new(entry: &Entry, instance: &Instance) -> InstanceResult<Self> {
        let loader = DebugReport::new(entry, instance);
        let create_info = vk::DebugReportCallbackCreateInfoEXT::builder()
            .flags(
                vk::DebugReportFlagsEXT::ERROR
                    | vk::DebugReportFlagsEXT::WARNING
                    | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING,
            )
            .pfn_callback(Some(debug_report_callback));

        let callback = unsafe { loader.create_debug_report_callback(&create_info, None) }
            .map_err(InstanceError::from_driver)?;

        Ok(Self { loader, callback })
    }

    /// Unregister the callback.
    ///
    /// # Safety
    /// Must run once, before the owning instance is destroyed.
    pub(crate) unsafe fn destroy(&mut self) {
        self.loader.destroy_debug_report_callback(self.callback, None);
        self.callback = vk::DebugReportCallbackEXT::null();
    }
}

/// Log level for a debug report message
pub fn report_level(flags: vk::DebugReportFlagsEXT) -> log::Level {
    if flags.contains(vk::DebugReportFlagsEXT::ERROR) {
        log::Level::Error
    } else if flags.intersects(vk::DebugReportFlagsEXT::WARNING | vk::DebugReportFlagsEXT::PERFORMANCE_WARNING) {
        log::Level::Warn
    } else if flags.contains(vk::DebugReportFlagsEXT::INFORMATION) {
        log::Level::Info
    } else {
        log::Level::Debug
    }
}

unsafe fn c_str_or<'a>(ptr: *const c_char, fallback: &'a str) -> std::borrow::Cow<'a, str> {
    if ptr.is_null() {
        std::borrow::Cow::Borrowed(fallback)
    } else {
        CStr::from_ptr(ptr).to_string_lossy()
    }
}

unsafe extern "system" fn debug_report_callback(
    flags: vk::DebugReportFlagsEXT,
    object_type: vk::DebugReportObjectTypeEXT,
    _object: u64,
    _location: usize,
    _message_code: i32,
    p_layer_prefix: *const c_char,
    p_message: *const c_char,
    _user_data: *mut c_void,
) -> vk::Bool32 {
    let prefix = c_str_or(p_layer_prefix, "Vulkan");
    let message = c_str_or(p_message, "<no message>");

    log::log!(report_level(flags), "[{}] {:?} - {}", prefix, object_type, message);

    vk::FALSE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_name_matches_ash() {
        assert_eq!(debug_report_extension(), "VK_EXT_debug_report");
        assert_eq!(debug_report_extension().as_bytes(), DebugReport::name().to_bytes());
    }

    #[test]
    fn test_report_levels() {
        assert_eq!(report_level(vk::DebugReportFlagsEXT::ERROR), log::Level::Error);
        assert_eq!(
            report_level(vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING),
            log::Level::Error
        );
        assert_eq!(report_level(vk::DebugReportFlagsEXT::WARNING), log::Level::Warn);
        assert_eq!(report_level(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING), log::Level::Warn);
        assert_eq!(report_level(vk::DebugReportFlagsEXT::INFORMATION), log::Level::Info);
        assert_eq!(report_level(vk::DebugReportFlagsEXT::DEBUG), log::Level::Debug);
    }

    #[test]
    fn test_callback_tolerates_null_strings() {
        let result = unsafe {
            debug_report_callback(
                vk::DebugReportFlagsEXT::WARNING,
                vk::DebugReportObjectTypeEXT::INSTANCE,
                0,
                0,
                0,
                std::ptr::null(),
                std::ptr::null(),
                std::ptr::null_mut(),
            )
        };
        assert_eq!(result, vk::FALSE);
    }
}
