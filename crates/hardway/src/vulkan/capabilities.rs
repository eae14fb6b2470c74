//! Capability negotiation
//!
//! Compares the extensions and layers an application wants against what the
//! driver advertises. Checking stops at the first name that is missing, and
//! extensions are checked before layers are even queried.

use super::driver::InstanceDriver;
use super::error::{InstanceError, InstanceResult};
use crate::foundation::logging::log_list;

/// Check every requested extension and layer against the driver.
///
/// Returns the first unsupported name as an error. Driver query failures are
/// passed through unchanged.
pub fn negotiate<D, E, L>(driver: &D, extensions: &[E], layers: &[L]) -> InstanceResult<()>
where
    D: InstanceDriver + ?Sized,
    E: AsRef<str>,
    L: AsRef<str>,
{
    let supported_extensions: Vec<String> = driver
        .supported_extensions()?
        .into_iter()
        .map(|extension| extension.name)
        .collect();

    log::info!("Device can support the following extensions:");
    log_list(&supported_extensions);

    for extension in extensions {
        let name = extension.as_ref();
        if supported_extensions.iter().any(|supported| supported == name) {
            log::info!("Extension \"{}\" is supported!", name);
        } else {
            log::info!("Extension \"{}\" is not supported!", name);
            return Err(InstanceError::UnsupportedExtension { name: name.to_string() });
        }
    }

    let supported_layers: Vec<String> = driver
        .supported_layers()?
        .into_iter()
        .map(|layer| layer.name)
        .collect();

    log::info!("Device can support the following layers:");
    log_list(&supported_layers);

    for layer in layers {
        let name = layer.as_ref();
        if supported_layers.iter().any(|supported| supported == name) {
            log::info!("Layer \"{}\" is supported!", name);
        } else {
            log::info!("Layer \"{}\" is not supported!", name);
            return Err(InstanceError::UnsupportedLayer { name: name.to_string() });
        }
    }

    Ok(())
}

/// Whether the driver supports every requested extension and layer
pub fn check_support<D, E, L>(driver: &D, extensions: &[E], layers: &[L]) -> bool
where
    D: InstanceDriver + ?Sized,
    E: AsRef<str>,
    L: AsRef<str>,
{
    match negotiate(driver, extensions, layers) {
        Ok(()) => true,
        Err(InstanceError::UnsupportedExtension { .. } | InstanceError::UnsupportedLayer { .. }) => false,
        Err(error) => {
            log::error!("Failed to query instance support: {}", error);
            false
        }
    }
}
