//! Instance creation demo
//!
//! Loads an optional instance configuration (TOML or RON) given as the first
//! argument, initializes GLFW and creates a Vulkan instance with it.

use hardway::foundation::logging;
use hardway::prelude::*;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading instance config from {}", path);
            InstanceConfig::load_from_file(&path)?
        }
        None => InstanceConfig::default(),
    };

    log::info!("Initializing GLFW...");
    let glfw = GlfwContext::init()?;
    if !glfw.vulkan_supported() {
        log::warn!("GLFW could not find a Vulkan loader");
    }

    let instance = VulkanInstance::new(&glfw, &config)?;
    log::info!(
        "Instance {:?} ready (debug report: {})",
        instance.handle(),
        instance.has_debug_report()
    );

    Ok(())
}

fn main() {
    logging::init(log::LevelFilter::Info);

    log::info!("Starting instance demo");

    if let Err(e) = run() {
        log::error!("Application error: {}", e);
        std::process::exit(1);
    }

    log::info!("Instance demo finished successfully");
}
