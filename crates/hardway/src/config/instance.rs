//! # Instance Configuration
//!
//! Everything that shapes instance creation arrives through [`InstanceConfig`]:
//! application name, debug mode, the target platform, how the API version is
//! chosen and what happens when the driver lacks a requested capability.

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::ApiVersion;
use crate::vulkan::Platform;

/// How the API version requested from the driver is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VersionPolicyRepr", into = "VersionPolicyRepr")]
pub enum VersionPolicy {
    /// Always request this version, regardless of what the loader reports.
    ///
    /// Favors running on older drivers over using newer core features.
    Fixed {
        /// Version requested for application, engine and API alike
        version: ApiVersion,
    },
    /// Request the loader's highest version with the patch cleared
    Queried {
        /// Lowest acceptable version; anything older is an error
        floor: ApiVersion,
    },
}

impl Default for VersionPolicy {
    fn default() -> Self {
        Self::Fixed { version: ApiVersion::V1_1 }
    }
}

/// Version selection mode as written in config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum VersionMode {
    Fixed,
    Queried,
}

/// Flat on-disk form of [`VersionPolicy`]: `version` is the fixed version or the floor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct VersionPolicyRepr {
    mode: VersionMode,
    version: ApiVersion,
}

impl From<VersionPolicyRepr> for VersionPolicy {
    fn from(repr: VersionPolicyRepr) -> Self {
        match repr.mode {
            VersionMode::Fixed => Self::Fixed { version: repr.version },
            VersionMode::Queried => Self::Queried { floor: repr.version },
        }
    }
}

impl From<VersionPolicy> for VersionPolicyRepr {
    fn from(policy: VersionPolicy) -> Self {
        match policy {
            VersionPolicy::Fixed { version } => Self { mode: VersionMode::Fixed, version },
            VersionPolicy::Queried { floor } => Self { mode: VersionMode::Queried, version: floor },
        }
    }
}

/// What to do when a requested extension or layer is not supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NegotiationPolicy {
    /// Abort before calling into the driver
    #[default]
    Strict,
    /// Log a warning and let the driver decide
    Lenient,
}

/// Instance creation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceConfig {
    /// Application name reported to the driver
    pub application_name: String,
    /// Request the validation layer and the debug report extension
    pub debug_mode: bool,
    /// Platform the instance is created on
    pub platform: Platform,
    /// Negotiation failure handling
    pub negotiation: NegotiationPolicy,
    /// API version selection
    pub version_policy: VersionPolicy,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            application_name: "Hello Vulkan".to_string(),
            debug_mode: cfg!(debug_assertions),
            platform: Platform::current(),
            negotiation: NegotiationPolicy::default(),
            version_policy: VersionPolicy::default(),
        }
    }
}

impl InstanceConfig {
    /// Create a configuration with defaults for the given application name
    pub fn new(application_name: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            ..Self::default()
        }
    }

    /// Set debug mode
    #[must_use]
    pub fn with_debug_mode(mut self, debug_mode: bool) -> Self {
        self.debug_mode = debug_mode;
        self
    }

    /// Override the detected platform
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Set the negotiation policy
    #[must_use]
    pub fn with_negotiation(mut self, negotiation: NegotiationPolicy) -> Self {
        self.negotiation = negotiation;
        self
    }

    /// Set the version policy
    #[must_use]
    pub fn with_version_policy(mut self, version_policy: VersionPolicy) -> Self {
        self.version_policy = version_policy;
        self
    }
}

impl Config for InstanceConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hardway_{}_{}", std::process::id(), name))
    }

    fn sample_config() -> InstanceConfig {
        InstanceConfig::new("Config Test")
            .with_debug_mode(true)
            .with_platform(Platform::MacOs)
            .with_negotiation(NegotiationPolicy::Lenient)
            .with_version_policy(VersionPolicy::Queried { floor: ApiVersion::V1_2 })
    }

    #[test]
    fn test_defaults() {
        let config = InstanceConfig::default();
        assert_eq!(config.application_name, "Hello Vulkan");
        assert_eq!(config.debug_mode, cfg!(debug_assertions));
        assert_eq!(config.platform, Platform::current());
        assert_eq!(config.negotiation, NegotiationPolicy::Strict);
        assert_eq!(config.version_policy, VersionPolicy::Fixed { version: ApiVersion::V1_1 });
    }

    #[test]
    fn test_toml_file_round_trip() {
        let path = temp_path("config.toml");
        let config = sample_config();
        config.save_to_file(&path).unwrap();
        let loaded = InstanceConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_file_round_trip() {
        let path = temp_path("config.ron");
        let config = sample_config();
        config.save_to_file(&path).unwrap();
        let loaded = InstanceConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: InstanceConfig = toml::from_str(
            r#"
            application_name = "Partial"
            debug_mode = false

            [version_policy]
            mode = "Fixed"
            version = "1.2.0"
            "#,
        )
        .unwrap();
        assert_eq!(config.application_name, "Partial");
        assert!(!config.debug_mode);
        assert_eq!(config.negotiation, NegotiationPolicy::Strict);
        assert_eq!(config.version_policy, VersionPolicy::Fixed { version: ApiVersion::V1_2 });
    }

    #[test]
    fn test_invalid_version_is_parse_error() {
        let path = temp_path("bad_version.toml");
        std::fs::write(&path, "[version_policy]\nmode = \"Fixed\"\nversion = \"one\"\n").unwrap();
        let result = InstanceConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_shipped_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../config/instance.toml");
        let config = InstanceConfig::load_from_file(path).unwrap();
        assert_eq!(config.application_name, "Hello Vulkan");
        assert!(config.debug_mode);
        assert_eq!(config.platform, Platform::current());
        assert_eq!(config.negotiation, NegotiationPolicy::Strict);
        assert_eq!(config.version_policy, VersionPolicy::Fixed { version: ApiVersion::V1_1 });
    }

    #[test]
    fn test_variant_version_round_trip() {
        let path = temp_path("variant.toml");
        let config = InstanceConfig::new("Variant").with_version_policy(VersionPolicy::Queried {
            floor: ApiVersion::with_variant(1, 1, 0, 0),
        });
        config.save_to_file(&path).unwrap();
        let loaded = InstanceConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_format() {
        let result = InstanceConfig::load_from_file("instance.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = InstanceConfig::load_or_default(temp_path("missing.toml")).unwrap();
        assert_eq!(config, InstanceConfig::default());
    }
}
