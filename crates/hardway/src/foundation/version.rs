//! Packed Vulkan API version numbers
//!
//! Vulkan packs a version into a single `u32`: variant in bits 29..32, major in
//! 22..29, minor in 12..22 and patch in 0..12. [`ApiVersion`] wraps that value so
//! it can be compared, printed and read from configuration files.
//!
//! Versions of different variants are unordered. A non-zero variant is written
//! as a `V:` prefix, so `"1:1.0.0"` is variant 1, version 1.0.0.

use ash::vk;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Mask covering the patch component of a packed version
const PATCH_MASK: u32 = 0xFFF;

/// A packed Vulkan API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiVersion(u32);

impl ApiVersion {
    /// Vulkan 1.0.0
    pub const V1_0: Self = Self(vk::API_VERSION_1_0);
    /// Vulkan 1.1.0
    pub const V1_1: Self = Self(vk::API_VERSION_1_1);
    /// Vulkan 1.2.0
    pub const V1_2: Self = Self(vk::API_VERSION_1_2);
    /// Vulkan 1.3.0
    pub const V1_3: Self = Self(vk::API_VERSION_1_3);

    /// Pack a version from its components (variant 0)
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self(vk::make_api_version(0, major, minor, patch))
    }

    /// Pack a version including its variant
    pub const fn with_variant(variant: u32, major: u32, minor: u32, patch: u32) -> Self {
        Self(vk::make_api_version(variant, major, minor, patch))
    }

    /// Wrap an already packed value, as returned by the driver
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The packed value handed to Vulkan
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Variant component (0 for Vulkan proper)
    pub const fn variant(self) -> u32 {
        vk::api_version_variant(self.0)
    }

    /// Major component
    pub const fn major(self) -> u32 {
        vk::api_version_major(self.0)
    }

    /// Minor component
    pub const fn minor(self) -> u32 {
        vk::api_version_minor(self.0)
    }

    /// Patch component
    pub const fn patch(self) -> u32 {
        vk::api_version_patch(self.0)
    }

    /// The same version with the patch component cleared
    pub const fn without_patch(self) -> Self {
        Self(self.0 & !PATCH_MASK)
    }
}

impl PartialOrd for ApiVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.variant() == other.variant()).then(|| self.0.cmp(&other.0))
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.variant() != 0 {
            write!(f, "{}:", self.variant())?;
        }
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

/// Error parsing a version string such as `"1.1.0"`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid API version '{0}', expected [VARIANT:]MAJOR.MINOR[.PATCH]")]
pub struct ParseVersionError(String);

impl FromStr for ApiVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseVersionError(s.to_string());
        let trimmed = s.trim();

        let (variant, numbers_part) = match trimmed.split_once(':') {
            Some((variant, rest)) => (variant.parse::<u32>().map_err(|_| invalid())?, rest),
            None => (0, trimmed),
        };
        // Variant occupies the top 3 bits
        if variant > 0x7 {
            return Err(invalid());
        }

        let parts: Vec<&str> = numbers_part.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }

        let [major, minor, patch] = numbers;
        // Field widths: major 7 bits, minor 10 bits, patch 12 bits
        if major > 0x7F || minor > 0x3FF || patch > PATCH_MASK {
            return Err(invalid());
        }

        Ok(Self::with_variant(variant, major, minor, patch))
    }
}

impl TryFrom<String> for ApiVersion {
    type Error = ParseVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ApiVersion> for String {
    fn from(version: ApiVersion) -> Self {
        version.to_string()
    }
}
