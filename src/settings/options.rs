//! Compile-time firmware identity and registry options
//!
//! `build.rs` exports `FIRMWARE_BUILD`, `FIRMWARE_VERSION` and
//! `CONFIG_PERSISTENCE` from the build environment.

use crate::platform::{PlatformError, Result};
use motion_config_core::RegistryOptions;

/// Firmware build number as configured at compile time
pub const FIRMWARE_BUILD: &str = env!("FIRMWARE_BUILD");

/// Firmware version as configured at compile time
pub const FIRMWARE_VERSION: &str = env!("FIRMWARE_VERSION");

/// Persistence switch as configured at compile time
pub const CONFIG_PERSISTENCE: &str = env!("CONFIG_PERSISTENCE");

/// Registry options for this firmware build
pub fn build_options() -> Result<RegistryOptions> {
    Ok(RegistryOptions {
        build_id: parse_number(FIRMWARE_BUILD)?,
        persistence: parse_switch(CONFIG_PERSISTENCE)?,
        ..RegistryOptions::default()
    })
}

/// Firmware version reported by `fv`
pub fn firmware_version() -> Result<f32> {
    parse_number(FIRMWARE_VERSION)
}

fn parse_number(value: &str) -> Result<f32> {
    value.trim().parse().map_err(|_| PlatformError::InvalidConfig)
}

fn parse_switch(value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(PlatformError::InvalidConfig),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_options_parse() {
        let options = build_options().unwrap();
        assert!(options.build_id > 0.0);
        assert!(firmware_version().unwrap() > 0.0);
    }

    #[test]
    fn test_parse_switch() {
        assert_eq!(parse_switch(" on"), Ok(true));
        assert_eq!(parse_switch("0"), Ok(false));
        assert_eq!(parse_switch("maybe"), Err(PlatformError::InvalidConfig));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("100.00"), Ok(100.0));
        assert_eq!(parse_number("build"), Err(PlatformError::InvalidConfig));
    }
}
