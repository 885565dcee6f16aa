use std::env;

fn main() {
    // Read firmware identity and persistence switch from environment variables
    // These seed the registry options compiled into the settings table

    // Firmware build number (stored in NVM record 0)
    if let Ok(build) = env::var("FIRMWARE_BUILD") {
        println!("cargo:rustc-env=FIRMWARE_BUILD={}", build);
        println!("cargo:warning=Using FIRMWARE_BUILD from environment: {}", build);
    } else {
        println!("cargo:rustc-env=FIRMWARE_BUILD=100.00");
    }

    // Firmware version
    if let Ok(version) = env::var("FIRMWARE_VERSION") {
        println!("cargo:rustc-env=FIRMWARE_VERSION={}", version);
        println!(
            "cargo:warning=Using FIRMWARE_VERSION from environment: {}",
            version
        );
    } else {
        println!("cargo:rustc-env=FIRMWARE_VERSION=0.97");
    }

    // NVM persistence (default: true)
    if let Ok(persistence) = env::var("CONFIG_PERSISTENCE") {
        println!("cargo:rustc-env=CONFIG_PERSISTENCE={}", persistence);
        println!(
            "cargo:warning=Using CONFIG_PERSISTENCE from environment: {}",
            persistence
        );
    } else {
        println!("cargo:rustc-env=CONFIG_PERSISTENCE=true");
    }

    // Rerun if environment variables change
    println!("cargo:rerun-if-env-changed=FIRMWARE_BUILD");
    println!("cargo:rerun-if-env-changed=FIRMWARE_VERSION");
    println!("cargo:rerun-if-env-changed=CONFIG_PERSISTENCE");
}
