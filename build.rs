//! Build script for NutriTrack
//!
//! Embeds the compile timestamp and cargo profile. Nothing is written to the
//! package directory.

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=NUTRITRACK_BUILD_TIMESTAMP={}", timestamp);
    println!("cargo:rustc-env=NUTRITRACK_BUILD_PROFILE={}", profile);
}
