//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `prodpulse_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("prodpulse_core ping={}", prodpulse_core::ping());
    println!("prodpulse_core version={}", prodpulse_core::core_version());
}
