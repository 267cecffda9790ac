//! Architecture-specific register definitions
//!
//! Each architecture documents its own system register layouts. This module
//! provides those layouts organised by architecture.
//!
//! ## Supported Architectures
//!
//! - **AArch64** (`aarch64` feature) - Armv8-A identification registers

#[cfg(feature = "aarch64")]
pub mod aarch64;
