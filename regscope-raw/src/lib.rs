//! # regscope-raw
//!
//! Bitfield models for architecture-defined system registers.
//!
//! This crate splits raw 32/64-bit register values into named, bounded
//! fields. Each field knows its width and offset, and may carry a table
//! mapping values to their architectural meaning and a conversion to a
//! derived quantity (e.g. cache line size in bytes).
//!
//! ## Features
//!
//! Select the register definitions via feature flags:
//! - `aarch64` (default) - Armv8-A cache and feature identification registers
//!
//! ## Usage
//!
//! ```
//! use regscope_raw::arch::aarch64::{CcsidrEl1, ClidrEl1};
//! use regscope_raw::raw::from_captured_bytes;
//! use regscope_raw::SystemRegister;
//!
//! // Bytes as dumped by the emulator, least significant first
//! let raw = from_captured_bytes(&[0x23, 0x00, 0x20, 0x0a])?;
//! let clidr = ClidrEl1::from_raw(raw);
//! assert_eq!(clidr.get_field("Ctype2")?, 4);
//! assert_eq!(clidr.get_field_value_name("Ctype2")?, Some("Unified cache"));
//!
//! let ccsidr = CcsidrEl1::from_raw((127 << 13) | (3 << 3) | 2);
//! assert_eq!(ccsidr.cache_size(), 32 * 1024);
//! # Ok::<(), regscope_raw::RegisterError>(())
//! ```

pub mod arch;
pub mod enumeration;
pub mod error;
pub mod field;
pub mod layout;
pub mod raw;
pub mod register;

// Re-export for convenience
pub use enumeration::Enumeration;
pub use error::{LayoutError, RegisterError, Result};
pub use field::{Conversion, RegisterField};
pub use layout::{FieldEntry, RegisterLayout};
pub use register::{FieldReport, Register, SystemRegister};
