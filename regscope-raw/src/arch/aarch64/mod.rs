//! AArch64 system register definitions
//!
//! Layouts follow the Arm Architecture Reference Manual for A-profile.
//!
//! ## Registers
//!
//! - **CLIDR_EL1** - Cache level ID
//! - **CCSIDR_EL1** - Current cache size ID
//! - **ID_AA64MMFR0_EL1** - Memory model feature 0
//! - **ID_AA64PFR0_EL1** - Processor feature 0
//! - **MPIDR_EL1** - Multiprocessor affinity
//!
//! ## References
//!
//! - Arm® Architecture Reference Manual for A-profile architecture (DDI 0487)
//! - Arm® Cortex®-A53 MPCore Processor Technical Reference Manual

pub mod ccsidr;
pub mod clidr;
pub mod id_aa64mmfr0;
pub mod id_aa64pfr0;
pub mod mpidr;

pub use ccsidr::CcsidrEl1;
pub use clidr::ClidrEl1;
pub use id_aa64mmfr0::IdAa64Mmfr0El1;
pub use id_aa64pfr0::IdAa64Pfr0El1;
pub use mpidr::MpidrEl1;

use crate::layout::RegisterLayout;
use crate::register::Register;

/// Every register layout defined for AArch64
pub static LAYOUTS: [&RegisterLayout; 5] = [
    &clidr::LAYOUT,
    &ccsidr::LAYOUT,
    &id_aa64mmfr0::LAYOUT,
    &id_aa64pfr0::LAYOUT,
    &mpidr::LAYOUT,
];

/// Find a layout by architectural name, ignoring ASCII case
pub fn lookup(name: &str) -> Option<&'static RegisterLayout> {
    LAYOUTS
        .iter()
        .copied()
        .find(|layout| layout.name().eq_ignore_ascii_case(name))
}

/// Decode `raw` as the register called `name`
pub fn decode(name: &str, raw: u64) -> Option<Register> {
    let mut register = Register::from_layout(lookup(name)?);
    register.decode(raw);
    Some(register)
}
