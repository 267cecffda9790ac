use std::fmt::Write as _;

use serde::Serialize;

use regscope_raw::arch::aarch64::{self, CcsidrEl1, ClidrEl1, IdAa64Mmfr0El1, MpidrEl1};
use regscope_raw::raw::to_captured_bytes;
use regscope_raw::{Register, RegisterError, RegisterLayout, SystemRegister};

use crate::config::{DecodeConfig, OutputFormat};
use crate::error::{RegscopeError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct FieldLine {
    pub id: &'static str,
    pub name: &'static str,
    /// Inclusive bit range, high bit first, e.g. "[32:30]"
    pub bits: String,
    pub raw: u64,
    pub value: u64,
    pub meaning: Option<&'static str>,
    /// Set when the field has a table but no entry for `raw`
    pub reserved: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct DerivedQuantity {
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterReport {
    pub register: &'static str,
    pub width: u32,
    pub raw: String,
    /// Raw value as captured bytes, least significant first
    pub bytes: String,
    pub fields: Vec<FieldLine>,
    pub derived: Vec<DerivedQuantity>,
}

impl RegisterReport {
    pub fn from_register(register: &Register) -> Self {
        let fields = register
            .describe()
            .map(|report| {
                let (meaning, reserved) = match report.value_name {
                    Ok(meaning) => (meaning, false),
                    Err(RegisterError::UnknownValue { .. }) => (None, true),
                    Err(e) => {
                        tracing::warn!("Field {} has no usable description: {}", report.id, e);
                        (None, false)
                    }
                };

                FieldLine {
                    id: report.id,
                    name: report.name,
                    bits: format!("[{}:{}]", report.shift + report.width - 1, report.shift),
                    raw: report.raw,
                    value: report.value,
                    meaning,
                    reserved,
                }
            })
            .collect();

        Self {
            register: register.name(),
            width: register.width(),
            raw: format!(
                "0x{:0width$x}",
                register.encode(),
                width = hex_digits(register.width())
            ),
            bytes: to_captured_bytes(register.encode(), register.width())
                .iter()
                .map(|byte| format!("{byte:02x}"))
                .collect::<Vec<_>>()
                .join(" "),
            fields,
            derived: derived_quantities(register),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({}-bit) = {}  [{}]",
            self.register, self.width, self.raw, self.bytes
        );

        let name_width = self
            .fields
            .iter()
            .map(|field| field.name.len())
            .max()
            .unwrap_or(0);

        for field in &self.fields {
            let meaning = match (field.meaning, field.reserved) {
                (Some(meaning), _) => meaning.to_string(),
                (None, true) => "<reserved encoding>".to_string(),
                (None, false) => String::new(),
            };
            let value = if field.value == field.raw {
                format!("{:#x}", field.raw)
            } else {
                format!("{:#x} -> {}", field.raw, field.value)
            };

            let _ = writeln!(
                out,
                "  {:<8} {:<10} {:<name_width$}  {:<14} {}",
                field.bits, field.id, field.name, value, meaning
            );
        }

        for quantity in &self.derived {
            let _ = writeln!(out, "  {}: {}", quantity.name, quantity.value);
        }

        out
    }
}

fn hex_digits(width: u32) -> usize {
    width.div_ceil(4) as usize
}

/// Register-level quantities that span several fields
fn derived_quantities(register: &Register) -> Vec<DerivedQuantity> {
    let mut derived = Vec::new();

    match register.name() {
        name if name == CcsidrEl1::LAYOUT.name() => {
            let ccsidr = CcsidrEl1::from_register(register.clone());
            derived.push(DerivedQuantity {
                name: "Cache size",
                value: format!("{} bytes", ccsidr.cache_size()),
            });
        }
        name if name == ClidrEl1::LAYOUT.name() => {
            let clidr = ClidrEl1::from_register(register.clone());
            match clidr.cache_levels() {
                Ok(levels) => {
                    for level in levels {
                        derived.push(DerivedQuantity {
                            name: "Cache level",
                            value: format!("L{} {}", level.level, level.description),
                        });
                    }
                }
                Err(e) => tracing::warn!("Cannot list cache levels: {}", e),
            }
        }
        name if name == IdAa64Mmfr0El1::LAYOUT.name() => {
            let mmfr0 = IdAa64Mmfr0El1::from_register(register.clone());
            if let Some(bits) = mmfr0.physical_address_bits() {
                derived.push(DerivedQuantity {
                    name: "Physical address bits",
                    value: bits.to_string(),
                });
            }
        }
        name if name == MpidrEl1::LAYOUT.name() => {
            let mpidr = MpidrEl1::from_register(register.clone());
            derived.push(DerivedQuantity {
                name: "Affinity",
                value: format!("{:#010x}", mpidr.affinity()),
            });
            derived.push(DerivedQuantity {
                name: "Boot core",
                value: mpidr.is_boot_core().to_string(),
            });
        }
        _ => {}
    }

    derived
}

/// Decode the configured value and render it in the configured format
pub fn decode(config: &DecodeConfig) -> Result<String> {
    let mut register = Register::from_layout(config.layout);
    register.decode(config.raw);

    let reserved: Vec<&str> = register
        .describe()
        .filter(|report| report.value_name.is_err())
        .map(|report| report.id)
        .collect();
    if !reserved.is_empty() {
        tracing::warn!(
            "{} fields use reserved encodings: {:?}",
            register.name(),
            reserved
        );
    }

    RegisterReport::from_register(&register).render(config.format)
}

/// One line per known register
pub fn register_list() -> String {
    aarch64::LAYOUTS
        .iter()
        .map(|layout| {
            format!(
                "{:<18} {:>2}-bit  {} fields\n",
                layout.name(),
                layout.width(),
                layout.fields().len()
            )
        })
        .collect()
}

/// Field layout of one register, with its value tables
pub fn layout_table(register: &str) -> Result<String> {
    let layout: &RegisterLayout = aarch64::lookup(register)
        .ok_or_else(|| RegscopeError::UnknownRegister(register.to_string()))?;

    let mut out = String::new();
    let _ = writeln!(out, "{} ({}-bit)", layout.name(), layout.width());

    for (id, field) in layout.fields() {
        let high = field.shift() + field.width() - 1;
        let _ = writeln!(
            out,
            "  [{}:{}] {:<10} {}{}",
            high,
            field.shift(),
            id,
            field.get_name(),
            if field.has_conversion() { " (converted)" } else { "" }
        );

        if let Some(enumeration) = field.enumeration() {
            for (value, meaning) in enumeration.entries() {
                let _ = writeln!(out, "      {value:#x} = {meaning}");
            }
        }
    }

    Ok(out)
}
