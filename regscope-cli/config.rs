use regscope_raw::arch::aarch64;
use regscope_raw::raw::from_captured_bytes;
use regscope_raw::RegisterLayout;

use crate::error::{RegscopeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub layout: &'static RegisterLayout,
    pub raw: u64,
    pub format: OutputFormat,
}

impl DecodeConfig {
    /// Build a configuration from command-line strings
    ///
    /// `value` is an integer (`0x` hex, `0b` binary or decimal) unless
    /// `bytes` is set, in which case it is a captured little-endian byte dump.
    pub fn new(register: &str, value: &str, bytes: bool, format: OutputFormat) -> Result<Self> {
        let layout = aarch64::lookup(register)
            .ok_or_else(|| RegscopeError::UnknownRegister(register.to_string()))?;

        let raw = if bytes {
            from_captured_bytes(&Self::parse_byte_dump(value)?)?
        } else {
            Self::parse_raw_value(value)?
        };

        tracing::debug!("{} raw value 0x{:016x}", layout.name(), raw);

        Ok(Self {
            layout,
            raw,
            format,
        })
    }

    /// Parse "0x0a200023", "0b101" or "170328099" into an integer
    pub fn parse_raw_value(s: &str) -> Result<u64> {
        let s = s.trim().replace('_', "");
        let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16)
        } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
            u64::from_str_radix(bin, 2)
        } else {
            s.parse::<u64>()
        };

        parsed.map_err(|e| RegscopeError::ParseError(format!("invalid register value '{s}': {e}")))
    }

    /// Parse a byte dump like "23 00 20 0a", "23,00,20,0a" or "2300200a"
    pub fn parse_byte_dump(s: &str) -> Result<Vec<u8>> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|part| !part.is_empty())
            .collect();

        let tokens: Vec<String> = if parts.len() == 1 {
            let packed = parts[0].trim_start_matches("0x");
            if packed.len() % 2 != 0 {
                return Err(RegscopeError::ParseError(format!(
                    "byte dump '{s}' has an odd number of hex digits"
                )));
            }
            packed
                .as_bytes()
                .chunks(2)
                .map(|pair| String::from_utf8_lossy(pair).into_owned())
                .collect()
        } else {
            parts
                .iter()
                .map(|part| part.trim_start_matches("0x").to_string())
                .collect()
        };

        tokens
            .iter()
            .map(|token| {
                u8::from_str_radix(token, 16).map_err(|e| {
                    RegscopeError::ParseError(format!("invalid byte '{token}': {e}"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_value() {
        assert_eq!(DecodeConfig::parse_raw_value("0x0a200023").unwrap(), 0x0a20_0023);
        assert_eq!(DecodeConfig::parse_raw_value("0X4924_9249").unwrap(), 0x4924_9249);
        assert_eq!(DecodeConfig::parse_raw_value("0b101").unwrap(), 5);
        assert_eq!(DecodeConfig::parse_raw_value(" 42 ").unwrap(), 42);
        assert!(DecodeConfig::parse_raw_value("0xZZ").is_err());
    }

    #[test]
    fn test_parse_byte_dump() {
        let expected = vec![0x23, 0x00, 0x20, 0x0a];
        assert_eq!(DecodeConfig::parse_byte_dump("23 00 20 0a").unwrap(), expected);
        assert_eq!(DecodeConfig::parse_byte_dump("23,00,20,0a").unwrap(), expected);
        assert_eq!(DecodeConfig::parse_byte_dump("2300200a").unwrap(), expected);
        assert_eq!(DecodeConfig::parse_byte_dump("0x23 0x00 0x20 0x0a").unwrap(), expected);
        assert!(DecodeConfig::parse_byte_dump("230").is_err());
        assert!(DecodeConfig::parse_byte_dump("zz 00").is_err());
    }

    #[test]
    fn test_new_from_bytes() {
        let config =
            DecodeConfig::new("clidr_el1", "23 00 20 0a", true, OutputFormat::Text).unwrap();
        assert_eq!(config.layout.name(), "CLIDR_EL1");
        assert_eq!(config.raw, 0x0a20_0023);
    }

    #[test]
    fn test_new_rejects_wrong_byte_count() {
        let err = DecodeConfig::new("CLIDR_EL1", "23 00 20", true, OutputFormat::Text).unwrap_err();
        assert!(matches!(err, RegscopeError::Register(_)));
    }

    #[test]
    fn test_unknown_register() {
        let err = DecodeConfig::new("SCTLR_EL1", "0", false, OutputFormat::Json).unwrap_err();
        assert!(matches!(err, RegscopeError::UnknownRegister(name) if name == "SCTLR_EL1"));
    }
}
