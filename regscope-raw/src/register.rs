//! Register models built from bounded fields

use indexmap::IndexMap;

use crate::error::{RegisterError, Result};
use crate::field::RegisterField;
use crate::layout::{validate_fields, FieldEntry, RegisterLayout};

/// An ordered collection of named fields describing one hardware register
///
/// A raw value is split into all fields at once with [`decode`](Self::decode).
/// Fields keep their declaration order, which is also the order of
/// [`describe`](Self::describe).
///
/// # Example
///
/// ```
/// use regscope_raw::{Register, RegisterField};
///
/// let mut reg = Register::new(
///     "DEMO",
///     8,
///     [
///         ("Low", RegisterField::new("Low nibble", 4, 0)),
///         ("High", RegisterField::new("High nibble", 4, 4)),
///     ],
/// )
/// .unwrap();
///
/// reg.decode(0xA5);
/// assert_eq!(reg.get_field("Low").unwrap(), 0x5);
/// assert_eq!(reg.get_field("High").unwrap(), 0xA);
/// assert_eq!(reg.encode(), 0xA5);
/// ```
#[derive(Debug, Clone)]
pub struct Register {
    name: &'static str,
    width: u32,
    fields: IndexMap<&'static str, RegisterField>,
}

/// One line of a register report, see [`Register::describe`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub id: &'static str,
    pub name: &'static str,
    pub shift: u32,
    pub width: u32,
    /// Bits exactly as decoded
    pub raw: u64,
    /// Value after the field's conversion, equal to `raw` without one
    pub value: u64,
    /// Meaning of `raw`; `Ok(None)` when the field has no enumeration
    pub value_name: Result<Option<&'static str>>,
}

impl Register {
    /// Build a register from caller-provided fields
    ///
    /// The layout is validated first; see
    /// [`validate_fields`](crate::layout::validate_fields) for the rules.
    pub fn new(
        name: &'static str,
        width: u32,
        fields: impl IntoIterator<Item = FieldEntry>,
    ) -> Result<Self> {
        let entries: Vec<FieldEntry> = fields.into_iter().collect();
        validate_fields(width, &entries)?;

        Ok(Self {
            name,
            width,
            fields: entries.into_iter().collect(),
        })
    }

    /// Instantiate a static layout with every field set to 0
    ///
    /// Built-in layouts are checked at compile time; this still re-checks in
    /// debug builds for layouts declared elsewhere.
    pub fn from_layout(layout: &'static RegisterLayout) -> Self {
        debug_assert!(
            layout.validate().is_ok(),
            "malformed register layout {}",
            layout.name()
        );

        Self {
            name: layout.name(),
            width: layout.width(),
            fields: layout.fields().iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Split `raw` into every field
    ///
    /// Each field receives `(raw >> shift) & (2^width - 1)`, so no field can
    /// end up out of bounds. Bits not covered by any field are ignored.
    pub fn decode(&mut self, raw: u64) {
        for field in self.fields.values_mut() {
            field.load(raw);
        }
    }

    /// Reassemble a raw value from the current field values
    pub fn encode(&self) -> u64 {
        self.fields
            .values()
            .fold(0, |raw, field| raw | field.placed())
    }

    /// Write one field directly, with the same bounds check as
    /// [`RegisterField::set_value`]
    pub fn set_field(&mut self, id: &str, value: u64) -> Result<()> {
        self.field_mut(id)?.set_value(value)
    }

    /// Field value after its conversion
    pub fn get_field(&self, id: &str) -> Result<u64> {
        self.field(id).map(RegisterField::get_value)
    }

    /// Field value exactly as stored in the register bits
    pub fn get_field_raw(&self, id: &str) -> Result<u64> {
        self.field(id).map(RegisterField::raw_value)
    }

    pub fn get_field_name(&self, id: &str) -> Result<&'static str> {
        self.field(id).map(RegisterField::get_name)
    }

    pub fn get_field_value_name(&self, id: &str) -> Result<Option<&'static str>> {
        self.field(id)?.get_value_name()
    }

    pub fn field(&self, id: &str) -> Result<&RegisterField> {
        self.fields
            .get(id)
            .ok_or_else(|| RegisterError::UnknownField(id.to_string()))
    }

    fn field_mut(&mut self, id: &str) -> Result<&mut RegisterField> {
        self.fields
            .get_mut(id)
            .ok_or_else(|| RegisterError::UnknownField(id.to_string()))
    }

    /// Field ids and descriptors in declaration order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &RegisterField)> + '_ {
        self.fields.iter().map(|(id, field)| (*id, field))
    }

    /// Report every field in declaration order
    ///
    /// The iterator borrows the register and can be requested again to
    /// restart from the first field.
    pub fn describe(&self) -> impl Iterator<Item = FieldReport> + '_ {
        self.fields.iter().map(|(id, field)| FieldReport {
            id: *id,
            name: field.get_name(),
            shift: field.shift(),
            width: field.width(),
            raw: field.raw_value(),
            value: field.get_value(),
            value_name: field.get_value_name(),
        })
    }
}

/// A concrete architecture register backed by a static layout
///
/// Implementors wrap a [`Register`] and usually add typed accessors for
/// quantities that span several fields.
pub trait SystemRegister: Sized {
    /// Field layout shared by every instance
    const LAYOUT: &'static RegisterLayout;

    /// Wrap an already-built register of this layout
    fn from_register(register: Register) -> Self;

    fn register(&self) -> &Register;

    fn register_mut(&mut self) -> &mut Register;

    /// Create an instance with every field set to 0
    fn new() -> Self {
        Self::from_register(Register::from_layout(Self::LAYOUT))
    }

    /// Create an instance decoded from `raw`
    fn from_raw(raw: u64) -> Self {
        let mut reg = Self::new();
        reg.register_mut().decode(raw);
        reg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumeration::Enumeration;
    use crate::error::LayoutError;

    static PARITY: Enumeration = Enumeration::new(&[(0, "Even"), (1, "Odd")]);

    fn two_field_register() -> Register {
        Register::new(
            "TEST",
            8,
            [
                ("field1", RegisterField::new("field1", 3, 0)),
                (
                    "field2",
                    RegisterField::new("field2", 3, 3).with_enumeration(&PARITY),
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_register_get_field() {
        let mut reg = two_field_register();
        reg.set_field("field1", 6).unwrap();
        reg.set_field("field2", 7).unwrap();

        assert_eq!(reg.get_field("field1").unwrap(), 6);
        assert_eq!(reg.get_field("field2").unwrap(), 7);
        assert_eq!(reg.encode(), 0b111_110);
    }

    #[test]
    fn test_unknown_field() {
        let mut reg = two_field_register();
        let unknown = RegisterError::UnknownField("field3".to_string());

        assert_eq!(reg.get_field("field3"), Err(unknown.clone()));
        assert_eq!(reg.get_field_name("field3"), Err(unknown.clone()));
        assert_eq!(reg.get_field_value_name("field3"), Err(unknown.clone()));
        assert_eq!(reg.set_field("field3", 1), Err(unknown));
    }

    #[test]
    fn test_set_field_out_of_bound_keeps_state() {
        let mut reg = two_field_register();
        reg.decode(0b101_011);

        assert!(matches!(
            reg.set_field("field1", 8),
            Err(RegisterError::FieldOutOfBound { width: 3, .. })
        ));
        assert_eq!(reg.get_field("field1").unwrap(), 0b011);
        assert_eq!(reg.get_field("field2").unwrap(), 0b101);
    }

    #[test]
    fn test_decode_ignores_uncovered_bits() {
        let mut reg = two_field_register();
        reg.decode(0xC0 | 0b001_010);
        assert_eq!(reg.get_field("field1").unwrap(), 0b010);
        assert_eq!(reg.get_field("field2").unwrap(), 0b001);
        assert_eq!(reg.encode(), 0b001_010);
    }

    #[test]
    fn test_decode_rewrites_every_field() {
        let mut reg = two_field_register();
        reg.decode(0b111_111);
        reg.decode(0);
        assert!(reg.fields().all(|(_, field)| field.raw_value() == 0));
    }

    #[test]
    fn test_round_trip_full_coverage() {
        let mut reg = Register::new(
            "COVER",
            32,
            [
                ("a", RegisterField::new("a", 1, 0)),
                ("b", RegisterField::new("b", 7, 1)),
                ("c", RegisterField::new("c", 16, 8)),
                ("d", RegisterField::new("d", 8, 24)),
            ],
        )
        .unwrap();

        for raw in [0, 1, 0xFFFF_FFFF, 0x0a20_0023, 0x4924_9249, 0x8000_0001] {
            reg.decode(raw);
            assert_eq!(reg.encode(), raw);
        }
    }

    #[test]
    fn test_describe_is_ordered_and_restartable() {
        let mut reg = two_field_register();
        reg.decode(0b001_100);

        let first: Vec<FieldReport> = reg.describe().collect();
        let second: Vec<FieldReport> = reg.describe().collect();
        assert_eq!(first, second);

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].name, "field1");
        assert_eq!(first[0].value, 4);
        assert_eq!(first[0].value_name, Ok(None));
        assert_eq!(first[1].name, "field2");
        assert_eq!(first[1].value_name, Ok(Some("Odd")));
    }

    #[test]
    fn test_describe_surfaces_unknown_value() {
        let mut reg = two_field_register();
        reg.set_field("field2", 5).unwrap();

        let report: Vec<FieldReport> = reg.describe().collect();
        assert_eq!(
            report[1].value_name,
            Err(RegisterError::UnknownValue {
                field: "field2",
                value: 5
            })
        );
    }

    #[test]
    fn test_new_rejects_bad_layout() {
        let err = Register::new(
            "BAD",
            8,
            [
                ("a", RegisterField::new("a", 4, 0)),
                ("b", RegisterField::new("b", 4, 2)),
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            RegisterError::Layout(LayoutError::Overlap {
                first: "a",
                second: "b"
            })
        );
    }
}
