//! Value-to-description tables attached to register fields

/// Immutable mapping from a field value to its architectural meaning
///
/// Tables are declared as `static` items and referenced by every field that
/// shares the vocabulary, e.g. all seven `Ctype<n>` fields of `CLIDR_EL1`
/// point at the same table.
///
/// # Example
///
/// ```
/// use regscope_raw::Enumeration;
///
/// static ASID_BITS: Enumeration = Enumeration::new(&[(0, "8 bits"), (2, "16 bits")]);
///
/// assert_eq!(ASID_BITS.lookup(2), Some("16 bits"));
/// assert_eq!(ASID_BITS.lookup(1), None);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Enumeration {
    entries: &'static [(u64, &'static str)],
}

impl Enumeration {
    pub const fn new(entries: &'static [(u64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Description for `value`, or `None` when the table has no entry
    pub fn lookup(&self, value: u64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, name)| *name)
    }

    pub fn entries(&self) -> &'static [(u64, &'static str)] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
