/// Everything needed to print one address label. Built by the member
/// retrieval layer before a render pass starts; read-only afterwards.
///
/// The optional parent carries the address of the member a record is
/// attached to (typically a family head). It is consulted only when the
/// record's own address is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelRecord {
    pub full_name: String,
    pub address: String,
    pub address_continuation: String,
    pub zipcode: String,
    pub town: String,
    pub country: String,
    pub parent: Option<Box<LabelRecord>>,
}

/// The four address fields actually printed on a label, after the parent
/// fallback has been applied. Country is deliberately absent: it is always
/// the record's own, even when the address comes from the parent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ResolvedAddress<'a> {
    pub address: &'a str,
    pub address_continuation: &'a str,
    pub zipcode: &'a str,
    pub town: &'a str,
}

impl LabelRecord {
    /// Resolve the printable address: the record's own fields, or the
    /// parent's four address fields when the record has no address of its
    /// own. An empty address with no parent resolves to empty fields —
    /// the label is simply printed blank, this is not an error.
    pub fn resolved_address(&self) -> ResolvedAddress<'_> {
        match &self.parent {
            Some(parent) if self.address.is_empty() => ResolvedAddress {
                address: &parent.address,
                address_continuation: &parent.address_continuation,
                zipcode: &parent.zipcode,
                town: &parent.town,
            },
            _ => ResolvedAddress {
                address: &self.address,
                address_continuation: &self.address_continuation,
                zipcode: &self.zipcode,
                town: &self.town,
            },
        }
    }
}
