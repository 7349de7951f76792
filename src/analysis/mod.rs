//! Spec loading: parses the two input XML documents into the typed model.

pub mod iface_parser;
pub mod spec_parser;

pub use iface_parser::parse_interfaces;
pub use spec_parser::parse_spec_index;

use crate::error::Result;
use quick_xml::events::BytesStart;

/// Looks up an attribute by its qualified name.
pub(crate) fn attr(e: &BytesStart<'_>, key: &str) -> Result<Option<String>> {
    for a in e.attributes().flatten() {
        if a.key.as_ref() == key.as_bytes() {
            return Ok(Some(std::str::from_utf8(&a.value)?.to_string()));
        }
    }
    Ok(None)
}

/// Looks up an attribute that must be present on the element.
pub(crate) fn require_attr(e: &BytesStart<'_>, key: &str, element: &str) -> Result<String> {
    attr(e, key)?.ok_or_else(|| {
        crate::error::Error::SpecAnalysis(format!(
            "{} element is missing required attribute '{}'",
            element, key
        ))
    })
}
