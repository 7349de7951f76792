//! Parser for the semantic specification document.
//!
//! Only three element kinds matter to property binding: `tp:struct` and
//! `tp:mapping` register custom list types, `tp:external-type` registers
//! types defined in another spec document.

use super::{attr, require_attr};
use crate::error::{Error, Result};
use crate::models::SpecIndex;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Gathers the custom-list and external-type registries from the spec
/// document.
pub fn parse_spec_index(xml: &str) -> Result<SpecIndex> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut index = SpecIndex::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"tp:struct" | b"tp:mapping" => register_custom_list(e, &mut index)?,
                b"tp:external-type" => {
                    let name = require_attr(e, "name", "tp:external-type")?;
                    let signature = require_attr(e, "type", "tp:external-type")?;
                    index.externals.insert((signature, name));
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(index)
}

fn register_custom_list(e: &BytesStart<'_>, index: &mut SpecIndex) -> Result<()> {
    // Anonymous inline structs carry no name and register nothing.
    let Some(name) = attr(e, "name")? else {
        return Ok(());
    };
    let natural: String = name.chars().filter(|&c| c != '_').collect();
    let list_name = match attr(e, "array-name")? {
        Some(array_name) => array_name.chars().filter(|&c| c != '_').collect(),
        None => format!("{}List", natural),
    };
    index.custom_lists.insert(natural, list_name);
    Ok(())
}
