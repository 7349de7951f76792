//! Parser for the object/interface instantiation document.
//!
//! The document lists `node` elements, each naming a remote object path and
//! carrying one `interface` child whose plain `property` children feed the
//! generator. Prefixed property elements (e.g. `tp:property`) belong to the
//! spec vocabulary, not to D-Bus, and are skipped.

use super::{attr, require_attr};
use crate::error::{Error, Result};
use crate::models::{derive_binding_name, InterfaceInfo, PropertyAccess, PropertyInfo};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parses the instantiation document into interface descriptions, in
/// document order.
pub fn parse_interfaces(xml: &str) -> Result<Vec<InterfaceInfo>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut interfaces = Vec::new();
    // Name of the node currently open, cleared once its interface is read so
    // that additional interface children are ignored.
    let mut node_name: Option<String> = None;
    let mut current: Option<InterfaceInfo> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"node" => {
                    node_name = Some(require_attr(e, "name", "node")?);
                }
                b"interface" => {
                    if current.is_none() {
                        if let Some(node) = node_name.take() {
                            current = Some(InterfaceInfo {
                                node_name: node,
                                dbus_name: require_attr(e, "name", "interface")?,
                                properties: Vec::new(),
                            });
                        }
                    }
                }
                b"property" => {
                    if let Some(ref mut iface) = current {
                        iface.properties.push(parse_property(e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                // A childless interface still gets a proxy class.
                b"interface" => {
                    if current.is_none() {
                        if let Some(node) = node_name.take() {
                            interfaces.push(InterfaceInfo {
                                node_name: node,
                                dbus_name: require_attr(e, "name", "interface")?,
                                properties: Vec::new(),
                            });
                        }
                    }
                }
                b"property" => {
                    if let Some(ref mut iface) = current {
                        iface.properties.push(parse_property(e)?);
                    }
                }
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"interface" => {
                    if let Some(iface) = current.take() {
                        interfaces.push(iface);
                    }
                }
                b"node" => {
                    node_name = None;
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            _ => {}
        }
    }

    Ok(interfaces)
}

fn parse_property(e: &BytesStart<'_>) -> Result<PropertyInfo> {
    let name = require_attr(e, "name", "property")?;
    let signature = require_attr(e, "type", "property")?;
    let access_raw = require_attr(e, "access", "property")?;
    let access = PropertyAccess::parse(&access_raw).ok_or_else(|| {
        Error::SpecAnalysis(format!(
            "property '{}' has unknown access mode '{}'",
            name, access_raw
        ))
    })?;
    let semantic_type = attr(e, "tp:type")?;
    let annotated = attr(e, "tp:name-for-bindings")?;
    let binding_name = derive_binding_name(&name, annotated.as_deref());

    Ok(PropertyInfo {
        name,
        binding_name,
        access,
        signature,
        semantic_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &str = r#"<?xml version="1.0"?>
<tp:spec xmlns:tp="http://telepathy.freedesktop.org/wiki/DbusSpec#extensions-v0">
  <node name="/Connection">
    <interface name="org.freedesktop.Telepathy.Connection">
      <property name="Interfaces" type="as" access="read"/>
      <property name="SelfHandle" type="u" access="readwrite"
                tp:name-for-bindings="Self_Handle" tp:type="Contact_Handle"/>
    </interface>
  </node>
</tp:spec>
"#;

    #[test]
    fn test_parses_node_and_interface() {
        let interfaces = parse_interfaces(SIMPLE).unwrap();
        assert_eq!(interfaces.len(), 1);
        let iface = &interfaces[0];
        assert_eq!(iface.node_name, "/Connection");
        assert_eq!(iface.dbus_name, "org.freedesktop.Telepathy.Connection");
        assert_eq!(iface.class_name(), "ConnectionInterface");
    }

    #[test]
    fn test_parses_properties() {
        let interfaces = parse_interfaces(SIMPLE).unwrap();
        let props = &interfaces[0].properties;
        assert_eq!(props.len(), 2);

        assert_eq!(props[0].name, "Interfaces");
        assert_eq!(props[0].binding_name, "Interfaces");
        assert_eq!(props[0].access, PropertyAccess::Read);
        assert_eq!(props[0].signature, "as");
        assert_eq!(props[0].semantic_type, None);

        assert_eq!(props[1].name, "SelfHandle");
        assert_eq!(props[1].binding_name, "SelfHandle");
        assert_eq!(props[1].access, PropertyAccess::ReadWrite);
        assert_eq!(props[1].signature, "u");
        assert_eq!(props[1].semantic_type.as_deref(), Some("Contact_Handle"));
    }

    #[test]
    fn test_skips_prefixed_properties() {
        let xml = r#"
<node name="/Account">
  <interface name="org.freedesktop.Account">
    <tp:property name="Legacy" type="s" access="read"/>
    <property name="DisplayName" type="s" access="readwrite"/>
  </interface>
</node>"#;
        let interfaces = parse_interfaces(xml).unwrap();
        assert_eq!(interfaces[0].properties.len(), 1);
        assert_eq!(interfaces[0].properties[0].name, "DisplayName");
    }

    #[test]
    fn test_multiple_nodes_in_document_order() {
        let xml = r#"
<spec>
  <node name="/Channel">
    <interface name="org.freedesktop.Channel"/>
  </node>
  <node name="/Connection">
    <interface name="org.freedesktop.Connection"/>
  </node>
</spec>"#;
        let interfaces = parse_interfaces(xml).unwrap();
        assert_eq!(interfaces.len(), 2);
        assert_eq!(interfaces[0].node_name, "/Channel");
        assert_eq!(interfaces[1].node_name, "/Connection");
    }

    #[test]
    fn test_only_first_interface_per_node() {
        let xml = r#"
<node name="/Connection">
  <interface name="org.first"/>
  <interface name="org.second"/>
</node>"#;
        let interfaces = parse_interfaces(xml).unwrap();
        assert_eq!(interfaces.len(), 1);
        assert_eq!(interfaces[0].dbus_name, "org.first");
    }

    #[test]
    fn test_node_without_name_fails() {
        let xml = r#"<node><interface name="org.x"/></node>"#;
        let err = parse_interfaces(xml).unwrap_err();
        assert!(err.to_string().contains("'name'"));
    }

    #[test]
    fn test_unknown_access_mode_fails() {
        let xml = r#"
<node name="/X">
  <interface name="org.x">
    <property name="P" type="s" access="rw"/>
  </interface>
</node>"#;
        let err = parse_interfaces(xml).unwrap_err();
        assert!(err.to_string().contains("unknown access mode"));
    }

    #[test]
    fn test_malformed_xml_fails() {
        assert!(parse_interfaces("<node name=\"/X\"><interface>").is_err());
    }

    #[test]
    fn test_empty_document() {
        let interfaces = parse_interfaces("<spec/>").unwrap();
        assert!(interfaces.is_empty());
    }
}
