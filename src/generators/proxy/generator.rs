//! The emitter: turns interface descriptions into the header and
//! implementation text artifacts.

use crate::error::{Error, Result};
use crate::generators::base::binding_from_usage;
use crate::generators::proxy::templates;
use crate::interface::config::GenerateConfig;
use crate::models::{derive_class_name, InterfaceInfo, SpecIndex};
use std::collections::HashMap;

/// The two text artifacts of one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedProxies {
    pub header: String,
    pub implementation: String,
}

/// Generator for Qt D-Bus client proxy classes.
pub struct ProxyGenerator<'a> {
    config: &'a GenerateConfig,
    spec: &'a SpecIndex,
}

impl<'a> ProxyGenerator<'a> {
    pub fn new(config: &'a GenerateConfig, spec: &'a SpecIndex) -> Self {
        Self { config, spec }
    }

    /// Runs the single emission pass. No I/O happens here; the caller owns
    /// flushing the returned buffers.
    pub fn generate(&self, interfaces: &[InterfaceInfo]) -> Result<GeneratedProxies> {
        let main_iface = self.config.mainiface.as_deref();

        // Main interface first, everything else lexicographically by raw
        // node name.
        let mut interfaces = interfaces.to_vec();
        interfaces.sort_by(|a, b| {
            let a_key = (Some(a.node_name.as_str()) != main_iface, &a.node_name);
            let b_key = (Some(b.node_name.as_str()) != main_iface, &b.node_name);
            a_key.cmp(&b_key)
        });

        self.check_class_name_collisions(&interfaces)?;

        let main_class = main_iface.map(derive_class_name);

        let mut header = String::new();
        let mut implementation = String::new();

        header.push_str(&templates::header_preamble(&self.config.typesinclude));
        implementation.push_str(&templates::impl_preamble(&self.config.realinclude));

        let segments: Vec<&str> = self.config.namespace.split("::").collect();
        for segment in &segments {
            let open = templates::namespace_open(segment);
            header.push_str(&open);
            implementation.push_str(&open);
        }

        for iface in &interfaces {
            self.emit_interface(iface, main_class.as_deref(), &mut header, &mut implementation)?;
        }

        let close = templates::namespace_close(segments.len());
        header.push_str(&close);
        implementation.push_str(&close);

        Ok(GeneratedProxies {
            header,
            implementation,
        })
    }

    /// The class-name derivation must stay injective; duplicate declarations
    /// would be silently invalid C++.
    fn check_class_name_collisions(&self, interfaces: &[InterfaceInfo]) -> Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for iface in interfaces {
            let class = iface.class_name();
            if let Some(first) = seen.insert(class.clone(), &iface.node_name) {
                return Err(Error::DuplicateClassName {
                    class,
                    first: first.to_string(),
                    second: iface.node_name.clone(),
                });
            }
        }
        Ok(())
    }

    fn emit_interface(
        &self,
        iface: &InterfaceInfo,
        main_class: Option<&str>,
        header: &mut String,
        implementation: &mut String,
    ) -> Result<()> {
        let class = iface.class_name();

        header.push_str(&templates::class_open(&class, &iface.dbus_name));
        implementation.push_str(&templates::base_constructor_definitions(&class));

        // The main interface never delegates to itself.
        if let Some(main_class) = main_class {
            if main_class != class {
                header.push_str(&templates::delegating_constructor_declarations(
                    &class, main_class,
                ));
                implementation.push_str(&templates::delegating_constructor_definitions(
                    &class, main_class,
                ));
            }
        }

        for prop in &iface.properties {
            let binding =
                binding_from_usage(&prop.signature, prop.semantic_type.as_deref(), self.spec)?;
            header.push_str(&templates::property_declaration(prop, &binding));
            if prop.access.is_writable() {
                header.push_str(&templates::property_setter(prop, &binding));
            }
        }

        header.push_str(templates::class_close());
        Ok(())
    }
}
