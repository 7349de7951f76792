use std::collections::{HashMap, HashSet};

/// Access mode of a D-Bus property, from its `access` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyAccess {
    Read,
    Write,
    ReadWrite,
}

impl PropertyAccess {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "read" => Some(PropertyAccess::Read),
            "write" => Some(PropertyAccess::Write),
            "readwrite" => Some(PropertyAccess::ReadWrite),
            _ => None,
        }
    }

    pub fn is_readable(self) -> bool {
        matches!(self, PropertyAccess::Read | PropertyAccess::ReadWrite)
    }

    pub fn is_writable(self) -> bool {
        matches!(self, PropertyAccess::Write | PropertyAccess::ReadWrite)
    }
}

/// A `property` child of an interface element.
#[derive(Debug, Clone)]
pub struct PropertyInfo {
    /// Raw D-Bus property name, as passed to the runtime property calls.
    pub name: String,
    /// MixedCase name used for the Q_PROPERTY declaration and the getter.
    pub binding_name: String,
    pub access: PropertyAccess,
    /// Wire type signature (`type` attribute).
    pub signature: String,
    /// Optional `tp:type` semantic annotation.
    pub semantic_type: Option<String>,
}

/// One `node` element of the instantiation document together with the
/// interface it implements.
#[derive(Debug, Clone)]
pub struct InterfaceInfo {
    /// Path-like node name, e.g. `/Connection_Interface_Requests`.
    pub node_name: String,
    /// Fully qualified D-Bus interface name.
    pub dbus_name: String,
    pub properties: Vec<PropertyInfo>,
}

impl InterfaceInfo {
    pub fn class_name(&self) -> String {
        derive_class_name(&self.node_name)
    }
}

/// Derives the proxy class name from a node name by stripping `/` and `_`
/// and appending the fixed suffix.
///
/// The caller is responsible for rejecting inputs where two distinct node
/// names collapse to the same class name.
pub fn derive_class_name(node_name: &str) -> String {
    let stripped: String = node_name
        .chars()
        .filter(|&c| c != '/' && c != '_')
        .collect();
    format!("{}Interface", stripped)
}

/// Derives the MixedCase binding name for a property: the
/// `tp:name-for-bindings` annotation when present, the raw name otherwise,
/// with underscores stripped either way.
pub fn derive_binding_name(name: &str, annotated: Option<&str>) -> String {
    annotated
        .unwrap_or(name)
        .chars()
        .filter(|&c| c != '_')
        .collect()
}

/// Registries gathered from the semantic specification document.
#[derive(Debug, Clone, Default)]
pub struct SpecIndex {
    /// Semantic type name (underscores stripped) to the name of its
    /// registered list type.
    pub custom_lists: HashMap<String, String>,
    /// `(signature, semantic type)` pairs defined outside this spec.
    pub externals: HashSet<(String, String)>,
}

impl SpecIndex {
    pub fn is_external(&self, signature: &str, semantic: &str) -> bool {
        self.externals
            .contains(&(signature.to_string(), semantic.to_string()))
    }
}

/// Type mapper output for one property: the native value type and the type
/// used for the setter parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub val: String,
    pub in_arg: String,
}

impl Binding {
    pub fn by_value(val: impl Into<String>) -> Self {
        let val = val.into();
        Binding {
            in_arg: val.clone(),
            val,
        }
    }

    pub fn by_reference(val: impl Into<String>) -> Self {
        let val = val.into();
        Binding {
            in_arg: format!("const {}&", val),
            val,
        }
    }

    /// Default-constructed expression, returned by the degenerate write-only
    /// getter.
    pub fn default_value(&self) -> String {
        format!("{}()", self.val)
    }
}
