//! Maps wire type signatures and semantic annotations to native Qt types.

use crate::error::{Error, Result};
use crate::models::{Binding, SpecIndex};

/// Resolves the binding for one property usage.
///
/// A semantic annotation takes precedence over the wire signature: trailing
/// `[]` pairs denote list nesting, the remaining name (underscores stripped)
/// is the native type. Single-level lists resolve through the custom-list
/// registry; unregistered lists are accepted only for external types.
pub fn binding_from_usage(
    signature: &str,
    semantic: Option<&str>,
    index: &SpecIndex,
) -> Result<Binding> {
    match semantic {
        Some(tp) if !tp.is_empty() => bind_semantic(signature, tp, index),
        _ => bind_signature(signature),
    }
}

fn bind_semantic(signature: &str, semantic: &str, index: &SpecIndex) -> Result<Binding> {
    let mut base = semantic;
    let mut depth = 0usize;
    while let Some(inner) = base.strip_suffix("[]") {
        base = inner;
        depth += 1;
    }
    let natural: String = base.chars().filter(|&c| c != '_').collect();

    let val = match depth {
        0 => natural,
        1 => match index.custom_lists.get(&natural) {
            Some(list_name) => list_name.clone(),
            None if index.is_external(signature, semantic) => format!("{}List", natural),
            None => {
                return Err(Error::TypeMapping {
                    signature: signature.to_string(),
                    semantic: Some(semantic.to_string()),
                })
            }
        },
        // No list type is registered beyond one level of nesting.
        _ => {
            return Err(Error::TypeMapping {
                signature: signature.to_string(),
                semantic: Some(semantic.to_string()),
            })
        }
    };

    // Semantic typedefs over scalar wire types still pass by value.
    if depth == 0 && is_scalar_signature(signature) {
        Ok(Binding::by_value(val))
    } else {
        Ok(Binding::by_reference(val))
    }
}

fn bind_signature(signature: &str) -> Result<Binding> {
    let binding = match signature {
        "b" => Binding::by_value("bool"),
        "y" => Binding::by_value("uchar"),
        "n" => Binding::by_value("short"),
        "q" => Binding::by_value("ushort"),
        "i" => Binding::by_value("int"),
        "u" => Binding::by_value("uint"),
        "x" => Binding::by_value("qlonglong"),
        "t" => Binding::by_value("qulonglong"),
        "d" => Binding::by_value("double"),
        "s" => Binding::by_reference("QString"),
        "v" => Binding::by_reference("QDBusVariant"),
        "o" => Binding::by_reference("QDBusObjectPath"),
        "g" => Binding::by_reference("QDBusSignature"),
        "as" => Binding::by_reference("QStringList"),
        "ay" => Binding::by_reference("QByteArray"),
        "av" => Binding::by_reference("QVariantList"),
        "a{sv}" => Binding::by_reference("QVariantMap"),
        _ => {
            return Err(Error::TypeMapping {
                signature: signature.to_string(),
                semantic: None,
            })
        }
    };
    Ok(binding)
}

fn is_scalar_signature(signature: &str) -> bool {
    matches!(
        signature,
        "b" | "y" | "n" | "q" | "i" | "u" | "x" | "t" | "d"
    )
}
