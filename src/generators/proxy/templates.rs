//! Fixed C++ boilerplate snippets for the proxy generator.
//!
//! Every function returns one ready-to-append fragment; the generator owns
//! the ordering and the two output sinks.

use crate::models::{Binding, PropertyInfo};

/// Provenance comment and Qt include block opening the header file.
pub fn header_preamble(typesinclude: &str) -> String {
    format!(
        "\
/*
 * This file contains D-Bus client proxy classes generated by dbus-proxygen.
 *
 * This file can be distributed under the same terms as the specification from
 * which it was generated.
 */

#include <QString>
#include <QObject>
#include <QVariant>

#include <QtGlobal>
#include <QtDBus>

#include <{}>

",
        typesinclude
    )
}

/// Include of the generated header, opening the implementation file.
pub fn impl_preamble(realinclude: &str) -> String {
    format!("#include <{}>\n\n", realinclude)
}

pub fn namespace_open(segment: &str) -> String {
    format!("namespace {}\n{{\n", segment)
}

pub fn namespace_close(count: usize) -> String {
    "}\n".repeat(count)
}

/// Class opening block: static interface name and the two base constructor
/// declarations.
pub fn class_open(class: &str, dbus_name: &str) -> String {
    format!(
        "
class {class} : public QDBusAbstractInterface
{{
    Q_OBJECT

public:
    static inline const char *staticInterfaceName()
    {{
        return \"{dbus_name}\";
    }}

    {class}(
        const QString& serviceName,
        const QString& objectPath,
        QObject* parent = 0
    );

    {class}(
        const QDBusConnection& connection,
        const QString& serviceName,
        const QString& objectPath,
        QObject* parent = 0
    );
",
        class = class,
        dbus_name = dbus_name,
    )
}

/// Definitions of the two base constructors.
pub fn base_constructor_definitions(class: &str) -> String {
    format!(
        "
{class}::{class}(const QString& serviceName, const QString& objectPath, QObject *parent)
    : QDBusAbstractInterface(serviceName, objectPath, staticInterfaceName(), QDBusConnection::sessionBus(), parent)
{{
}}

{class}::{class}(const QDBusConnection& connection, const QString& serviceName, const QString& objectPath, QObject *parent)
    : QDBusAbstractInterface(serviceName, objectPath, staticInterfaceName(), connection, parent)
{{
}}
",
        class = class,
    )
}

/// Declarations of the two constructors delegating to an existing
/// main-interface proxy.
pub fn delegating_constructor_declarations(class: &str, main_class: &str) -> String {
    format!(
        "
    {class}(const {main_class}& mainInterface);

    {class}(const {main_class}& mainInterface, QObject* parent);
",
        class = class,
        main_class = main_class,
    )
}

/// Definitions of the two delegating constructors: copy service, path and
/// connection from the main-interface proxy; the first also adopts its
/// parent.
pub fn delegating_constructor_definitions(class: &str, main_class: &str) -> String {
    format!(
        "
{class}::{class}(const {main_class}& mainInterface)
    : QDBusAbstractInterface(mainInterface.service(), mainInterface.path(), staticInterfaceName(), mainInterface.connection(), mainInterface.parent())
{{
}}

{class}::{class}(const {main_class}& mainInterface, QObject *parent)
    : QDBusAbstractInterface(mainInterface.service(), mainInterface.path(), staticInterfaceName(), mainInterface.connection(), parent)
{{
}}
",
        class = class,
        main_class = main_class,
    )
}

/// Q_PROPERTY declaration plus the inline getter. Write-only properties get
/// a structurally-present getter returning a default-constructed value.
pub fn property_declaration(prop: &PropertyInfo, binding: &Binding) -> String {
    let maybe_setter = if prop.access.is_writable() {
        format!(" WRITE {}", setter_name(&prop.binding_name))
    } else {
        String::new()
    };
    let getter_return = if prop.access.is_readable() {
        format!(
            "qvariant_cast<{}>(internalPropGet(\"{}\"))",
            binding.val, prop.name
        )
    } else {
        binding.default_value()
    };
    format!(
        "
    Q_PROPERTY({val} {binding_name} READ {getter}{maybe_setter})

    inline {val} {getter}() const
    {{
        return {getter_return};
    }}
",
        val = binding.val,
        binding_name = prop.binding_name,
        getter = prop.binding_name,
        maybe_setter = maybe_setter,
        getter_return = getter_return,
    )
}

/// Inline setter forwarding through the generic property-set call.
pub fn property_setter(prop: &PropertyInfo, binding: &Binding) -> String {
    format!(
        "
    inline void {setter}({in_arg} newValue)
    {{
        internalPropSet(\"{name}\", QVariant::fromValue(newValue));
    }}
",
        setter = setter_name(&prop.binding_name),
        in_arg = binding.in_arg,
        name = prop.name,
    )
}

pub fn class_close() -> &'static str {
    "};\n"
}

/// Setter name: the getter name with its first character upper-cased,
/// prefixed by `set`.
pub fn setter_name(getter: &str) -> String {
    let mut chars = getter.chars();
    match chars.next() {
        Some(first) => format!("set{}{}", first.to_uppercase(), chars.as_str()),
        None => "set".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyAccess;

    fn prop(access: PropertyAccess) -> PropertyInfo {
        PropertyInfo {
            name: "SelfHandle".to_string(),
            binding_name: "SelfHandle".to_string(),
            access,
            signature: "u".to_string(),
            semantic_type: None,
        }
    }

    #[test]
    fn test_setter_name_derivation() {
        assert_eq!(setter_name("selfHandle"), "setSelfHandle");
        assert_eq!(setter_name("SelfHandle"), "setSelfHandle");
    }

    #[test]
    fn test_header_preamble_includes() {
        let preamble = header_preamble("TelepathyQt4/_gen/cli-connection.h");
        assert!(preamble.contains("#include <QtDBus>"));
        assert!(preamble.contains("#include <TelepathyQt4/_gen/cli-connection.h>"));
        assert!(preamble.starts_with("/*\n"));
    }

    #[test]
    fn test_namespace_tokens_balance() {
        let open = format!("{}{}", namespace_open("Foo"), namespace_open("Bar"));
        let close = namespace_close(2);
        assert_eq!(open.matches('{').count(), close.matches('}').count());
    }

    #[test]
    fn test_readable_property_getter() {
        let binding = Binding::by_value("uint");
        let decl = property_declaration(&prop(PropertyAccess::Read), &binding);
        assert!(decl.contains("Q_PROPERTY(uint SelfHandle READ SelfHandle)"));
        assert!(decl.contains("qvariant_cast<uint>(internalPropGet(\"SelfHandle\"))"));
        assert!(!decl.contains("WRITE"));
    }

    #[test]
    fn test_write_only_property_returns_default() {
        let binding = Binding::by_value("uint");
        let decl = property_declaration(&prop(PropertyAccess::Write), &binding);
        assert!(decl.contains("WRITE setSelfHandle"));
        assert!(decl.contains("return uint();"));
        assert!(!decl.contains("internalPropGet"));
    }

    #[test]
    fn test_setter_uses_in_arg_and_raw_name() {
        let binding = Binding::by_reference("QString");
        let setter = property_setter(&prop(PropertyAccess::ReadWrite), &binding);
        assert!(setter.contains("inline void setSelfHandle(const QString& newValue)"));
        assert!(setter.contains("internalPropSet(\"SelfHandle\", QVariant::fromValue(newValue));"));
    }
}
