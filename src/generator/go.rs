//! Go rendering helpers shared by the scaffold generator: identifier casing, receiver
//! names, type expansion through the alias table, and parameter lists.

use indexmap::IndexMap;

use crate::config::Import;
use crate::context::Context;
use crate::model::{Interface, Operation, Parameter, PrimitiveName, Type};

/// Alias table consulted when rendering named types
pub type Translation<'a> = &'a IndexMap<String, Import>;

/// The translation table configured for this context.
#[must_use]
pub fn translate_alias<'a>(ctx: &Context<'a>) -> Translation<'a> {
    &ctx.config.aliases
}

fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(['_', '-', ' ']).filter(|w| !w.is_empty())
}

fn upper_first(w: &str) -> String {
    let mut chars = w.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lower_first(w: &str) -> String {
    let mut chars = w.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Lower-camel form used for fields and parameters: `user_repo` → `userRepo`,
/// `Repository` → `repository`.
#[must_use]
pub fn camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, w) in words(s).enumerate() {
        if i == 0 {
            out.push_str(&lower_first(w));
        } else {
            out.push_str(&upper_first(w));
        }
    }
    out
}

/// Upper-camel form: `get_user` → `GetUser`.
#[must_use]
pub fn pascal_case(s: &str) -> String {
    words(s).map(upper_first).collect()
}

/// Exported Go method identifier for an operation.
#[must_use]
pub fn method_name(_operation: &Operation, name: &str) -> String {
    pascal_case(name)
}

/// Short receiver identifier: the interface name's first letter, lowercased.
#[must_use]
pub fn receiver(iface: &Interface) -> String {
    iface
        .name
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_else(|| "s".to_string())
}

fn primitive_type(p: PrimitiveName) -> &'static str {
    match p {
        PrimitiveName::String => "string",
        PrimitiveName::Bool => "bool",
        PrimitiveName::I8 => "int8",
        PrimitiveName::I16 => "int16",
        PrimitiveName::I32 => "int32",
        PrimitiveName::I64 => "int64",
        PrimitiveName::U8 => "uint8",
        PrimitiveName::U16 => "uint16",
        PrimitiveName::U32 => "uint32",
        PrimitiveName::U64 => "uint64",
        PrimitiveName::F32 => "float32",
        PrimitiveName::F64 => "float64",
        PrimitiveName::Bytes => "[]byte",
        PrimitiveName::DateTime => "time.Time",
        PrimitiveName::Any | PrimitiveName::Value => "any",
    }
}

/// Render a type as it appears in a Go signature.
///
/// Streams render as their element type; the caller chooses the wrapper.
#[must_use]
pub fn expand_type(ty: &Type, translate: Translation<'_>) -> String {
    match ty {
        Type::Void => "struct{}".to_string(),
        Type::Primitive(p) => primitive_type(*p).to_string(),
        Type::Alias(name) => translate
            .get(name)
            .map(|i| i.ty.clone())
            .unwrap_or_else(|| name.clone()),
        Type::Named(name) => match translate.get(name) {
            Some(i) => i.ty.clone(),
            None if name == "datetime" => "time.Time".to_string(),
            None => name.clone(),
        },
        Type::List(item) => format!("[]{}", expand_type(item, translate)),
        Type::Map(key, value) => format!(
            "map[{}]{}",
            expand_type(key, translate),
            expand_type(value, translate)
        ),
        Type::Optional(inner) => format!("*{}", expand_type(inner, translate)),
        Type::Stream(inner) => expand_type(inner, translate),
        Type::Enum(name) => name.clone(),
    }
}

/// Render a method parameter list, always led by the cancellation context.
#[must_use]
pub fn map_params(params: &[Parameter], translate: Translation<'_>) -> String {
    std::iter::once("ctx context.Context".to_string())
        .chain(
            params
                .iter()
                .map(|p| format!("{} {}", camel_case(&p.name), expand_type(&p.ty, translate))),
        )
        .collect::<Vec<_>>()
        .join(", ")
}

/// Operations annotated `@nocode` are implemented by hand; no stub is generated.
#[must_use]
pub fn has_existing_implementation(operation: &Operation) -> bool {
    operation.annotation("nocode").is_some()
}

/// Whether the current interface carries any of the given role annotations.
#[must_use]
pub fn is_one_of_type(ctx: &Context<'_>, role_types: &[String]) -> bool {
    ctx.interface.is_some_and(|iface| {
        iface
            .annotations
            .iter()
            .any(|a| role_types.iter().any(|t| *t == a.name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Annotation;

    fn table() -> IndexMap<String, Import> {
        let mut t = IndexMap::new();
        t.insert(
            "UUID".to_string(),
            Import::new("uuid.UUID", "github.com/google/uuid"),
        );
        t
    }

    #[test]
    fn test_case_conversion() {
        assert_eq!(camel_case("Repository"), "repository");
        assert_eq!(camel_case("user_repo"), "userRepo");
        assert_eq!(camel_case("EventBus"), "eventBus");
        assert_eq!(camel_case("dead-letter queue"), "deadLetterQueue");
        assert_eq!(camel_case(""), "");
        assert_eq!(pascal_case("greet"), "Greet");
        assert_eq!(pascal_case("get_user"), "GetUser");
        assert_eq!(pascal_case("listItems"), "ListItems");
    }

    #[test]
    fn test_receiver() {
        let iface = Interface {
            name: "Greeter".to_string(),
            operations: vec![],
            annotations: vec![],
        };
        assert_eq!(receiver(&iface), "g");
    }

    #[test]
    fn test_expand_type() {
        let t = table();
        let named = |n: &str| Box::new(Type::Named(n.to_string()));
        assert_eq!(expand_type(&Type::Primitive(PrimitiveName::I64), &t), "int64");
        assert_eq!(expand_type(&Type::Alias("UUID".to_string()), &t), "uuid.UUID");
        assert_eq!(expand_type(&Type::Alias("Other".to_string()), &t), "Other");
        assert_eq!(expand_type(&Type::Named("datetime".to_string()), &t), "time.Time");
        assert_eq!(expand_type(&Type::List(named("Event")), &t), "[]Event");
        assert_eq!(
            expand_type(
                &Type::Map(
                    Box::new(Type::Primitive(PrimitiveName::String)),
                    Box::new(Type::Optional(named("Event")))
                ),
                &t
            ),
            "map[string]*Event"
        );
        assert_eq!(expand_type(&Type::Stream(named("Event")), &t), "Event");
        assert_eq!(
            expand_type(&Type::Primitive(PrimitiveName::Bytes), &t),
            "[]byte"
        );
    }

    #[test]
    fn test_map_params() {
        let t = table();
        assert_eq!(map_params(&[], &t), "ctx context.Context");
        let params = vec![
            Parameter {
                name: "user_id".to_string(),
                ty: Type::Alias("UUID".to_string()),
            },
            Parameter {
                name: "limit".to_string(),
                ty: Type::Primitive(PrimitiveName::U32),
            },
        ];
        assert_eq!(
            map_params(&params, &t),
            "ctx context.Context, userId uuid.UUID, limit uint32"
        );
    }

    #[test]
    fn test_has_existing_implementation() {
        let mut op = Operation {
            name: "greet".to_string(),
            parameters: vec![],
            ty: Type::Void,
            annotations: vec![],
        };
        assert!(!has_existing_implementation(&op));
        op.annotations.push(Annotation {
            name: "nocode".to_string(),
            arguments: vec![],
        });
        assert!(has_existing_implementation(&op));
    }
}
