use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::expr::{parse_type_expr, ModelError};

/// Built-in scalar types of the interface definition language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveName {
    String,
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Bytes,
    #[serde(alias = "dateTime")]
    DateTime,
    Any,
    Value,
}

impl PrimitiveName {
    /// Look up a primitive by its IDL keyword.
    #[must_use]
    pub fn from_keyword(s: &str) -> Option<Self> {
        let p = match s {
            "string" => PrimitiveName::String,
            "bool" => PrimitiveName::Bool,
            "i8" => PrimitiveName::I8,
            "i16" => PrimitiveName::I16,
            "i32" => PrimitiveName::I32,
            "i64" => PrimitiveName::I64,
            "u8" => PrimitiveName::U8,
            "u16" => PrimitiveName::U16,
            "u32" => PrimitiveName::U32,
            "u64" => PrimitiveName::U64,
            "f32" => PrimitiveName::F32,
            "f64" => PrimitiveName::F64,
            "bytes" => PrimitiveName::Bytes,
            "datetime" => PrimitiveName::DateTime,
            "any" => PrimitiveName::Any,
            "value" => PrimitiveName::Value,
            _ => return None,
        };
        Some(p)
    }
}

/// A type occurrence anywhere in a signature.
///
/// The set of kinds is closed; every resolution site matches on it exhaustively so a new
/// kind cannot be added without updating them all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TypeRepr")]
pub enum Type {
    /// No value (operation return sentinel)
    Void,
    Primitive(PrimitiveName),
    /// Named indirection resolved through the configured alias table
    Alias(String),
    /// Named, non-primitive declared type
    Named(String),
    List(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Optional(Box<Type>),
    Stream(Box<Type>),
    Enum(String),
}

impl Type {
    #[must_use]
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    #[must_use]
    pub fn is_stream(&self) -> bool {
        matches!(self, Type::Stream(_))
    }

    /// Convert named references into alias or enum kinds when the namespace declares them.
    ///
    /// Only one level of indirection is followed.
    pub(crate) fn resolve_references(&mut self, aliases: &[String], enums: &[String]) {
        match self {
            Type::Named(name) => {
                if aliases.iter().any(|a| a == name) {
                    *self = Type::Alias(std::mem::take(name));
                } else if enums.iter().any(|e| e == name) {
                    *self = Type::Enum(std::mem::take(name));
                }
            }
            Type::List(inner) | Type::Optional(inner) | Type::Stream(inner) => {
                inner.resolve_references(aliases, enums)
            }
            Type::Map(key, value) => {
                key.resolve_references(aliases, enums);
                value.resolve_references(aliases, enums);
            }
            Type::Void | Type::Primitive(_) | Type::Alias(_) | Type::Enum(_) => {}
        }
    }
}

/// Wire form of a type: either a compact expression (`[string]`, `stream Event`) or a
/// tagged node (`{kind: list, type: string}`).
#[derive(Deserialize)]
#[serde(untagged)]
enum TypeRepr {
    Expr(String),
    Node(TypeNode),
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TypeNode {
    Void,
    Primitive {
        name: PrimitiveName,
    },
    Alias {
        name: String,
    },
    #[serde(alias = "named")]
    Type {
        name: String,
    },
    List {
        #[serde(rename = "type")]
        item: Box<Type>,
    },
    Map {
        #[serde(rename = "keyType")]
        key: Box<Type>,
        #[serde(rename = "valueType")]
        value: Box<Type>,
    },
    Optional {
        #[serde(rename = "type")]
        inner: Box<Type>,
    },
    Stream {
        #[serde(rename = "type")]
        inner: Box<Type>,
    },
    Enum {
        name: String,
    },
}

impl TryFrom<TypeRepr> for Type {
    type Error = ModelError;

    fn try_from(repr: TypeRepr) -> Result<Self, Self::Error> {
        let node = match repr {
            TypeRepr::Expr(expr) => return parse_type_expr(&expr),
            TypeRepr::Node(node) => node,
        };
        Ok(match node {
            TypeNode::Void => Type::Void,
            TypeNode::Primitive { name } => Type::Primitive(name),
            TypeNode::Alias { name } => Type::Alias(name),
            TypeNode::Type { name } => Type::Named(name),
            TypeNode::List { item } => Type::List(item),
            TypeNode::Map { key, value } => Type::Map(key, value),
            TypeNode::Optional { inner } => Type::Optional(inner),
            TypeNode::Stream { inner } => Type::Stream(inner),
            TypeNode::Enum { name } => Type::Enum(name),
        })
    }
}

fn void_type() -> Type {
    Type::Void
}

/// Annotation argument; `name` is absent for positional arguments.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub name: Option<String>,
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Annotation {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(rename = "type", default = "void_type")]
    pub ty: Type,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Operation {
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(default)]
    pub operations: Vec<Operation>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Interface {
    #[must_use]
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }

    /// Dependency type names declared by the first argument of the `uses` annotation.
    ///
    /// Non-string entries are ignored.
    #[must_use]
    pub fn dependencies(&self) -> Vec<String> {
        self.annotation("uses")
            .and_then(|a| a.arguments.first())
            .and_then(|arg| arg.value.as_array())
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Root scope of a model: interfaces keyed by name in declaration order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawNamespace")]
pub struct Namespace {
    pub name: String,
    /// Names declared as aliases; named references to them become [`Type::Alias`].
    pub aliases: Vec<String>,
    /// Names declared as enums; named references to them become [`Type::Enum`].
    pub enums: Vec<String>,
    pub interfaces: IndexMap<String, Interface>,
}

impl Namespace {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            enums: Vec::new(),
            interfaces: IndexMap::new(),
        }
    }

    /// Add an interface, keyed by its name. A later interface with the same name replaces
    /// the earlier one in place.
    #[must_use]
    pub fn with_interface(mut self, iface: Interface) -> Self {
        self.interfaces.insert(iface.name.clone(), iface);
        self
    }
}

#[derive(Deserialize)]
struct RawNamespace {
    #[serde(default)]
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    enums: Vec<String>,
    #[serde(default)]
    interfaces: Vec<Interface>,
}

impl From<RawNamespace> for Namespace {
    fn from(raw: RawNamespace) -> Self {
        let mut ns = Namespace {
            name: raw.name,
            aliases: raw.aliases,
            enums: raw.enums,
            interfaces: IndexMap::new(),
        };
        for mut iface in raw.interfaces {
            for op in iface.operations.iter_mut() {
                op.ty.resolve_references(&ns.aliases, &ns.enums);
                for param in op.parameters.iter_mut() {
                    param.ty.resolve_references(&ns.aliases, &ns.enums);
                }
            }
            ns.interfaces.insert(iface.name.clone(), iface);
        }
        ns
    }
}
