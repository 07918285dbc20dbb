use serde::Serialize;

use crate::context::Context;

use super::go::{has_existing_implementation, method_name};
use super::imports::{collect_imports, ImportGroups};
use super::role::is_in_scope;
use super::scaffold::service_fields;

/// What generation would do for one operation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OperationReport {
    pub name: String,
    pub method: String,
    /// Already implemented; no stub is generated
    pub implemented: bool,
}

/// What generation would do for one interface
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct InterfaceReport {
    pub name: String,
    pub in_scope: bool,
    /// Struct fields as `name type`
    pub fields: Vec<String>,
    pub operations: Vec<OperationReport>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NamespaceReport {
    pub namespace: String,
    pub package: String,
    pub interfaces: Vec<InterfaceReport>,
    pub standard_imports: Vec<String>,
    pub third_party_imports: Vec<String>,
}

/// Summarise scope decisions and computed imports without emitting code.
#[must_use]
pub fn inspect(ctx: &Context<'_>) -> NamespaceReport {
    let interfaces = ctx
        .interfaces()
        .filter_map(|iface_ctx| {
            let iface = iface_ctx.interface?;
            let in_scope = is_in_scope(&iface_ctx);
            Some(InterfaceReport {
                name: iface.name.clone(),
                in_scope,
                fields: if in_scope {
                    service_fields(&iface_ctx)
                        .into_iter()
                        .map(|f| format!("{} {}", f.name, f.ty))
                        .collect()
                } else {
                    Vec::new()
                },
                operations: iface
                    .operations
                    .iter()
                    .map(|op| OperationReport {
                        name: op.name.clone(),
                        method: method_name(op, &op.name),
                        implemented: has_existing_implementation(op),
                    })
                    .collect(),
            })
        })
        .collect();
    let ImportGroups {
        standard,
        third_party,
    } = collect_imports(ctx);
    NamespaceReport {
        namespace: ctx.namespace.name.clone(),
        package: ctx.config.package_name().to_string(),
        interfaces,
        standard_imports: standard,
        third_party_imports: third_party,
    }
}

impl NamespaceReport {
    /// Human-readable summary, one line per interface and operation.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = format!("namespace {} → package {}\n", self.namespace, self.package);
        for iface in &self.interfaces {
            let marker = if iface.in_scope { "✅" } else { "⏭️ " };
            out.push_str(&format!("{marker} {}\n", iface.name));
            for field in &iface.fields {
                out.push_str(&format!("    field {field}\n"));
            }
            for op in &iface.operations {
                let status = if op.implemented { "implemented" } else { "stub" };
                out.push_str(&format!("    {} ({status})\n", op.method));
            }
        }
        for lib in self.standard_imports.iter().chain(&self.third_party_imports) {
            out.push_str(&format!("import \"{lib}\"\n"));
        }
        out
    }
}
