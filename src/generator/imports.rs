use indexmap::IndexMap;
use std::collections::BTreeSet;

use crate::config::Import;
use crate::context::Context;

use super::resolve::{mono_import, resolve};
use super::role::is_in_scope;

/// Imports accumulated during one namespace pass, keyed by symbol name.
///
/// Records whose path contains a `.` (a domain qualifier) are third-party, the rest are
/// standard library. A symbol name is registered at most once: the first registration
/// wins and later ones for the same name are ignored, whatever their path.
#[derive(Debug, Default, Clone)]
pub struct ImportSet {
    standard: IndexMap<String, Import>,
    third_party: IndexMap<String, Import>,
}

impl ImportSet {
    /// Register `import` under `name`. Missing records and records without an import path
    /// (absent or empty) are ignored.
    pub fn add(&mut self, name: &str, import: Option<&Import>) {
        let Some(import) = import else {
            return;
        };
        let Some(path) = import.import.as_deref().filter(|p| !p.is_empty()) else {
            return;
        };
        if self.contains(name) {
            if self.get(name).and_then(|i| i.import.as_deref()) != Some(path) {
                tracing::debug!(symbol = name, ignored = path, "conflicting import ignored");
            }
            return;
        }
        let group = if path.contains('.') {
            &mut self.third_party
        } else {
            &mut self.standard
        };
        group.insert(name.to_string(), import.clone());
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.standard.contains_key(name) || self.third_party.contains_key(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Import> {
        self.standard.get(name).or_else(|| self.third_party.get(name))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.standard.is_empty() && self.third_party.is_empty()
    }

    /// Partition into sorted, de-duplicated import path groups.
    #[must_use]
    pub fn into_groups(self) -> ImportGroups {
        fn paths(map: IndexMap<String, Import>) -> Vec<String> {
            map.into_values()
                .filter_map(|i| i.import)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        }
        ImportGroups {
            standard: paths(self.standard),
            third_party: paths(self.third_party),
        }
    }
}

/// Sorted import paths split by grouping convention
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportGroups {
    pub standard: Vec<String>,
    pub third_party: Vec<String>,
}

impl ImportGroups {
    /// Render the groups as lines of an import block. A blank line precedes the
    /// third-party group when it is non-empty.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for lib in &self.standard {
            out.push_str(&format!("\t\"{lib}\"\n"));
        }
        if !self.third_party.is_empty() {
            out.push('\n');
        }
        for lib in &self.third_party {
            out.push_str(&format!("\t\"{lib}\"\n"));
        }
        out
    }
}

/// Register the imports required by every in-scope operation of the namespace.
///
/// Non-streaming operations return the single-value wrapper; streaming ones register the
/// stream wrapper while resolving their return type.
#[must_use]
pub fn collect_import_set(ctx: &Context<'_>) -> ImportSet {
    let mut imports = ImportSet::default();
    for iface_ctx in ctx.interfaces().filter(is_in_scope) {
        for op_ctx in iface_ctx.operations() {
            let Some(operation) = op_ctx.operation else {
                continue;
            };
            if !operation.ty.is_stream() {
                imports.add("mono", Some(&mono_import()));
            }
            resolve(&op_ctx, &operation.ty, &mut imports);
            for param in &operation.parameters {
                let param_ctx = op_ctx.with_parameter(param);
                resolve(&param_ctx, &param.ty, &mut imports);
            }
        }
    }
    imports
}

/// Collect and group the namespace's computed imports.
#[must_use]
pub fn collect_imports(ctx: &Context<'_>) -> ImportGroups {
    let groups = collect_import_set(ctx).into_groups();
    tracing::debug!(
        standard = groups.standard.len(),
        third_party = groups.third_party.len(),
        "collected imports"
    );
    groups
}
