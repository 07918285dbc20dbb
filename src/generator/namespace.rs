use crate::config::GeneratorConfig;
use crate::context::Context;
use crate::model::Namespace;

use super::imports::collect_imports;
use super::role::{has_interfaces, needs_context};
use super::scaffold::emit_scaffold;

/// Render the import block for a namespace with at least one in-scope interface.
///
/// Order: `context` (when any stub is emitted), `errors`, the computed standard and
/// third-party groups, then the logger import unless a computed group already holds it.
#[must_use]
pub fn import_block(ctx: &Context<'_>) -> String {
    let mut out = String::from("import (\n");
    if needs_context(ctx) {
        out.push_str("\t\"context\"\n");
    }
    out.push_str("\t\"errors\"\n");
    let groups = collect_imports(ctx);
    out.push_str(&groups.render());
    if let Some(logger) = &ctx.config.logger {
        let computed = groups
            .standard
            .iter()
            .chain(&groups.third_party)
            .any(|p| *p == logger.import);
        if computed {
            tracing::debug!(import = %logger.import, "logger import already in computed groups");
        } else {
            out.push_str(&format!("\t\"{}\"\n", logger.import));
        }
    }
    out.push(')');
    out
}

/// Generate the scaffold source file for a namespace.
///
/// Output is deterministic for a given model: imports are sorted, interfaces and
/// operations follow model order.
pub fn generate_namespace(ctx: &Context<'_>) -> anyhow::Result<String> {
    // scaffolds are user-owned once generated
    let scaffold_config;
    let ctx = if ctx.config.do_not_edit {
        tracing::debug!("doNotEdit ignored for scaffold output");
        scaffold_config = GeneratorConfig {
            do_not_edit: false,
            ..ctx.config.clone()
        };
        ctx.with_config(&scaffold_config)
    } else {
        *ctx
    };

    let mut sections = vec![format!("package {}", ctx.config.package_name())];
    if has_interfaces(&ctx) {
        sections.push(import_block(&ctx));
    }
    sections.extend(emit_scaffold(&ctx)?);

    let mut out = sections.join("\n\n");
    out.push('\n');
    Ok(out)
}

/// Generate the scaffold for `namespace` with `config`.
pub fn generate(config: &GeneratorConfig, namespace: &Namespace) -> anyhow::Result<String> {
    let ctx = Context::new(config, namespace);
    tracing::info!(
        namespace = %namespace.name,
        package = ctx.config.package_name(),
        "generating scaffold"
    );
    generate_namespace(&ctx)
}
