use crate::context::Context;

use super::go::{has_existing_implementation, is_one_of_type};

/// Whether the interface attached to `ctx` is selected for generation.
///
/// An interface is in scope when it carries one of the configured role annotations
/// (`types`) or its name is listed in `names`. Every component that needs the in-scope
/// set goes through this predicate. Without an attached interface nothing is in scope.
#[must_use]
pub fn is_in_scope(ctx: &Context<'_>) -> bool {
    let Some(iface) = ctx.interface else {
        return false;
    };
    is_one_of_type(ctx, &ctx.config.types) || ctx.config.names.iter().any(|n| *n == iface.name)
}

/// Whether any interface in the namespace is in scope.
#[must_use]
pub fn has_interfaces(ctx: &Context<'_>) -> bool {
    ctx.interfaces().any(|c| is_in_scope(&c))
}

/// Whether a stub will be emitted for the operation attached to `ctx`.
#[must_use]
pub fn needs_stub(ctx: &Context<'_>) -> bool {
    is_in_scope(ctx) && ctx.operation.is_some_and(|op| !has_existing_implementation(op))
}

/// Whether the generated file references `context.Context`, i.e. at least one stub is
/// emitted.
#[must_use]
pub fn needs_context(ctx: &Context<'_>) -> bool {
    ctx.interfaces()
        .flat_map(|c| c.operations())
        .any(|c| needs_stub(&c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneratorConfig;
    use crate::model::{Annotation, Interface, Namespace, Operation, Type};

    fn iface(name: &str, roles: &[&str]) -> Interface {
        Interface {
            name: name.to_string(),
            operations: vec![],
            annotations: roles
                .iter()
                .map(|r| Annotation {
                    name: r.to_string(),
                    arguments: vec![],
                })
                .collect(),
        }
    }

    fn op(name: &str, nocode: bool) -> Operation {
        Operation {
            name: name.to_string(),
            parameters: vec![],
            ty: Type::Void,
            annotations: if nocode {
                vec![Annotation {
                    name: "nocode".to_string(),
                    arguments: vec![],
                }]
            } else {
                vec![]
            },
        }
    }

    #[test]
    fn test_role_type_match() {
        let config = GeneratorConfig {
            types: vec!["service".to_string()],
            ..Default::default()
        };
        let ns = Namespace::new("ns")
            .with_interface(iface("Greeter", &["service"]))
            .with_interface(iface("Store", &["provider"]));
        let ctx = Context::new(&config, &ns);
        let selected: Vec<bool> = ctx.interfaces().map(|c| is_in_scope(&c)).collect();
        assert_eq!(selected, vec![true, false]);
        assert!(has_interfaces(&ctx));
    }

    #[test]
    fn test_role_name_match() {
        let config = GeneratorConfig {
            names: vec!["Store".to_string()],
            ..Default::default()
        };
        let ns = Namespace::new("ns")
            .with_interface(iface("Greeter", &["service"]))
            .with_interface(iface("Store", &[]));
        let ctx = Context::new(&config, &ns);
        let selected: Vec<bool> = ctx.interfaces().map(|c| is_in_scope(&c)).collect();
        assert_eq!(selected, vec![false, true]);
    }

    #[test]
    fn test_nothing_configured_selects_nothing() {
        let config = GeneratorConfig::default();
        let ns = Namespace::new("ns").with_interface(iface("Greeter", &["service"]));
        let ctx = Context::new(&config, &ns);
        assert!(!has_interfaces(&ctx));
        // no interface attached
        assert!(!is_in_scope(&ctx));
    }

    #[test]
    fn test_needs_context_ignores_implemented_operations() {
        let config = GeneratorConfig {
            types: vec!["service".to_string()],
            ..Default::default()
        };
        let mut greeter = iface("Greeter", &["service"]);
        greeter.operations.push(op("greet", true));
        let ns = Namespace::new("ns").with_interface(greeter.clone());
        assert!(!needs_context(&Context::new(&config, &ns)));

        greeter.operations.push(op("wave", false));
        let ns = Namespace::new("ns").with_interface(greeter);
        assert!(needs_context(&Context::new(&config, &ns)));
    }
}
