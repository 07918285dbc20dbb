//! Traversal context.
//!
//! A [`Context`] is an immutable, `Copy` view of where a traversal currently stands.
//! Entering a narrower scope produces a new value with one field replaced; the outer
//! context is never mutated, so independent traversals over the same namespace see the
//! same inputs.

use crate::config::GeneratorConfig;
use crate::model::{Interface, Namespace, Operation, Parameter};

#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub config: &'a GeneratorConfig,
    pub namespace: &'a Namespace,
    pub interface: Option<&'a Interface>,
    pub operation: Option<&'a Operation>,
    pub parameter: Option<&'a Parameter>,
}

impl<'a> Context<'a> {
    #[must_use]
    pub fn new(config: &'a GeneratorConfig, namespace: &'a Namespace) -> Self {
        Self {
            config,
            namespace,
            interface: None,
            operation: None,
            parameter: None,
        }
    }

    /// Enter an interface; operation and parameter scopes are cleared.
    #[must_use]
    pub fn with_interface(self, interface: &'a Interface) -> Self {
        Self {
            interface: Some(interface),
            operation: None,
            parameter: None,
            ..self
        }
    }

    #[must_use]
    pub fn with_operation(self, operation: &'a Operation) -> Self {
        Self {
            operation: Some(operation),
            parameter: None,
            ..self
        }
    }

    #[must_use]
    pub fn with_parameter(self, parameter: &'a Parameter) -> Self {
        Self {
            parameter: Some(parameter),
            ..self
        }
    }

    /// Replace the configuration, keeping the current scope.
    #[must_use]
    pub fn with_config(self, config: &'a GeneratorConfig) -> Self {
        Self { config, ..self }
    }

    /// Contexts for every interface in declaration order.
    pub fn interfaces(self) -> impl Iterator<Item = Context<'a>> {
        self.namespace
            .interfaces
            .values()
            .map(move |iface| self.with_interface(iface))
    }

    /// Contexts for every operation of the current interface.
    pub fn operations(self) -> impl Iterator<Item = Context<'a>> {
        self.interface
            .into_iter()
            .flat_map(|iface| iface.operations.iter())
            .map(move |op| self.with_operation(op))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PrimitiveName, Type};

    #[test]
    fn test_scoping_does_not_touch_outer_context() {
        let config = GeneratorConfig::default();
        let op = Operation {
            name: "ping".to_string(),
            parameters: vec![Parameter {
                name: "n".to_string(),
                ty: Type::Primitive(PrimitiveName::I32),
            }],
            ty: Type::Void,
            annotations: vec![],
        };
        let ns = Namespace::new("ns").with_interface(Interface {
            name: "Pinger".to_string(),
            operations: vec![op],
            annotations: vec![],
        });
        let root = Context::new(&config, &ns);

        let iface_ctx = root.interfaces().next();
        assert!(root.interface.is_none());
        let iface_ctx = iface_ctx.map(|c| c.interface.map(|i| i.name.as_str()));
        assert_eq!(iface_ctx, Some(Some("Pinger")));

        let op_ctx: Vec<_> = root.interfaces().flat_map(|c| c.operations()).collect();
        assert_eq!(op_ctx.len(), 1);
        let param = &ns.interfaces[0].operations[0].parameters[0];
        let param_ctx = op_ctx[0].with_parameter(param);
        assert_eq!(param_ctx.parameter.map(|p| p.name.as_str()), Some("n"));
        assert!(op_ctx[0].parameter.is_none());

        // re-entering an interface clears narrower scopes
        let back = param_ctx.with_interface(&ns.interfaces[0]);
        assert!(back.operation.is_none());
        assert!(back.parameter.is_none());
    }
}
