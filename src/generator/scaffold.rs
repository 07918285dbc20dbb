use crate::context::Context;
use crate::model::{Operation, Type};

use super::go::{
    camel_case, expand_type, map_params, method_name, receiver, translate_alias, Translation,
};
use super::role::{is_in_scope, needs_stub};
use super::templates::{render_section, FieldDef, MethodStubTemplateData, ServiceImplTemplateData};

/// Field and parameter name of the injected logger
pub const LOGGER_FIELD: &str = "log";

/// Return type of a stub and the constructor of its failed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnShape {
    /// e.g. `mono.Mono[string]`, `flux.Flux[Event]`, `mono.Void`
    pub return_type: String,
    /// e.g. `mono.Error[string]`
    pub error_ctor: String,
}

/// Choose the async wrapper for an operation's declared type.
///
/// Void operations return `mono.Void`, streams return `flux.Flux` of the element type and
/// everything else returns `mono.Mono` of the expanded type.
#[must_use]
pub fn return_shape(ty: &Type, translate: Translation<'_>) -> ReturnShape {
    match ty {
        Type::Void => ReturnShape {
            return_type: "mono.Void".to_string(),
            error_ctor: "mono.Error[struct{}]".to_string(),
        },
        Type::Stream(inner) => {
            let expanded = expand_type(inner, translate);
            ReturnShape {
                return_type: format!("flux.Flux[{expanded}]"),
                error_ctor: format!("flux.Error[{expanded}]"),
            }
        }
        other => {
            let expanded = expand_type(other, translate);
            ReturnShape {
                return_type: format!("mono.Mono[{expanded}]"),
                error_ctor: format!("mono.Error[{expanded}]"),
            }
        }
    }
}

/// Fields of the state struct: the logger first when configured, then one per
/// dependency named by the interface's `uses` annotation.
#[must_use]
pub fn service_fields(ctx: &Context<'_>) -> Vec<FieldDef> {
    let mut fields = Vec::new();
    if let Some(logger) = &ctx.config.logger {
        fields.push(FieldDef::new(LOGGER_FIELD, logger.interface.as_str()));
    }
    if let Some(iface) = ctx.interface {
        for dep in iface.dependencies() {
            // a qualified dependency such as `events.Publisher` is named after its type
            let local = dep.rsplit('.').next().unwrap_or(dep.as_str());
            let name = camel_case(local);
            if ctx.config.logger.is_some() && name == LOGGER_FIELD {
                tracing::warn!(
                    interface = %iface.name,
                    dependency = %dep,
                    "dependency field name collides with the logger field"
                );
            }
            fields.push(FieldDef::new(name, dep.as_str()));
        }
    }
    fields
}

/// Emit the state struct and constructor for the interface attached to `ctx`.
///
/// Returns `None` when the interface is out of scope.
pub fn emit_service(ctx: &Context<'_>) -> anyhow::Result<Option<String>> {
    let Some(iface) = ctx.interface else {
        return Ok(None);
    };
    if !is_in_scope(ctx) {
        return Ok(None);
    }
    let fields = service_fields(ctx);
    let params = fields
        .iter()
        .map(|f| format!("{} {}", f.name, f.ty))
        .collect::<Vec<_>>()
        .join(", ");
    let data = ServiceImplTemplateData {
        name: iface.name.clone(),
        fields,
        params,
    };
    Ok(Some(render_section(&data)?))
}

/// Emit the stub method for the operation attached to `ctx`.
///
/// Returns `None` when the interface is out of scope or the operation is already
/// implemented.
pub fn emit_method(ctx: &Context<'_>) -> anyhow::Result<Option<String>> {
    let (Some(iface), Some(operation)) = (ctx.interface, ctx.operation) else {
        return Ok(None);
    };
    if !needs_stub(ctx) {
        tracing::debug!(
            interface = %iface.name,
            operation = %operation.name,
            "skipping operation"
        );
        return Ok(None);
    }
    let translate = translate_alias(ctx);
    let shape = return_shape(&operation.ty, translate);
    let data = MethodStubTemplateData {
        receiver: receiver(iface),
        struct_name: format!("{}Impl", iface.name),
        method: stub_name(operation),
        params: map_params(&operation.parameters, translate),
        return_type: shape.return_type,
        error_ctor: shape.error_ctor,
    };
    Ok(Some(render_section(&data)?))
}

fn stub_name(operation: &Operation) -> String {
    method_name(operation, &operation.name)
}

/// Emit struct, constructor and stubs for every in-scope interface, in model order.
pub fn emit_scaffold(ctx: &Context<'_>) -> anyhow::Result<Vec<String>> {
    let mut sections = Vec::new();
    for iface_ctx in ctx.interfaces() {
        if let Some(service) = emit_service(&iface_ctx)? {
            sections.push(service);
        }
        for op_ctx in iface_ctx.operations() {
            if let Some(method) = emit_method(&op_ctx)? {
                sections.push(method);
            }
        }
    }
    Ok(sections)
}
