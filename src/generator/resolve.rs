use crate::config::Import;
use crate::context::Context;
use crate::model::{PrimitiveName, Type};

use super::imports::ImportSet;

/// Import path of the single-value async wrapper
pub const MONO_IMPORT: &str = "github.com/nanobus/iota/go/rx/mono";
/// Import path of the stream wrapper
pub const FLUX_IMPORT: &str = "github.com/nanobus/iota/go/rx/flux";

pub(crate) fn mono_import() -> Import {
    Import::new("mono.Mono", MONO_IMPORT)
}

pub(crate) fn flux_import() -> Import {
    Import::new("flux.Flux", FLUX_IMPORT)
}

pub(crate) fn time_import() -> Import {
    Import::new("time.Time", "time")
}

/// Register every import required by one occurrence of `ty`.
///
/// Names missing from the alias table are assumed to be declared in the generated package
/// and register nothing.
pub fn resolve(ctx: &Context<'_>, ty: &Type, imports: &mut ImportSet) {
    let aliases = &ctx.config.aliases;
    match ty {
        Type::Void | Type::Enum(_) => {}
        Type::Alias(name) => imports.add(name, aliases.get(name)),
        Type::Primitive(PrimitiveName::DateTime) => imports.add("Time", Some(&time_import())),
        Type::Primitive(_) => {}
        Type::Named(name) => match aliases.get(name) {
            None if name == "datetime" => imports.add("Time", Some(&time_import())),
            found => imports.add(name, found),
        },
        Type::List(item) => resolve(ctx, item, imports),
        Type::Map(key, value) => {
            resolve(ctx, key, imports);
            resolve(ctx, value, imports);
        }
        Type::Optional(inner) => resolve(ctx, inner, imports),
        Type::Stream(inner) => {
            imports.add("flux", Some(&flux_import()));
            resolve(ctx, inner, imports);
        }
    }
}
