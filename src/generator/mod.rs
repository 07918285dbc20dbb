//! # Generator Module
//!
//! Turns an interface definition [`Namespace`](crate::model::Namespace) into a Go source
//! file of service scaffolding: one `<Name>Impl` struct per selected interface, a
//! `New<Name>` constructor wiring its dependencies, and a stub method for every operation
//! without a hand-written implementation.
//!
//! ## Pipeline
//!
//! ```text
//! Namespace → role filter → import aggregation → scaffold emission → source text
//! ```
//!
//! 1. **Role filter** ([`is_in_scope`]) selects interfaces by role annotation or name.
//! 2. **Type resolution** ([`resolve`]) maps each type occurrence to the imports it needs.
//! 3. **Import aggregation** ([`collect_imports`]) deduplicates by symbol and splits the
//!    paths into standard and third-party groups, each sorted.
//! 4. **Scaffold emission** ([`emit_scaffold`]) renders the Askama templates under
//!    `templates/`.
//! 5. **Orchestration** ([`generate_namespace`]) assembles package header, import block and
//!    scaffold sections.
//!
//! Both import aggregation and emission consult the same role filter, so the set of
//! imported symbols always matches the set of emitted interfaces.
//!
//! ## Generated Shape
//!
//! ```go
//! package myapp
//!
//! import (
//!     "context"
//!     "errors"
//!
//!     "github.com/nanobus/iota/go/rx/mono"
//! )
//!
//! type GreeterImpl struct {
//!     repository Repository
//! }
//!
//! func NewGreeter(repository Repository) *GreeterImpl {
//!     return &GreeterImpl{
//!         repository: repository,
//!     }
//! }
//!
//! func (g *GreeterImpl) Greet(ctx context.Context, name string) mono.Mono[string] {
//!     // TODO: Provide implementation.
//!     return mono.Error[string](errors.New("not_implemented"))
//! }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use iotagen::config::GeneratorConfig;
//! use iotagen::generator::generate;
//! use iotagen::model::load_model;
//!
//! let ns = load_model(Path::new("apex.yaml"))?;
//! let config = GeneratorConfig { types: vec!["service".into()], ..Default::default() };
//! let source = generate(&config, &ns)?;
//! ```

mod format;
mod go;
mod imports;
mod inspect;
mod namespace;
mod resolve;
mod role;
mod scaffold;
mod templates;
mod write;

pub use format::format_go_file;
pub use go::*;
pub use imports::*;
pub use inspect::*;
pub use namespace::*;
pub use resolve::{resolve, FLUX_IMPORT, MONO_IMPORT};
pub use role::*;
pub use scaffold::*;
pub use templates::*;
pub use write::*;
