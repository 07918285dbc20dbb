//! # iotagen
//!
//! **iotagen** generates Go service scaffolding from Iota interface definitions: for every
//! selected interface it emits a state struct holding the interface's dependencies, a
//! constructor, and a stub method per operation that fails with `not_implemented` until a
//! developer fills it in. The import block of the generated file is computed from the
//! types that actually occur in the emitted signatures.
//!
//! ## Architecture
//!
//! - **[`model`]** - Read-only interface definition graph and its YAML/JSON loader
//! - **[`config`]** - Generation settings: package, role selection, alias table, logger
//! - **[`context`]** - Immutable traversal context threaded through generation
//! - **[`generator`]** - Role filter, type resolver, import aggregator, scaffold emitter
//! - **[`cli`]** - The `iotagen` command line
//! - **[`logging`]** - tracing subscriber setup
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(iotagen)
//!     participant Model as model::load_model
//!     participant Gen as generator::generate
//!     participant Role as role filter
//!     participant Imports as import aggregator
//!     participant Scaffold as scaffold emitter
//!
//!     CLI->>Model: load_model("apex.yaml")
//!     Model-->>CLI: Namespace
//!     CLI->>Gen: generate(&config, &namespace)
//!     Gen->>Role: any interface in scope?
//!     Gen->>Imports: collect_imports(ctx)
//!     Imports->>Role: is_in_scope (per interface)
//!     Imports-->>Gen: standard + third-party groups
//!     Gen->>Scaffold: emit_scaffold(ctx)
//!     Scaffold->>Role: is_in_scope (per interface)
//!     Scaffold-->>Gen: struct, constructor, stubs
//!     Gen-->>CLI: Go source
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! iotagen generate --model apex.yaml --type service --output service.go
//! ```
//!
//! ## Reproducibility
//!
//! Imports are always sorted. Interfaces and operations are emitted in model order, so
//! byte-identical output across runs requires the model producer to keep its order
//! stable.

pub mod cli;
pub mod config;
pub mod context;
pub mod generator;
pub mod logging;
pub mod model;

pub use config::{GeneratorConfig, Import, LoggerConfig};
pub use context::Context;
pub use generator::generate;
pub use model::{load_model, Namespace};
