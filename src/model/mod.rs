//! # Model Module
//!
//! Read-only interface definition graph consumed by the generator: a [`Namespace`] of
//! [`Interface`]s, their [`Operation`]s and typed [`Parameter`]s.
//!
//! The model is normally produced by an upstream IDL parser. [`load_model`] reads the
//! parsed form from YAML or JSON so the generator can run standalone.

mod expr;
mod load;
mod types;

pub use expr::{parse_type_expr, ModelError};
pub use load::*;
pub use types::*;
