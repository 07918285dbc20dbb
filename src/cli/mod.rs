//! # CLI Module
//!
//! Command-line interface for the `iotagen` scaffold generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate the scaffold source file for a model:
//!
//! ```bash
//! iotagen generate --model apex.yaml --config iotagen.yaml --output service.go
//! ```
//!
//! Options:
//! - `--model <FILE>` - Parsed interface model (YAML or JSON, required)
//! - `--config <FILE>` - Generator config (auto-detected as `iotagen.yaml` next to the model)
//! - `--output <FILE>` - Output file; printed to stdout when omitted
//! - `--package <NAME>` - Override the configured package name
//! - `--name <IFACE>` / `--type <ROLE>` - Add interfaces by name or role annotation
//! - `--force` - Overwrite an existing output file
//! - `--dry-run` - Print what would be written
//! - `--fmt` - Run `gofmt -w` on the written file
//!
//! ### `inspect`
//!
//! Show which interfaces are selected, which operations get stubs, and the computed
//! imports:
//!
//! ```bash
//! iotagen inspect --model apex.yaml --type service
//! ```

mod commands;


pub use commands::{execute, run_cli, Cli, Commands, SelectionArgs};
