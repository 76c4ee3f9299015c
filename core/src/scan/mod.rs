//! scan/mod.rs
//! Directory-level drivers over the header parser: validation scans, listing of
//! unannotated files, documentation pages and Markdown header conversion.
//!
//! Every driver walks the tree sequentially with the same discovery rules and
//! treats per-file failures as report entries, never as fatal errors.

pub mod types;
pub mod walker;
pub mod report;
pub mod runner;
pub mod unannotated;
pub mod docs;
pub mod convert;

pub use types::*;
pub use walker::*;
pub use report::*;
pub use runner::*;
pub use unannotated::*;
pub use docs::*;
pub use convert::*;
