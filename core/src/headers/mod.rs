// # Headers module layout

//! headers/mod.rs
//! Structured file headers: parse, validate, render.
//!
//! Notes:
//! - A header is the contiguous block of marked comment lines (or a front-matter
//!   block) at the top of a source file.
//! - Parsing is permissive: unknown keys are dropped so headers can carry extra
//!   annotations without breaking older tooling.
//! - Validation comes in two strengths: `validate` (message list) and
//!   `FileMetadata::from_record` (typed, every violation at once).

pub mod types;
pub mod encode;
pub mod decode;
pub mod validate;
pub mod schema;

pub use types::*;
pub use encode::*;
pub use decode::*;
pub use validate::*;
pub use schema::*;
