//! # Template Module
//!
//! Compiles `google.api.http` path templates such as
//! `/v1/{name=shelves/*}/books/{book_id}` into router paths
//! (`/v1/shelves/:name/books/:book_id`).
//!
//! ## Architecture
//!
//! Compilation runs in three steps:
//!
//! 1. **Tokenize** - one linear scan splits the template into typed
//!    [`Segment`]s: literal text, captures, prefixed captures, fixed literals
//!    and unrecognized fragments.
//! 2. **Render** - each segment renders independently; captures register
//!    themselves in a [`ParamTable`].
//! 3. **Normalize** - separator runs collapse, a leading `/` is forced and a
//!    trailing `/` is dropped.
//!
//! Parameter names are sanitized with [`sanitize_param_name`], so nested
//! field paths like `book.id` route as `:book_id`.
//!
//! The reverse direction, [`ParamTable::from_router_path`], recovers the
//! parameter table from a compiled path string. Binding validation relies on
//! that reconstruction only.

mod core;
mod params;
mod segment;
#[cfg(test)]
mod tests;

pub use core::{compile, normalize_path, RouterPath};
pub use params::{sanitize_param_name, ParamTable};
pub use segment::{tokenize, Segment, Wildcard};
