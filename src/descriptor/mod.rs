//! # Descriptor Module
//!
//! Read-only view of the proto metadata the planner consumes: files, services,
//! methods with their `google.api.http` rules, and input messages with their
//! binding annotations.
//!
//! Descriptors are plain serde types so they can be produced by a protoc
//! plugin front-end or loaded from a YAML/JSON document with
//! [`load_descriptor`]:
//!
//! ```yaml
//! files:
//!   - path: library/v1/library.proto
//!     services:
//!       - name: LibraryService
//!         methods:
//!           - name: GetBook
//!             http:
//!               get: /v1/{name=shelves/*/books/*}
//!             input:
//!               name: GetBookRequest
//!               default_location: query
//!               fields:
//!                 - name: name
//!                   location: uri
//! ```

mod load;
mod types;

pub use load::*;
pub use types::*;
