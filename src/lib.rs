//! # protoroute
//!
//! **protoroute** turns gRPC service definitions annotated with
//! `google.api.http` rules into HTTP routes and per-field binding plans.
//!
//! ## Overview
//!
//! A method annotated with an HTTP rule can be served as a REST endpoint. To
//! generate that endpoint two things must be known: the path the router
//! should match, and which part of the request (a header, a path segment,
//! the query string or the body) supplies each field of the input message.
//! protoroute computes both, and rejects annotations whose bindings
//! contradict the path template.
//!
//! ## Architecture
//!
//! - **[`template`]** - Compiles path templates into router paths (`:name`, `*name`)
//! - **[`binding`]** - Resolves the effective binding location of a field
//! - **[`plan`]** - Partitions input fields into header, URI, query and body sets
//! - **[`linter`]** - Collects every annotation problem in a descriptor set
//! - **[`descriptor`]** - Descriptor model and YAML/JSON loading
//! - **[`config`]** - Generator settings from file and environment
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `protoroute-gen` command line
//!
//! ### Planning Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(protoroute-gen)
//!     participant Load as descriptor::load_descriptor
//!     participant Planner as plan::Planner
//!     participant Tpl as template::compile
//!     participant Uri as plan::uri_fields
//!     participant Query as plan::query_fields
//!
//!     CLI->>Load: load_descriptor("api.yaml")
//!     Load-->>CLI: DescriptorSet
//!     CLI->>Planner: plan_set(&set)
//!     loop every http binding
//!         Planner->>Tpl: compile(template)
//!         Tpl-->>Planner: RouterPath
//!         Planner->>Uri: uri_fields(ctx, router_path)
//!         Uri-->>Planner: Vec<UriField> or BindingMismatch
//!         Planner->>Query: query_fields(ctx, method, uri)
//!         Query-->>Planner: query + body fields or UnboundField
//!     end
//!     Planner-->>CLI: Vec<FileOutcome>
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use protoroute::template::compile;
//!
//! let route = compile("/v1/{parent=shelves/*}/books/{book=**}").unwrap();
//! assert_eq!(route.as_str(), "/v1/shelves/:parent/books/*book");
//! ```
//!
//! Planning a whole descriptor:
//!
//! ```rust,ignore
//! use protoroute::{load_descriptor, Planner};
//!
//! let set = load_descriptor(Path::new("api.yaml"))?;
//! for outcome in Planner::default().plan_set(&set) {
//!     match outcome.result {
//!         Ok(plan) => println!("{}: {} routes", outcome.path.display(), plan.routes.len()),
//!         Err(e) => eprintln!("{}: {}", outcome.path.display(), e),
//!     }
//! }
//! ```
//!
//! ## Configuration
//!
//! | Variable                       | Default                    |
//! |--------------------------------|----------------------------|
//! | `PROTOROUTE_NO_BODY_METHODS`   | `GET,HEAD,DELETE,OPTIONS`  |
//! | `PROTOROUTE_LOG_LEVEL`         | `warn`                     |
//! | `PROTOROUTE_LOG_FORMAT`        | `pretty` (or `json`)       |
//! | `PROTOROUTE_LOG_TARGET_FILTER` | unset                      |
//! | `PROTOROUTE_LOG_INCLUDE_LOCATION` | `false`              |

pub mod binding;
pub mod cli;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod linter;
pub mod logging;
pub mod plan;
pub mod template;

pub use binding::{effective_location, BindingLocation};
pub use config::{GeneratorConfig, NoBodyMethods};
pub use descriptor::{load_descriptor, DescriptorSet};
pub use error::{BindingError, DescriptorError, PlanError};
pub use plan::{FileOutcome, MethodBindingPlan, Planner, RoutePlan};
pub use template::{compile, RouterPath};
