//! # Plan Module
//!
//! Decides, for every input field of a method, which part of the HTTP request
//! supplies it, and checks that decision against the compiled route.
//!
//! ## Flow
//!
//! For each HTTP binding of a method:
//!
//! 1. The path template is compiled to a router path ([`crate::template`]).
//! 2. [`header_fields`] selects header-bound fields.
//! 3. [`uri_fields`] re-derives the route's parameters from the router path
//!    and requires each matching field to be bound to the URI.
//! 4. [`query_fields`] takes the remaining fields: query-bound ones become
//!    query fields; anything else is an error on a no-body method, or an
//!    implicit body field otherwise.
//!
//! The result is a [`RoutePlan`] holding a [`MethodBindingPlan`].
//!
//! ## Failure model
//!
//! A validation failure aborts the method and the file that contains it.
//! [`Planner::plan_set`] plans files independently, so one bad file never
//! hides results for the others.

mod build;
mod header;
mod query;
mod types;
mod uri;

pub use build::{FileOutcome, Planner};
pub use header::header_fields;
pub use query::{query_fields, QueryExtraction};
pub use types::*;
pub use uri::uri_fields;
