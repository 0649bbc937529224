use super::types::{MethodContext, QueryField, UriField};
use crate::binding::{resolves_to, BindingLocation};
use crate::config::NoBodyMethods;
use crate::error::BindingError;
use http::Method;
use std::collections::HashSet;

/// Query fields and the leftover body fields of one method binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryExtraction {
    pub query_fields: Vec<QueryField>,
    pub body_fields: Vec<String>,
}

/// Classify the input fields not already taken by the route.
///
/// Fields present in `uri` are skipped even when annotated as query: once a
/// field is in the path, the path wins. Header fields are neither query nor
/// body; they are skipped too, so a header-bound field never raises
/// [`BindingError::UnboundField`]. This intentionally departs from the
/// original generator, which only accepted query and uri fields on no-body
/// methods; a header is a complete binding on its own.
///
/// # Errors
///
/// [`BindingError::UnboundField`] when `http_method` has no body and a field
/// is bound to none of header, uri or query.
pub fn query_fields(
    ctx: &MethodContext<'_>,
    http_method: &Method,
    uri: &[UriField],
    no_body: &NoBodyMethods,
) -> Result<QueryExtraction, BindingError> {
    let input = &ctx.method.input;
    let in_path: HashSet<&str> = uri.iter().map(|f| f.field.as_str()).collect();
    let mut extraction = QueryExtraction::default();

    for field in &input.fields {
        if in_path.contains(field.name.as_str()) {
            continue;
        }
        if resolves_to(field, input, BindingLocation::Query) {
            extraction.query_fields.push(QueryField {
                name: field.name.clone(),
            });
        } else if resolves_to(field, input, BindingLocation::Header) {
            continue;
        } else if no_body.contains(http_method) {
            return Err(BindingError::UnboundField {
                service: ctx.service.to_string(),
                method: ctx.method.name.clone(),
                field: field.name.clone(),
                file: ctx.file.to_path_buf(),
                message: input.name.clone(),
            });
        } else {
            extraction.body_fields.push(field.name.clone());
        }
    }

    Ok(extraction)
}
