use super::types::{MethodContext, UriField};
use crate::binding::{resolves_to, BindingLocation};
use crate::error::BindingError;
use crate::template::{sanitize_param_name, ParamTable};
use std::collections::HashMap;
use tracing::debug;

/// Input fields bound to path parameters of `route`, in declared field order.
///
/// The parameter table is re-derived from the router path string. Every field
/// whose sanitized name is a route parameter must be bound to the URI, and
/// each parameter is claimed by at most one field. Route parameters without a
/// matching field are not reported here.
///
/// # Errors
///
/// [`BindingError::BindingMismatch`] when a route parameter's field resolves
/// to another location; [`BindingError::DuplicateUriField`] when two fields
/// (e.g. `a.b` and `a_b`) sanitize to the same parameter.
pub fn uri_fields(ctx: &MethodContext<'_>, route: &str) -> Result<Vec<UriField>, BindingError> {
    let params = ParamTable::from_router_path(route);
    let input = &ctx.method.input;
    let mut fields = Vec::with_capacity(params.len());
    let mut claimed: HashMap<String, &str> = HashMap::with_capacity(params.len());

    for field in &input.fields {
        let name = sanitize_param_name(&field.name);
        let Some(wildcard) = params.wildcard(&name) else {
            continue;
        };
        if !resolves_to(field, input, BindingLocation::Uri) {
            return Err(BindingError::BindingMismatch {
                service: ctx.service.to_string(),
                method: ctx.method.name.clone(),
                field: field.name.clone(),
                route: route.to_string(),
                file: ctx.file.to_path_buf(),
                message: input.name.clone(),
            });
        }
        if let Some(first) = claimed.get(&name) {
            return Err(BindingError::DuplicateUriField {
                service: ctx.service.to_string(),
                method: ctx.method.name.clone(),
                param: name,
                first: (*first).to_string(),
                field: field.name.clone(),
                route: route.to_string(),
                file: ctx.file.to_path_buf(),
                message: input.name.clone(),
            });
        }
        claimed.insert(name.clone(), field.name.as_str());
        debug!(
            method = %ctx.method.name,
            field = %field.name,
            param = %name,
            wildcard,
            "Field bound to route parameter"
        );
        fields.push(UriField {
            name,
            field: field.name.clone(),
            wildcard,
        });
    }

    Ok(fields)
}
