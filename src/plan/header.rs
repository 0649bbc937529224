use super::types::HeaderField;
use crate::binding::{resolves_to, BindingLocation};
use crate::descriptor::MessageDescriptor;

/// Input fields bound to a header, in declared order.
///
/// Headers are independent of the route, so nothing is validated here.
#[must_use]
pub fn header_fields(input: &MessageDescriptor) -> Vec<HeaderField> {
    input
        .fields
        .iter()
        .filter(|field| resolves_to(field, input, BindingLocation::Header))
        .map(|field| HeaderField {
            name: field.name.clone(),
        })
        .collect()
}
