use crate::models::Property;
use crate::search::types::SearchCriteria;

/// Check one listing against every criterion
///
/// All four predicates are conjunctive. Unset bounds coalesce to
/// 0 / unbounded, and an empty postcode matches everything.
pub fn matches(property: &Property, criteria: &SearchCriteria) -> bool {
    let type_ok = criteria
        .property_type
        .map(|t| t == property.property_type)
        .unwrap_or(true);

    let price_ok = property.price >= criteria.min_price.unwrap_or(0)
        && criteria
            .max_price
            .map(|max| property.price <= max)
            .unwrap_or(true);

    let bedrooms_ok = property.bedrooms >= criteria.min_bedrooms.unwrap_or(0)
        && criteria
            .max_bedrooms
            .map(|max| property.bedrooms <= max)
            .unwrap_or(true);

    let postcode_ok = match criteria.postcode.as_deref() {
        Some(fragment) if !fragment.is_empty() => property
            .location
            .to_lowercase()
            .contains(&fragment.to_lowercase()),
        _ => true,
    };

    type_ok && price_ok && bedrooms_ok && postcode_ok
}

/// Filter the collection, keeping dataset order
pub fn filter<'a>(properties: &'a [Property], criteria: &SearchCriteria) -> Vec<&'a Property> {
    properties.iter().filter(|p| matches(p, criteria)).collect()
}
