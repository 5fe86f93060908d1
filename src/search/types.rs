use crate::models::PropertyType;
use serde::{Deserialize, Serialize};

/// Search parameters for one filtering pass over the dataset
///
/// Every field is optional; an unset field never excludes a listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Listing category to match; `None` matches any type
    pub property_type: Option<PropertyType>,
    /// Minimum price (£)
    pub min_price: Option<i64>,
    /// Maximum price (£)
    pub max_price: Option<i64>,
    /// Minimum number of bedrooms
    pub min_bedrooms: Option<u32>,
    /// Maximum number of bedrooms
    pub max_bedrooms: Option<u32>,
    /// Case-insensitive postcode fragment matched against the location line
    pub postcode: Option<String>,
}
