use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a property listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PropertyType {
    House,
    Flat,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::House => write!(f, "House"),
            PropertyType::Flat => write!(f, "Flat"),
        }
    }
}

/// Core property data model
///
/// One listing record in the bundled dataset. Everything past `location`
/// is display-only and never consulted by the filter or favorites logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Asking price (£)
    pub price: i64,
    pub bedrooms: u32,
    /// Address line ending in the postcode, matched by postcode searches
    pub location: String,
    pub picture: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub floor_plan: Option<String>,
    pub long_description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Date the listing was published; shown on cards, never filtered on
    pub added: Option<NaiveDate>,
}
