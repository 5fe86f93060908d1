use crate::models::Property;
use anyhow::{bail, Result};
use std::collections::HashSet;

/// Immutable property collection for one viewer session
///
/// Ids are unique across the collection; construction rejects duplicates
/// so every later lookup can trust the first match.
pub struct Dataset {
    properties: Vec<Property>,
}

impl Dataset {
    pub fn new(properties: Vec<Property>) -> Result<Self> {
        let mut seen = HashSet::new();
        for property in &properties {
            if !seen.insert(property.id.as_str()) {
                bail!("Duplicate property id in dataset: {}", property.id);
            }
        }
        Ok(Self { properties })
    }

    /// Look a listing up by id, in dataset order
    pub fn find_by_id(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;

    fn property(id: &str) -> Property {
        Property {
            id: id.to_string(),
            property_type: PropertyType::House,
            price: 250_000,
            bedrooms: 3,
            location: "Petts Wood Road, Orpington BR5 1PJ".to_string(),
            picture: "images/main.jpg".to_string(),
            images: vec![],
            floor_plan: None,
            long_description: "A house.".to_string(),
            latitude: None,
            longitude: None,
            added: None,
        }
    }

    #[test]
    fn find_by_id_returns_the_matching_listing() {
        let dataset = Dataset::new(vec![property("1"), property("2")]).unwrap();
        assert_eq!(dataset.find_by_id("2").unwrap().id, "2");
        assert!(dataset.find_by_id("3").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Dataset::new(vec![property("1"), property("1")]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_dataset_is_valid() {
        let dataset = Dataset::new(vec![]).unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
    }
}
