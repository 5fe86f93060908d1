use crate::dataset::Dataset;
use crate::favorites::manager::{AddOutcome, Favorites};
use crate::models::Property;
use crate::storage::KeyValueStore;
use anyhow::Result;

/// Transfer payload attached when a listing card starts being dragged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    property_id: String,
}

impl DragPayload {
    pub fn begin(property: &Property) -> Self {
        Self {
            property_id: property.id.clone(),
        }
    }

    pub fn property_id(&self) -> &str {
        &self.property_id
    }
}

/// A drop onto the favorites area completes the gesture as an add
pub fn drop_to_add<S: KeyValueStore>(
    favorites: &mut Favorites<S>,
    dataset: &Dataset,
    payload: &DragPayload,
) -> Result<AddOutcome> {
    favorites.add(dataset, &payload.property_id)
}

/// A drag of a favorites entry ending outside the favorites area removes it
///
/// Last write wins; the gesture carries no stronger guarantee.
pub fn drag_out_to_remove<S: KeyValueStore>(
    favorites: &mut Favorites<S>,
    payload: &DragPayload,
) -> Result<bool> {
    favorites.remove(&payload.property_id)
}
