use crate::dataset::Dataset;
use crate::models::Property;
use crate::storage::KeyValueStore;
use anyhow::Result;
use tracing::{debug, warn};

/// Fixed key the favorites record is stored under
pub const STORAGE_KEY: &str = "favorites";

/// Outcome of an add request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    NotFound,
}

/// User-curated list of favorite listings, unique by property id
///
/// Owns its store; every confirmed mutation is followed by exactly one
/// sync call. An empty collection is represented by record absence, never
/// by a stored empty list.
pub struct Favorites<S: KeyValueStore> {
    entries: Vec<Property>,
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Load saved favorites; an absent, unreadable, or corrupt record
    /// starts the session empty
    pub fn load(store: S) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Ignoring corrupt saved favorites: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read saved favorites: {e:#}");
                Vec::new()
            }
        };
        Self { entries, store }
    }

    /// Add the listing with this id to the end of the collection
    ///
    /// The dataset lookup is the authoritative check and runs on every
    /// call; unknown and already-present ids leave the collection (and the
    /// store) untouched.
    pub fn add(&mut self, dataset: &Dataset, id: &str) -> Result<AddOutcome> {
        let Some(property) = dataset.find_by_id(id) else {
            debug!("Add skipped, no listing with id {id}");
            return Ok(AddOutcome::NotFound);
        };
        if self.contains(id) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        self.entries.push(property.clone());
        self.sync()?;
        Ok(AddOutcome::Added)
    }

    /// Remove the entry with this id; returns whether anything was removed
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|p| p.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.sync()?;
        Ok(true)
    }

    /// Empty the collection and delete the persisted record
    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.sync()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|p| p.id == id)
    }

    pub fn entries(&self) -> &[Property] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Persistence boundary, called only after a confirmed mutation
    ///
    /// A non-empty collection overwrites the stored record; an empty one
    /// deletes it, so the next session start sees no saved state.
    fn sync(&mut self) -> Result<()> {
        if self.entries.is_empty() {
            self.store.delete(STORAGE_KEY)
        } else {
            let raw = serde_json::to_string(&self.entries)?;
            self.store.put(STORAGE_KEY, &raw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PropertyType;
    use crate::storage::{FileStore, MemoryStore};

    fn listing(id: &str, property_type: PropertyType, price: i64) -> Property {
        Property {
            id: id.to_string(),
            property_type,
            price,
            bedrooms: 2,
            location: "Tower Bridge Road, London SE1 2AA".to_string(),
            picture: format!("images/prop{id}/main.jpg"),
            images: vec![],
            floor_plan: None,
            long_description: String::new(),
            latitude: None,
            longitude: None,
            added: None,
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::new(vec![
            listing("1", PropertyType::House, 250_000),
            listing("2", PropertyType::Flat, 180_000),
        ])
        .unwrap()
    }

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("estate-viewer-{name}-{}", std::process::id()));
        std::fs::remove_dir_all(&dir).ok();
        dir
    }

    #[test]
    fn add_is_idempotent_on_membership() {
        let dataset = sample_dataset();
        let mut favorites = Favorites::load(MemoryStore::new());

        assert_eq!(favorites.add(&dataset, "1").unwrap(), AddOutcome::Added);
        assert_eq!(favorites.add(&dataset, "1").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn add_of_an_unknown_id_is_a_no_op() {
        let dataset = sample_dataset();
        let mut favorites = Favorites::load(MemoryStore::new());

        assert_eq!(favorites.add(&dataset, "99").unwrap(), AddOutcome::NotFound);
        assert!(favorites.is_empty());
    }

    #[test]
    fn remove_of_an_absent_id_is_a_no_op() {
        let dataset = sample_dataset();
        let mut favorites = Favorites::load(MemoryStore::new());
        favorites.add(&dataset, "1").unwrap();

        assert!(!favorites.remove("2").unwrap());
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn add_add_remove_yields_empty() {
        let dataset = sample_dataset();
        let mut favorites = Favorites::load(MemoryStore::new());

        favorites.add(&dataset, "1").unwrap();
        favorites.add(&dataset, "1").unwrap();
        favorites.remove("1").unwrap();
        assert!(favorites.is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let dataset = sample_dataset();
        let mut favorites = Favorites::load(MemoryStore::new());

        favorites.add(&dataset, "2").unwrap();
        favorites.add(&dataset, "1").unwrap();
        let ids: Vec<&str> = favorites.entries().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn favorites_survive_a_session_restart() {
        let dataset = sample_dataset();
        let dir = temp_dir("favorites-restart");

        let mut favorites = Favorites::load(FileStore::open(&dir).unwrap());
        favorites.add(&dataset, "2").unwrap();

        let restarted = Favorites::load(FileStore::open(&dir).unwrap());
        let ids: Vec<&str> = restarted.entries().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn clear_leaves_no_record_for_the_next_session() {
        let dataset = sample_dataset();
        let dir = temp_dir("favorites-clear");

        let mut favorites = Favorites::load(FileStore::open(&dir).unwrap());
        favorites.add(&dataset, "1").unwrap();
        favorites.clear().unwrap();

        let store = FileStore::open(&dir).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_none());
        assert!(Favorites::load(store).is_empty());
    }

    #[test]
    fn removing_the_last_entry_also_deletes_the_record() {
        let dataset = sample_dataset();
        let dir = temp_dir("favorites-remove-last");

        let mut favorites = Favorites::load(FileStore::open(&dir).unwrap());
        favorites.add(&dataset, "1").unwrap();
        favorites.remove("1").unwrap();

        let store = FileStore::open(&dir).unwrap();
        assert!(store.get(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn corrupt_saved_state_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.put(STORAGE_KEY, "not json at all").unwrap();

        let favorites = Favorites::load(store);
        assert!(favorites.is_empty());
    }
}
