use anyhow::Result;

/// Synchronous string-keyed store for small per-session state
///
/// The viewer keeps exactly one record in it (the favorites list), but the
/// interface is a plain key-value contract so the backing can change.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any prior value
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the record under `key`; removing an absent key is a no-op
    fn delete(&mut self, key: &str) -> Result<()>;
}
