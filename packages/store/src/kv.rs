/// Synchronous string key-value storage.
///
/// Session state is a handful of small strings, so the interface mirrors the
/// browser's `localStorage`: synchronous reads and writes, no transactions,
/// last write wins.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str);
}
