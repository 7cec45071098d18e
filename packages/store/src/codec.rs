//! JSON helpers shared by the repository and the session store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::storage::KeyValueStore;

/// Read and decode the value under `key`.
///
/// `Ok(None)` means the key is absent. A present value that is not valid JSON
/// for `T` is a [`StoreError::Decode`].
pub fn load_json<T, S>(storage: &S, key: &str) -> Result<Option<T>, StoreError>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = storage.get_item(key) else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Decode {
            key: key.to_string(),
            source,
        })
}

/// Encode `value` and overwrite `key` with it.
pub fn store_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StoreError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.to_string(),
        source,
    })?;
    storage.set_item(key, &raw);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    #[test]
    fn test_missing_key_is_none() {
        let storage = MemoryStorage::new();
        let value: Option<Vec<u32>> = load_json(&storage, "nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_malformed_value_is_decode_error() {
        let storage = MemoryStorage::new();
        storage.set_item("broken", "{not json");

        let err = load_json::<Vec<u32>, _>(&storage, "broken").unwrap_err();
        assert!(matches!(err, StoreError::Decode { ref key, .. } if key == "broken"));
    }

    #[test]
    fn test_store_then_load() {
        let storage = MemoryStorage::new();
        store_json(&storage, "numbers", &[3u32, 1, 2]).unwrap();

        assert_eq!(storage.get_item("numbers").as_deref(), Some("[3,1,2]"));
        let loaded: Option<Vec<u32>> = load_json(&storage, "numbers").unwrap();
        assert_eq!(loaded, Some(vec![3, 1, 2]));
    }
}
