use thiserror::Error;

/// Failures while moving values in and out of a [`crate::KeyValueStore`].
///
/// These never escape the public accessors: [`crate::Repository`] and
/// [`crate::SessionStore`] log them and fall back to absent or seed data.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to decode value under key `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for key `{key}`: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value under key `{key}` failed validation: {reason}")]
    Invalid { key: String, reason: &'static str },
}
