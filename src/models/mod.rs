//! Data model for the exported forum archive.
//!
//! All entities are read-only and deserialized from one fetched JSON
//! document. The dataset is replaced wholesale on reload, never patched in
//! place. Optional fields carry serde defaults; the renderer supplies the
//! fixed fallback text ("Unknown" author, 0 counts).

mod dataset;
mod forum;
mod post;
mod topic;

pub use dataset::ForumData;
pub use forum::{Category, Forum, LastPost};
pub use post::Post;
pub use topic::Topic;

use serde::{Deserialize, Deserializer};

/// Helper to deserialize an id as either a string or an integer.
///
/// Exported archives are inconsistent about id types, so both are accepted.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Like [`deserialize_id`] but tolerates a missing or null value.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "deserialize_id")] String);

    let value = Option::<Wrapper>::deserialize(deserializer)?;
    Ok(value.map(|Wrapper(id)| id))
}
