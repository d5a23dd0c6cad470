// src/domain/comment.rs

use serde::ser::{Serialize, SerializeMap, Serializer};

pub const COMMENT_ID: &str = "comment_id";
pub const CREATED_AT: &str = "created_at";
pub const PROFILE_PIC_URL: &str = "profile_pic_url";
pub const TEXT: &str = "text";
pub const USER_ID: &str = "user_id";
pub const USERNAME: &str = "username";

/// Header names the display layer knows how to render.
pub const WELL_KNOWN_KEYS: [&str; 6] =
    [COMMENT_ID, CREATED_AT, PROFILE_PIC_URL, TEXT, USER_ID, USERNAME];

/// One parsed comment row.
///
/// The shape is whatever the header row declared: a field-name to value
/// mapping that keeps header order. The six well-known keys get typed
/// accessors; anything else is carried along as an extra attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRecord {
    fields: Vec<(String, String)>,
}

impl CommentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`. A key that is already present keeps its
    /// position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn field(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn comment_id(&self) -> &str {
        self.field(COMMENT_ID)
    }

    pub fn created_at(&self) -> &str {
        self.field(CREATED_AT)
    }

    pub fn avatar_url(&self) -> &str {
        self.field(PROFILE_PIC_URL)
    }

    pub fn text(&self) -> &str {
        self.field(TEXT)
    }

    pub fn user_id(&self) -> &str {
        self.field(USER_ID)
    }

    pub fn username(&self) -> &str {
        self.field(USERNAME)
    }

    /// Upper-cased first character of the username, shown when the avatar
    /// image is unavailable.
    pub fn avatar_initial(&self) -> Option<String> {
        self.username()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
    }

    /// All fields in header order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Fields whose header name is not one of the well-known keys.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields().filter(|(k, _)| !WELL_KNOWN_KEYS.contains(k))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for CommentRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = CommentRecord::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

// Flat JSON object, same keys as the uploaded header.
impl Serialize for CommentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
