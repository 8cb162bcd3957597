//! Commit message field schema
//!
//! Only used for rendering: maps a field key to the glyph shown next to it.

use serde::Deserialize;

/// One commit message field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldSchemaEntry {
    /// Field key as used in [`FieldsBeingEdited`](super::FieldsBeingEdited)
    pub key: String,
    /// Glyph rendered before the field name
    #[serde(default)]
    pub icon: Option<String>,
}

impl FieldSchemaEntry {
    pub fn new(key: impl Into<String>, icon: Option<&str>) -> Self {
        Self {
            key: key.into(),
            icon: icon.map(String::from),
        }
    }
}

/// Ordered list of commit message fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessageSchema {
    fields: Vec<FieldSchemaEntry>,
}

impl CommitMessageSchema {
    pub fn new(fields: Vec<FieldSchemaEntry>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldSchemaEntry] {
        &self.fields
    }

    /// Icon for `key`, if the schema knows the field and gives it one
    pub fn icon_for(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|f| f.icon.as_deref())
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.key == key)
    }

    /// Sort field keys for display: schema order first, unknown keys after
    /// in their incoming order
    pub fn display_order<'a>(&self, keys: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut keys: Vec<&str> = keys.into_iter().collect();
        keys.sort_by_key(|key| self.position(key).unwrap_or(usize::MAX));
        keys
    }
}

impl Default for CommitMessageSchema {
    fn default() -> Self {
        Self::new(vec![
            FieldSchemaEntry::new("Title", Some("◆")),
            FieldSchemaEntry::new("Description", Some("≡")),
        ])
    }
}
