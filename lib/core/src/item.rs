use serde::{Deserialize, Serialize};
use crate::rating::INITIAL_RATING;

pub type ItemId = u64;

/// A ranked item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Descriptive data the engine never interprets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub rating: i32,
    /// `None` until the first rank recomputation that saw this item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Item {
    pub(crate) fn from_attributes(id: ItemId, attributes: ItemAttributes) -> Self {
        Self {
            id,
            name: attributes.name,
            category: attributes.category,
            metadata: attributes.metadata,
            rating: INITIAL_RATING,
            rank: None,
        }
    }

    /// Case-insensitive category match
    #[inline]
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_uppercase() == category.to_uppercase()
    }
}

/// Caller-supplied description of a new item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ItemAttributes {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            metadata: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// The fields of an item that may change after creation.
///
/// `id` and `rank` cannot be patched: ids are assigned once by the registry and
/// ranks are derived from ratings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl ItemUpdate {
    #[inline]
    #[must_use]
    pub fn rating(rating: i32) -> Self {
        Self {
            rating: Some(rating),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rating.is_none() && self.name.is_none() && self.category.is_none() && self.metadata.is_none()
    }
}
