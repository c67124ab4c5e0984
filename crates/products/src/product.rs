use serde::{Deserialize, Deserializer, Serialize};

/// Product identifier as issued by the catalog API.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Decode an explicit `null` as the type's zero value.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Customer rating attached to a product.
///
/// `count` is signed on purpose: a negative count is a defect to report, not a
/// decoding failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rating {
    #[serde(deserialize_with = "null_default")]
    pub rate: f64,
    #[serde(deserialize_with = "null_default")]
    pub count: i64,
}

/// A catalog item as returned by the products endpoint.
///
/// No invariants are enforced here. Missing or `null` JSON fields decode to their
/// zero value and unknown fields are ignored, so every well-formed object maps to a `Product`;
/// whether it is *valid* is decided by [`crate::validation`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_default")]
    pub id: ProductId,
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_default")]
    pub description: String,
    #[serde(deserialize_with = "null_default")]
    pub category: String,
    #[serde(deserialize_with = "null_default")]
    pub image: String,
    #[serde(deserialize_with = "null_default")]
    pub rating: Rating,
}

impl Product {
    /// Decode a products response body.
    ///
    /// A `null` body is an empty list and `null` entries are zero-valued products, so
    /// only bodies that are not a JSON array (or `null`) fail.
    pub fn list_from_json<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Option::<Vec<Option<Product>>>::deserialize(deserializer)?;
        Ok(entries
            .unwrap_or_default()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect())
    }
}
