//! Mapping entity associating one alias with one URL.

/// A persisted alias → URL mapping.
///
/// Records are immutable once created. `id` is a surrogate key assigned by
/// the store for bookkeeping; it carries no meaning for callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl Mapping {
    /// Creates a new Mapping instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMapping {
    pub alias: String,
    pub url: String,
}

impl NewMapping {
    pub fn new(alias: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            url: url.into(),
        }
    }

    /// Attaches the store-assigned id, producing the persisted record.
    pub fn persisted(self, id: i64) -> Mapping {
        Mapping::new(id, self.alias, self.url)
    }
}
