use crate::models::{ItemId, Set};

/// The fixed, ordered list of items to be assigned.
///
/// The catalog is configuration: it is supplied by the caller rather than
/// derived from the agents' rankings, and its order determines the order in
/// which items are scanned and reported.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<ItemId>", into = "Vec<ItemId>")
)]
pub struct Catalog(Set<ItemId>);

impl Catalog {
    /// Build a catalog, rejecting repeated items
    pub fn new(items: impl IntoIterator<Item = impl Into<ItemId>>) -> Result<Self, CatalogError> {
        let mut set = Set::default();
        for item in items {
            let item = item.into();
            if set.contains(&item) {
                return Err(CatalogError::DuplicateItem(item));
            }
            set.insert(item);
        }
        Ok(Self(set))
    }

    /// The number of items
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `item` belongs to the catalog
    pub fn contains(&self, item: &ItemId) -> bool {
        self.0.contains(item)
    }

    /// Look up an item by position
    pub fn get_index(&self, index: usize) -> Option<&ItemId> {
        self.0.get_index(index)
    }

    /// The position of `item` in the catalog
    pub fn index_of(&self, item: &ItemId) -> Option<usize> {
        self.0.get_index_of(item)
    }

    /// Iterate over the items in catalog order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ItemId> {
        self.0.iter()
    }
}

impl TryFrom<Vec<ItemId>> for Catalog {
    type Error = CatalogError;

    fn try_from(value: Vec<ItemId>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Catalog> for Vec<ItemId> {
    fn from(value: Catalog) -> Self {
        value.0.into_iter().collect()
    }
}

/// Errors that can occur when building a catalog
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// The same item was listed twice
    #[error("Duplicate item in catalog: {0}")]
    DuplicateItem(ItemId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let catalog = Catalog::new(["Z", "X", "Y"]).unwrap();
        let items = catalog.iter().map(ItemId::as_str).collect::<Vec<_>>();
        assert_eq!(items, ["Z", "X", "Y"]);
        assert_eq!(catalog.index_of(&"X".into()), Some(1));
        assert_eq!(catalog.get_index(2), Some(&ItemId::from("Y")));
    }

    #[test]
    fn test_duplicate_rejected() {
        assert_eq!(
            Catalog::new(["X", "Y", "X"]).unwrap_err(),
            CatalogError::DuplicateItem("X".into())
        );
    }

    #[test]
    fn test_empty() {
        let catalog = Catalog::new(Vec::<String>::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_deserialize() {
        let catalog: Catalog =
            serde_json::from_str(r#"["Paxos Made Simple", "Borg, Omega, and Kubernetes"]"#)
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.contains(&"Borg, Omega, and Kubernetes".into()));

        let error = serde_json::from_str::<Catalog>(r#"["X", "X"]"#).unwrap_err();
        assert!(error.to_string().contains("Duplicate item in catalog: X"));
    }
}
