use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One entity matched by a name search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SearchHit<Id> {
    pub id: Id,
    pub name: String,
    pub upcoming_show_count: usize,
}

/// Search response. `count` is always the number of hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<Id> {
    data: Vec<SearchHit<Id>>,
}

impl<Id> SearchResults<Id> {
    #[must_use]
    pub const fn new(data: Vec<SearchHit<Id>>) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn data(&self) -> &[SearchHit<Id>] {
        &self.data
    }
}

impl<Id: serde::Serialize> Serialize for SearchResults<Id> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("SearchResults", 2)?;
        state.serialize_field("count", &self.count())?;
        state.serialize_field("data", &self.data)?;
        state.end()
    }
}
