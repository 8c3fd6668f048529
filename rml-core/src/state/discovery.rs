use super::{Generation, GenerationCounter};
use crate::entities::{Toilet, ToiletId};

/// The toilets discovered in the current viewport.
#[derive(Debug, Default, Clone)]
pub struct ToiletFeed {
    toilets: Vec<Toilet>,
    queries: GenerationCounter,
}

impl ToiletFeed {
    /// Register a query for a new viewport.
    pub fn begin_query(&mut self) -> Generation {
        self.queries.next()
    }

    /// Replace the list with the result of a query.
    ///
    /// Results of outdated queries are dropped and `false` is returned.
    pub fn apply(&mut self, generation: Generation, toilets: Vec<Toilet>) -> bool {
        if !self.queries.is_current(generation) {
            log::debug!("Discarding {} toilets of an outdated viewport", toilets.len());
            return false;
        }
        self.toilets = toilets;
        true
    }

    pub fn toilets(&self) -> &[Toilet] {
        &self.toilets
    }

    pub fn ids(&self) -> impl Iterator<Item = &ToiletId> {
        self.toilets.iter().map(|t| &t.id)
    }
}
