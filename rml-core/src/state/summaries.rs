use std::collections::HashMap;

use crate::entities::{RatingSummary, ToiletId};

/// Rating summaries by toilet.
///
/// Toilets without a summary have no entry at all.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SummaryStore(HashMap<ToiletId, RatingSummary>);

impl SummaryStore {
    /// Insert or overwrite the summary of a toilet.
    pub fn merge(&mut self, id: ToiletId, summary: RatingSummary) {
        self.0.insert(id, summary);
    }

    pub fn get(&self, id: &ToiletId) -> Option<&RatingSummary> {
        self.0.get(id)
    }
}
