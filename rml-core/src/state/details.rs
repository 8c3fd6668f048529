use super::{Generation, GenerationCounter};
use crate::entities::{LooDetail, Review};

#[derive(Debug, Default, Clone, PartialEq)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Ready(LooDetail),
    Failed(String),
}

/// The details of the selected toilet.
///
/// Only the response of the most recent selection is ever shown.
#[derive(Debug, Default, Clone)]
pub struct DetailsPanel {
    selected: Option<String>,
    state: DetailState,
    requests: GenerationCounter,
}

impl DetailsPanel {
    /// Select a toilet and start loading its details.
    ///
    /// Returns the generation of the request that needs to be sent
    /// or `None` if the toilet is already shown or being loaded.
    pub fn select(&mut self, toilet_id: &str) -> Option<Generation> {
        if self.selected.as_deref() == Some(toilet_id)
            && matches!(self.state, DetailState::Loading | DetailState::Ready(_))
        {
            return None;
        }
        self.selected = Some(toilet_id.to_owned());
        self.state = DetailState::Loading;
        Some(self.requests.next())
    }

    /// Apply the outcome of a detail request.
    pub fn resolve(
        &mut self,
        generation: Generation,
        outcome: Result<LooDetail, String>,
    ) -> bool {
        if !self.requests.is_current(generation) {
            log::debug!("Discarding outdated toilet details");
            return false;
        }
        self.state = match outcome {
            Ok(detail) => DetailState::Ready(detail),
            Err(msg) => DetailState::Failed(msg),
        };
        true
    }

    /// Show a newly created review on top without reloading the details.
    pub fn review_added(&mut self, toilet_id: &str, review: Review) -> bool {
        match &mut self.state {
            DetailState::Ready(detail) if detail.toilet_id == toilet_id => {
                detail.prepend_review(review);
                true
            }
            _ => false,
        }
    }

    pub const fn state(&self) -> &DetailState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use rml_entities::builders::Builder as _;

    use super::*;
    use crate::entities::{AvgRatingValue, Timestamp};

    fn detail(id: &str) -> LooDetail {
        LooDetail::build().toilet_id(id).name(id).finish()
    }

    fn review(id: &str) -> Review {
        Review {
            review_id: id.into(),
            username: "bob".into(),
            overall_rating: AvgRatingValue::from(4.0),
            comment: None,
            created_at: Timestamp::parse("2024-01-01T00:00:00Z"),
        }
    }

    #[test]
    fn later_selection_wins_over_late_response() {
        let mut panel = DetailsPanel::default();
        let a = panel.select("a").unwrap();
        let b = panel.select("b").unwrap();
        assert!(panel.resolve(b, Ok(detail("b"))));
        assert!(!panel.resolve(a, Ok(detail("a"))));
        assert_eq!(panel.state(), &DetailState::Ready(detail("b")));
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut panel = DetailsPanel::default();
        let a = panel.select("a").unwrap();
        let b = panel.select("b").unwrap();
        assert!(!panel.resolve(a, Err("boom".into())));
        assert_eq!(panel.state(), &DetailState::Loading);
        assert!(panel.resolve(b, Err("Not found".into())));
        assert_eq!(panel.state(), &DetailState::Failed("Not found".into()));
    }

    #[test]
    fn reselecting_is_noop_unless_failed() {
        let mut panel = DetailsPanel::default();
        let a = panel.select("a").unwrap();
        assert_eq!(panel.select("a"), None);
        panel.resolve(a, Err("offline".into()));
        assert!(panel.select("a").is_some());
    }

    #[test]
    fn prepend_new_review() {
        let mut panel = DetailsPanel::default();
        let gen = panel.select("a").unwrap();
        let mut loaded = detail("a");
        loaded.reviews = vec![review("old")];
        loaded.review_count = 1;
        panel.resolve(gen, Ok(loaded));

        assert!(!panel.review_added("b", review("other")));
        assert!(panel.review_added("a", review("new")));
        let DetailState::Ready(detail) = panel.state() else {
            panic!("details not ready");
        };
        let ids: Vec<_> = detail.reviews.iter().map(|r| r.review_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
        assert_eq!(detail.review_count, 1);
    }
}
