use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::entities::{
    NewLooReview, RatingCategory, RatingValue, RatingValueError, ReviewInput, ToiletId,
};

/// An input control of a review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewField {
    Rating(RatingCategory),
    Comment,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{}: {source}", .category.label())]
    Rating {
        category: RatingCategory,
        source: RatingValueError,
    },
    #[error("A review is already being submitted")]
    Submitting,
}

/// Raw values of the review controls, as typed by the user.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReviewForm {
    overall: String,
    cleanliness: String,
    accessibility: String,
    baby_changing: String,
    comment: String,
}

impl ReviewForm {
    pub fn get(&self, field: ReviewField) -> &str {
        match field {
            ReviewField::Rating(RatingCategory::Overall) => &self.overall,
            ReviewField::Rating(RatingCategory::Cleanliness) => &self.cleanliness,
            ReviewField::Rating(RatingCategory::Accessibility) => &self.accessibility,
            ReviewField::Rating(RatingCategory::BabyChanging) => &self.baby_changing,
            ReviewField::Comment => &self.comment,
        }
    }

    pub fn set(&mut self, field: ReviewField, value: String) {
        let target = match field {
            ReviewField::Rating(RatingCategory::Overall) => &mut self.overall,
            ReviewField::Rating(RatingCategory::Cleanliness) => &mut self.cleanliness,
            ReviewField::Rating(RatingCategory::Accessibility) => &mut self.accessibility,
            ReviewField::Rating(RatingCategory::BabyChanging) => &mut self.baby_changing,
            ReviewField::Comment => &mut self.comment,
        };
        *target = value;
    }

    fn rating(&self, category: RatingCategory) -> Result<RatingValue, FormError> {
        RatingValue::try_from(self.get(ReviewField::Rating(category)))
            .map_err(|source| FormError::Rating { category, source })
    }

    pub fn to_review_input(&self, toilet_id: ToiletId) -> Result<ReviewInput, FormError> {
        Ok(ReviewInput {
            toilet_id,
            rating: self.rating(RatingCategory::Overall)?,
            cleanliness: self.rating(RatingCategory::Cleanliness)?,
            accessibility: self.rating(RatingCategory::Accessibility)?,
            baby_changing: self.rating(RatingCategory::BabyChanging)?,
            comment: self.comment.trim().to_owned(),
        })
    }

    /// The subset of ratings that the details view asks for.
    pub fn to_new_loo_review(&self) -> Result<NewLooReview, FormError> {
        Ok(NewLooReview {
            overall_rating: self.rating(RatingCategory::Overall)?,
            cleanliness_rating: self.rating(RatingCategory::Cleanliness)?,
            accessibility_rating: self.rating(RatingCategory::Accessibility)?,
            comment: self.comment.trim().to_owned(),
        })
    }
}

/// Controls of the review form in the map popups.
pub const MAP_REVIEW_FIELDS: [ReviewField; 5] = [
    ReviewField::Rating(RatingCategory::Overall),
    ReviewField::Rating(RatingCategory::Cleanliness),
    ReviewField::Rating(RatingCategory::Accessibility),
    ReviewField::Rating(RatingCategory::BabyChanging),
    ReviewField::Comment,
];

/// Controls of the review form in the details view.
pub const LOO_REVIEW_FIELDS: [ReviewField; 4] = [
    ReviewField::Rating(RatingCategory::Overall),
    ReviewField::Rating(RatingCategory::Cleanliness),
    ReviewField::Rating(RatingCategory::Accessibility),
    ReviewField::Comment,
];

/// The review forms of all toilets on the map, keyed by toilet.
#[derive(Debug, Default, Clone)]
pub struct ReviewForms {
    forms: HashMap<ToiletId, ReviewForm>,
    submitting: HashSet<ToiletId>,
}

impl ReviewForms {
    pub fn value(&self, id: &ToiletId, field: ReviewField) -> &str {
        self.forms.get(id).map(|f| f.get(field)).unwrap_or_default()
    }

    pub fn set(&mut self, id: &ToiletId, field: ReviewField, value: String) {
        self.forms.entry(id.clone()).or_default().set(field, value);
    }

    pub fn is_submitting(&self, id: &ToiletId) -> bool {
        self.submitting.contains(id)
    }

    /// Validate the form of a toilet and mark it as being submitted.
    pub fn begin_submit(&mut self, id: &ToiletId) -> Result<ReviewInput, FormError> {
        if self.is_submitting(id) {
            return Err(FormError::Submitting);
        }
        let input = self
            .forms
            .get(id)
            .cloned()
            .unwrap_or_default()
            .to_review_input(id.clone())?;
        self.submitting.insert(id.clone());
        Ok(input)
    }

    /// Conclude a submission. The form is discarded if it succeeded.
    pub fn finish_submit(&mut self, id: &ToiletId, succeeded: bool) {
        self.submitting.remove(id);
        if succeeded {
            self.forms.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(forms: &mut ReviewForms, id: &ToiletId, values: [&str; 5]) {
        for (field, value) in MAP_REVIEW_FIELDS.into_iter().zip(values) {
            forms.set(id, field, value.to_owned());
        }
    }

    #[test]
    fn convert_raw_values() {
        let id = ToiletId::Osm(42);
        let mut forms = ReviewForms::default();
        fill(&mut forms, &id, ["5", " 4", "3 ", "1", " Nice "]);
        let input = forms.begin_submit(&id).unwrap();
        assert_eq!(input.toilet_id, id);
        assert_eq!(u8::from(input.rating), 5);
        assert_eq!(u8::from(input.cleanliness), 4);
        assert_eq!(u8::from(input.accessibility), 3);
        assert_eq!(u8::from(input.baby_changing), 1);
        assert_eq!(input.comment, "Nice");
    }

    #[test]
    fn reject_missing_or_out_of_range() {
        let id = ToiletId::Osm(1);
        let mut forms = ReviewForms::default();
        assert!(matches!(
            forms.begin_submit(&id),
            Err(FormError::Rating {
                category: RatingCategory::Overall,
                ..
            })
        ));
        fill(&mut forms, &id, ["5", "6", "3", "1", ""]);
        assert_eq!(
            forms.begin_submit(&id),
            Err(FormError::Rating {
                category: RatingCategory::Cleanliness,
                source: RatingValueError::OutOfRange(6),
            })
        );
        assert!(!forms.is_submitting(&id));
    }

    #[test]
    fn block_while_submitting() {
        let id = ToiletId::custom("7");
        let mut forms = ReviewForms::default();
        fill(&mut forms, &id, ["1", "2", "3", "4", ""]);
        assert!(forms.begin_submit(&id).is_ok());
        assert_eq!(forms.begin_submit(&id), Err(FormError::Submitting));

        forms.finish_submit(&id, false);
        assert_eq!(forms.value(&id, ReviewField::Comment), "");
        assert_eq!(forms.value(&id, MAP_REVIEW_FIELDS[0]), "1");

        assert!(forms.begin_submit(&id).is_ok());
        forms.finish_submit(&id, true);
        assert_eq!(forms.value(&id, MAP_REVIEW_FIELDS[0]), "");
        assert!(!forms.is_submitting(&id));
    }

    #[test]
    fn forms_are_independent() {
        let (a, b) = (ToiletId::Osm(1), ToiletId::Osm(2));
        let mut forms = ReviewForms::default();
        forms.set(&a, ReviewField::Comment, "A".into());
        forms.set(&b, ReviewField::Comment, "B".into());
        assert_eq!(forms.value(&a, ReviewField::Comment), "A");
        assert_eq!(forms.value(&b, ReviewField::Comment), "B");
    }

    #[test]
    fn loo_review_ignores_baby_changing() {
        let mut form = ReviewForm::default();
        for (field, value) in LOO_REVIEW_FIELDS.into_iter().zip(["4", "4", "2", "ok"]) {
            form.set(field, value.to_owned());
        }
        let review = form.to_new_loo_review().unwrap();
        assert_eq!(u8::from(review.overall_rating), 4);
        assert_eq!(u8::from(review.accessibility_rating), 2);
        assert_eq!(review.comment, "ok");
    }
}
