use super::*;
use rml_entities as e;

use e::geo::{CoordinateError, MapPoint};

impl TryFrom<OverpassElement> for e::toilet::PoiNode {
    type Error = CoordinateError;
    fn try_from(from: OverpassElement) -> Result<Self, Self::Error> {
        let OverpassElement { id, lat, lon, tags } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lon)?;
        Ok(Self {
            id,
            pos,
            name: tags.name,
        })
    }
}

impl TryFrom<NominatimPlace> for e::place::Place {
    type Error = CoordinateError;
    fn try_from(from: NominatimPlace) -> Result<Self, Self::Error> {
        let NominatimPlace {
            display_name,
            lat,
            lon,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lon)?;
        Ok(Self {
            label: display_name,
            pos,
        })
    }
}

impl From<RatingSummary> for e::rating::RatingSummary {
    fn from(from: RatingSummary) -> Self {
        let RatingSummary {
            average_rating,
            cleanliness,
            accessibility,
            baby_changing,
        } = from;
        Self {
            average_rating: average_rating.into(),
            cleanliness: cleanliness.into(),
            accessibility: accessibility.into(),
            baby_changing: baby_changing.into(),
        }
    }
}

impl From<e::review::ReviewInput> for NewReview {
    fn from(from: e::review::ReviewInput) -> Self {
        let e::review::ReviewInput {
            toilet_id,
            rating,
            cleanliness,
            accessibility,
            baby_changing,
            comment,
        } = from;
        Self {
            toilet_id: toilet_id.to_string(),
            rating: rating.into(),
            cleanliness: cleanliness.into(),
            accessibility: accessibility.into(),
            baby_changing: baby_changing.into(),
            comment,
        }
    }
}

impl TryFrom<CustomToilet> for e::toilet::CustomToilet {
    type Error = CoordinateError;
    fn try_from(from: CustomToilet) -> Result<Self, Self::Error> {
        let CustomToilet { id, name, lat, lon } = from;
        let pos = MapPoint::try_from_lat_lng_deg(lat, lon)?;
        Ok(Self { id, name, pos })
    }
}

impl From<e::toilet::NewCustomToilet> for NewCustomToilet {
    fn from(from: e::toilet::NewCustomToilet) -> Self {
        let e::toilet::NewCustomToilet { name, pos } = from;
        Self {
            name,
            lat: pos.lat(),
            lon: pos.lng(),
        }
    }
}

impl TryFrom<NearbyToilet> for e::toilet::NearbyToilet {
    type Error = CoordinateError;
    fn try_from(from: NearbyToilet) -> Result<Self, Self::Error> {
        let NearbyToilet {
            toilet_id,
            name,
            address,
            latitude,
            longitude,
        } = from;
        let pos = MapPoint::try_from_lat_lng_deg(latitude, longitude)?;
        Ok(Self {
            toilet_id,
            name,
            address,
            pos,
        })
    }
}

impl From<Review> for e::review::Review {
    fn from(from: Review) -> Self {
        let Review {
            review_id,
            username,
            overall_rating,
            comment,
            created_at,
        } = from;
        Self {
            review_id,
            username,
            overall_rating: overall_rating.into(),
            comment,
            created_at: e::review::Timestamp::parse(&created_at),
        }
    }
}

impl From<LooDetail> for e::review::LooDetail {
    fn from(from: LooDetail) -> Self {
        let LooDetail {
            toilet_id,
            name,
            address,
            avg_overall_rating,
            avg_cleanliness_rating,
            avg_accessibility_rating,
            review_count,
            reviews,
        } = from;
        Self {
            toilet_id,
            name,
            address,
            avg_overall_rating: avg_overall_rating.into(),
            avg_cleanliness_rating: avg_cleanliness_rating.into(),
            avg_accessibility_rating: avg_accessibility_rating.into(),
            review_count,
            reviews: reviews.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<e::review::NewLooReview> for NewLooReview {
    fn from(from: e::review::NewLooReview) -> Self {
        let e::review::NewLooReview {
            overall_rating,
            cleanliness_rating,
            accessibility_rating,
            comment,
        } = from;
        Self {
            overall_rating: overall_rating.into(),
            cleanliness_rating: cleanliness_rating.into(),
            accessibility_rating: accessibility_rating.into(),
            comment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rml_entities::id::ToiletId;

    #[test]
    fn element_without_name_tag_has_no_name() {
        let element = OverpassElement {
            id: 42,
            lat: 51.5,
            lon: -0.1,
            tags: OverpassTags::default(),
        };
        let node = e::toilet::PoiNode::try_from(element).unwrap();
        assert_eq!(node.id, 42);
        assert_eq!(node.name, None);
    }

    #[test]
    fn reject_element_with_invalid_coordinates() {
        let element = OverpassElement {
            id: 42,
            lat: 151.5,
            lon: -0.1,
            tags: OverpassTags::default(),
        };
        assert!(e::toilet::PoiNode::try_from(element).is_err());
    }

    #[test]
    fn place_from_search_result() {
        let place = e::place::Place::try_from(NominatimPlace {
            display_name: "Camden Town".into(),
            lat: 51.539,
            lon: -0.1426,
        })
        .unwrap();
        assert_eq!(place.label, "Camden Town");
        assert_eq!(place.pos, MapPoint::from_lat_lng_deg(51.539, -0.1426));
        assert!(e::place::Place::try_from(NominatimPlace {
            display_name: "Nowhere".into(),
            lat: 0.0,
            lon: 200.0,
        })
        .is_err());
    }

    #[test]
    fn review_input_uses_prefixed_custom_id() {
        let input = e::review::ReviewInput {
            toilet_id: ToiletId::custom("3"),
            rating: e::rating::RatingValue::try_from(5_i64).unwrap(),
            cleanliness: e::rating::RatingValue::try_from(4_i64).unwrap(),
            accessibility: e::rating::RatingValue::try_from(3_i64).unwrap(),
            baby_changing: e::rating::RatingValue::try_from(1_i64).unwrap(),
            comment: "clean".into(),
        };
        let review = NewReview::from(input);
        assert_eq!(review.toilet_id, "custom_3");
        assert_eq!(
            (review.rating, review.cleanliness, review.accessibility, review.baby_changing),
            (5, 4, 3, 1)
        );
    }

    #[test]
    fn new_custom_toilet_coordinates() {
        let new = e::toilet::NewCustomToilet {
            name: "Park Loo".into(),
            pos: MapPoint::from_lat_lng_deg(51.5, -0.1),
        };
        let dto = NewCustomToilet::from(new);
        assert_eq!((dto.lat, dto.lon), (51.5, -0.1));
    }
}
