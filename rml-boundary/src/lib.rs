use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;
mod de;

// -- Overpass API -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<OverpassElement>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct OverpassElement {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: OverpassTags,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct OverpassTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// -- Geocoding (Nominatim) -- //

/// A search result of the Nominatim API.
///
/// Coordinates are delivered as strings.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NominatimPlace {
    pub display_name: String,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub lat: f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub lon: f64,
}

// -- Review API -- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RatingSummary {
    #[serde(deserialize_with = "de::lenient_f64")]
    pub average_rating : f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub cleanliness    : f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub accessibility  : f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub baby_changing  : f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewReview {
    pub toilet_id     : String,
    pub rating        : u8,
    pub cleanliness   : u8,
    pub accessibility : u8,
    pub baby_changing : u8,
    pub comment       : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct CustomToilet {
    #[serde(deserialize_with = "de::id_string")]
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewCustomToilet {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

// -- Loo API -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NearbyToilet {
    #[serde(deserialize_with = "de::id_string")]
    pub toilet_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub latitude: f64,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub longitude: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct LooDetail {
    #[serde(deserialize_with = "de::id_string")]
    pub toilet_id                : String,
    pub name                     : String,
    #[serde(default)]
    pub address                  : Option<String>,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub avg_overall_rating       : f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub avg_cleanliness_rating   : f64,
    #[serde(default, deserialize_with = "de::lenient_f64")]
    pub avg_accessibility_rating : f64,
    #[serde(default, deserialize_with = "de::lenient_u64")]
    pub review_count             : u64,
    #[serde(default)]
    pub reviews                  : Vec<Review>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Review {
    #[serde(deserialize_with = "de::id_string")]
    pub review_id: String,
    pub username: String,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub overall_rating: f64,
    #[serde(default)]
    pub comment: Option<String>,
    pub created_at: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewLooReview {
    pub overall_rating       : u8,
    pub cleanliness_rating   : u8,
    pub accessibility_rating : u8,
    pub comment              : String,
}

/// Error payload of the backend.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq, thiserror::Error))]
#[cfg_attr(feature = "extra-derive", error("{msg}"))]
pub struct Error {
    #[serde(default, alias = "message", alias = "error")]
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_overpass_response() {
        let json = r#"{
          "version": 0.6,
          "elements": [
            { "type": "node", "id": 101, "lat": 51.5, "lon": -0.1, "tags": { "amenity": "toilets", "name": "Park Loo" } },
            { "type": "node", "id": 102, "lat": 51.6, "lon": -0.2, "tags": { "amenity": "toilets" } },
            { "type": "node", "id": 103, "lat": 51.7, "lon": -0.3 }
          ]
        }"#;
        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.elements.len(), 3);
        assert_eq!(response.elements[0].tags.name.as_deref(), Some("Park Loo"));
        assert_eq!(response.elements[1].tags.name, None);
        assert_eq!(response.elements[2].tags.name, None);
    }

    #[test]
    fn decode_overpass_response_without_elements() {
        let response: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(response.elements.is_empty());
    }

    #[test]
    fn decode_nominatim_search_results() {
        let json = r#"[
          {
            "place_id": 1234,
            "licence": "Data © OpenStreetMap contributors, ODbL 1.0.",
            "lat": "51.5073219",
            "lon": "-0.1276474",
            "display_name": "London, Greater London, England, United Kingdom",
            "type": "city"
          }
        ]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(json).unwrap();
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].lat, 51.507_321_9);
        assert_eq!(places[0].lon, -0.127_647_4);
        assert!(places[0].display_name.starts_with("London"));
    }

    #[test]
    fn decode_summary_with_numeric_strings() {
        let json = r#"{"average_rating":"4.5","cleanliness":4,"accessibility":3.25,"baby_changing":null}"#;
        let summary: RatingSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.average_rating, 4.5);
        assert_eq!(summary.cleanliness, 4.0);
        assert_eq!(summary.accessibility, 3.25);
        assert_eq!(summary.baby_changing, 0.0);
    }

    #[test]
    fn decode_custom_toilet_with_numeric_id() {
        let json = r#"{"id":17,"name":"Park Loo","lat":51.5,"lon":-0.1}"#;
        let toilet: CustomToilet = serde_json::from_str(json).unwrap();
        assert_eq!(toilet.id, "17");
    }

    #[test]
    fn decode_loo_detail() {
        let json = r#"{
          "toilet_id": 5,
          "name": "Station Loo",
          "address": "1 Station Road",
          "avg_overall_rating": "3.6667",
          "avg_cleanliness_rating": 4,
          "avg_accessibility_rating": null,
          "review_count": "1",
          "reviews": [
            { "review_id": 9, "username": "bob", "overall_rating": 4, "comment": "ok", "created_at": "2024-05-01T12:00:00.000Z" }
          ]
        }"#;
        let detail: LooDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.toilet_id, "5");
        assert_eq!(detail.review_count, 1);
        assert_eq!(detail.avg_accessibility_rating, 0.0);
        assert_eq!(detail.reviews[0].review_id, "9");
    }

    #[test]
    fn encode_new_review() {
        let review = NewReview {
            toilet_id: "101".into(),
            rating: 5,
            cleanliness: 4,
            accessibility: 3,
            baby_changing: 2,
            comment: "fine".into(),
        };
        let json = serde_json::to_value(&review).unwrap();
        assert_eq!(json["toilet_id"], "101");
        assert_eq!(json["rating"], 5);
        assert_eq!(json["baby_changing"], 2);
    }

    #[test]
    fn decode_error_message() {
        let err: Error = serde_json::from_str(r#"{"msg":"Token is not valid"}"#).unwrap();
        assert_eq!(err.msg, "Token is not valid");
        let err: Error = serde_json::from_str(r#"{"message":"boom"}"#).unwrap();
        assert_eq!(err.msg, "boom");
    }
}
