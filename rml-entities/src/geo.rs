use std::fmt;

use thiserror::Error;

const LAT_DEG_MIN: f64 = -90.0;
const LAT_DEG_MAX: f64 = 90.0;
const LNG_DEG_MIN: f64 = -180.0;
const LNG_DEG_MAX: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("Invalid latitude degrees: {0}")]
    Latitude(f64),
    #[error("Invalid longitude degrees: {0}")]
    Longitude(f64),
}

/// A geographical location on a (flat) map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    /// Create a point without checking the ranges.
    ///
    /// Only intended for constants and values that have been
    /// validated before, e.g. by the map widget.
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(CoordinateError::Latitude(lat));
        }
        if !lng.is_finite() || !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(CoordinateError::Longitude(lng));
        }
        Ok(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        Self::try_from_lat_lng_deg(self.lat, self.lng).is_ok()
    }

    pub const fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Wrap the longitude into [-180, 180], e.g. for clicks on a
    /// repeated copy of the world.
    #[must_use]
    pub fn wrap(self) -> Self {
        Self {
            lat: self.lat,
            lng: wrap_lng(self.lng),
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// The four-corner geographic extent of a map viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// Bring the raw bounds of a map widget into coordinate ranges.
    ///
    /// Map widgets do not wrap longitudes: a viewport that crosses the
    /// antimeridian or shows the whole world reports values beyond ±180°.
    /// Latitudes are clamped. A longitude span of 360° or more covers
    /// the whole world, otherwise both edges are wrapped and the result
    /// has west > east when the viewport crosses the antimeridian.
    #[must_use]
    pub fn normalize(self) -> Self {
        let south = self.sw.lat.clamp(LAT_DEG_MIN, LAT_DEG_MAX);
        let north = self.ne.lat.clamp(LAT_DEG_MIN, LAT_DEG_MAX);
        let (west, east) = if self.ne.lng - self.sw.lng >= LNG_DEG_MAX - LNG_DEG_MIN {
            (LNG_DEG_MIN, LNG_DEG_MAX)
        } else {
            (wrap_lng(self.sw.lng), wrap_lng(self.ne.lng))
        };
        Self {
            sw: MapPoint::from_lat_lng_deg(south, west),
            ne: MapPoint::from_lat_lng_deg(north, east),
        }
    }

    pub const fn south(&self) -> f64 {
        self.sw.lat
    }

    pub const fn west(&self) -> f64 {
        self.sw.lng
    }

    pub const fn north(&self) -> f64 {
        self.ne.lat
    }

    pub const fn east(&self) -> f64 {
        self.ne.lng
    }

    // The longitude may wrap around the antimeridian,
    // i.e. west > east is allowed.
    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat <= self.ne.lat
    }
}

fn wrap_lng(lng: f64) -> f64 {
    if (LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
        return lng;
    }
    (lng - LNG_DEG_MIN).rem_euclid(LNG_DEG_MAX - LNG_DEG_MIN) + LNG_DEG_MIN
}
