use crate::entities::{CustomToilet, MapPoint, Toilet, ToiletId};

/// Toilets registered by users and the add mode of the map.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CustomToiletRegistry {
    toilets: Vec<CustomToilet>,
    add_mode: bool,
}

impl CustomToiletRegistry {
    pub const fn is_add_mode(&self) -> bool {
        self.add_mode
    }

    pub fn toggle_add_mode(&mut self) {
        self.add_mode = !self.add_mode;
    }

    /// Interpret a click on the map.
    ///
    /// Returns the position of the new toilet only while in add mode.
    pub fn placement(&self, pos: MapPoint) -> Option<MapPoint> {
        self.add_mode.then_some(pos)
    }

    /// Append a successfully registered toilet and leave add mode.
    pub fn add(&mut self, toilet: CustomToilet) {
        self.toilets.push(toilet);
        self.add_mode = false;
    }

    pub fn replace_all(&mut self, toilets: Vec<CustomToilet>) {
        self.toilets = toilets;
    }

    pub fn toilets(&self) -> &[CustomToilet] {
        &self.toilets
    }

    pub fn toilet_ids(&self) -> impl Iterator<Item = ToiletId> + '_ {
        self.toilets.iter().map(CustomToilet::toilet_id)
    }

    pub fn to_map_toilets(&self) -> Vec<Toilet> {
        self.toilets.iter().cloned().map(Toilet::from).collect()
    }
}
