use chrono::NaiveDateTime;

use crate::modules::camps::core::camp::{Camp, Location};

/// Submitted changes for an existing camp. `None` leaves the stored value
/// as it is. The moniker is not part of a patch, a camp keeps it for life.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampPatch {
    pub name: Option<String>,
    pub event_date: Option<NaiveDateTime>,
    pub length: Option<i32>,
    pub location: LocationPatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationPatch {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

fn merge<T>(target: &mut T, submitted: &Option<T>)
where
    T: Clone,
{
    if let Some(value) = submitted {
        *target = value.clone();
    }
}

fn merge_optional<T>(target: &mut Option<T>, submitted: &Option<T>)
where
    T: Clone,
{
    if submitted.is_some() {
        target.clone_from(submitted);
    }
}

impl LocationPatch {
    pub fn apply_to(&self, location: &mut Location) {
        merge_optional(&mut location.venue_name, &self.venue_name);
        merge_optional(&mut location.address1, &self.address1);
        merge_optional(&mut location.address2, &self.address2);
        merge_optional(&mut location.address3, &self.address3);
        merge_optional(&mut location.city_town, &self.city_town);
        merge_optional(&mut location.state_province, &self.state_province);
        merge_optional(&mut location.postal_code, &self.postal_code);
        merge_optional(&mut location.country, &self.country);
    }
}

impl CampPatch {
    pub fn apply_to(&self, camp: &mut Camp) {
        merge(&mut camp.name, &self.name);
        merge(&mut camp.event_date, &self.event_date);
        merge(&mut camp.length, &self.length);
        self.location.apply_to(&mut camp.location);
    }
}
