// Shared test fixture for camps, loaded from the ATL2018 sample.

use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::modules::camps::core::camp::{Camp, Location};
use crate::modules::camps::core::talk::Talk;

// JSON -> DTO (fixture shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CampDto {
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

pub struct CampBuilder {
    inner: Camp,
}

impl Default for CampBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CampBuilder {
    pub fn new() -> Self {
        let dto: CampDto = serde_json::from_str(include_str!("json/camp_atl2018.json")).unwrap();

        Self {
            inner: Camp {
                moniker: dto.moniker,
                name: dto.name,
                event_date: dto.event_date,
                length: dto.length,
                location: Location {
                    venue_name: dto.venue_name,
                    address1: dto.address1,
                    city_town: dto.city_town,
                    state_province: dto.state_province,
                    postal_code: dto.postal_code,
                    country: dto.country,
                    ..Location::default()
                },
                talks: None,
            },
        }
    }

    pub fn moniker(mut self, v: impl Into<String>) -> Self {
        self.inner.moniker = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn event_date(mut self, v: NaiveDateTime) -> Self {
        self.inner.event_date = v;
        self
    }

    pub fn length(mut self, v: i32) -> Self {
        self.inner.length = v;
        self
    }

    pub fn location(mut self, v: Location) -> Self {
        self.inner.location = v;
        self
    }

    pub fn talks(mut self, v: Vec<Talk>) -> Self {
        self.inner.talks = Some(v);
        self
    }

    pub fn build(self) -> Camp {
        self.inner
    }
}

#[cfg(test)]
mod camp_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CampBuilder::default().build();
        assert_eq!(built.moniker, "ATL2018");
        assert_eq!(built.name, "Atlanta Code Camp");
        assert_eq!(built.length, 1);
        assert_eq!(
            built.location.venue_name.as_deref(),
            Some("Atlanta Convention Center")
        );
        assert_eq!(built.location.address2, None);
        assert_eq!(built.talks, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = CampBuilder::new()
            .moniker("SEA2019")
            .name("Seattle Code Camp")
            .length(2)
            .talks(vec![])
            .build();
        assert_eq!(custom.moniker, "SEA2019");
        assert_eq!(custom.name, "Seattle Code Camp");
        assert_eq!(custom.length, 2);
        assert_eq!(custom.talks, Some(vec![]));
    }
}
