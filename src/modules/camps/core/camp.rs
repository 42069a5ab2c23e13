use chrono::{Duration, NaiveDateTime};

use crate::modules::camps::core::errors::ValidationFailure;
use crate::modules::camps::core::talk::Talk;

/// Longest camp accepted, in days.
pub const MAX_LENGTH_DAYS: i32 = 366;

/// Where a camp takes place. Every line is optional, venues rarely fill all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub venue_name: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

/// A conference event, addressed by its client-assigned moniker.
///
/// `talks` is `None` when the talks were not eager-loaded, and `Some(vec![])`
/// when they were loaded and the camp has none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camp {
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub location: Location,
    pub talks: Option<Vec<Talk>>,
}

impl Camp {
    /// End of the camp, `None` when it falls outside the representable range.
    pub fn ends_at(&self) -> Option<NaiveDateTime> {
        self.event_date
            .checked_add_signed(Duration::days(i64::from(self.length.max(0))))
    }

    /// Start and end of the camp, `length` being counted in days. An end past
    /// the representable range saturates.
    pub fn schedule(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.event_date, self.ends_at().unwrap_or(NaiveDateTime::MAX))
    }

    /// Rejects lengths outside `1..=MAX_LENGTH_DAYS` and camps whose end
    /// cannot be represented.
    pub fn check_schedule(&self) -> Result<(), ValidationFailure> {
        if !(1..=MAX_LENGTH_DAYS).contains(&self.length) {
            return Err(ValidationFailure::InvalidSchedule(format!(
                "length must be between 1 and {MAX_LENGTH_DAYS} days, got {}",
                self.length
            )));
        }
        if self.ends_at().is_none() {
            return Err(ValidationFailure::InvalidSchedule(format!(
                "camp starting {} ends out of range",
                self.event_date
            )));
        }
        Ok(())
    }

    /// Same camp without its eager-loaded talks, as stored in a table row.
    pub fn without_talks(&self) -> Camp {
        Camp {
            talks: None,
            ..self.clone()
        }
    }
}
