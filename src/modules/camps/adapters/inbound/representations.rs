// Wire shapes of camps, talks and speakers, shared by every API version.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::modules::camps::core::camp::{Camp, Location};
use crate::modules::camps::core::speaker::{Speaker, SpeakerId};
use crate::modules::camps::core::talk::{Talk, TalkId};
use crate::modules::camps::use_cases::manage_camps::command::{CampPatch, LocationPatch};
use crate::modules::camps::use_cases::manage_talks::command::{CreateTalk, TalkPatch};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampModel {
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    pub length: i32,
    pub venue: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talks: Option<Vec<TalkModel>>,
}

impl From<Camp> for CampModel {
    fn from(camp: Camp) -> Self {
        let Location {
            venue_name,
            address1,
            address2,
            address3,
            city_town,
            state_province,
            postal_code,
            country,
        } = camp.location;
        Self {
            name: camp.name,
            moniker: camp.moniker,
            event_date: camp.event_date,
            length: camp.length,
            venue: venue_name,
            address1,
            address2,
            address3,
            city_town,
            state_province,
            postal_code,
            country,
            talks: camp
                .talks
                .map(|talks| talks.into_iter().map(TalkModel::from).collect()),
        }
    }
}

/// Body of a camp creation. Talks are never created through their camp.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampBody {
    pub name: String,
    pub moniker: String,
    pub event_date: NaiveDateTime,
    #[serde(default = "default_length")]
    pub length: i32,
    pub venue: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

fn default_length() -> i32 {
    1
}

impl From<CreateCampBody> for Camp {
    fn from(body: CreateCampBody) -> Self {
        Camp {
            moniker: body.moniker,
            name: body.name,
            event_date: body.event_date,
            length: body.length,
            location: Location {
                venue_name: body.venue,
                address1: body.address1,
                address2: body.address2,
                address3: body.address3,
                city_town: body.city_town,
                state_province: body.state_province,
                postal_code: body.postal_code,
                country: body.country,
            },
            talks: None,
        }
    }
}

/// Body of a camp update. A `moniker` in the body is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCampBody {
    pub name: Option<String>,
    pub event_date: Option<NaiveDateTime>,
    pub length: Option<i32>,
    pub venue: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub city_town: Option<String>,
    pub state_province: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl From<UpdateCampBody> for CampPatch {
    fn from(body: UpdateCampBody) -> Self {
        CampPatch {
            name: body.name,
            event_date: body.event_date,
            length: body.length,
            location: LocationPatch {
                venue_name: body.venue,
                address1: body.address1,
                address2: body.address2,
                address3: body.address3,
                city_town: body.city_town,
                state_province: body.state_province,
                postal_code: body.postal_code,
                country: body.country,
            },
        }
    }
}

/// A speaker as rendered inside a talk. Only the id is known when the
/// speaker was not eager-loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerModel {
    pub speaker_id: SpeakerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, rename = "gitHub", skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl From<Speaker> for SpeakerModel {
    fn from(speaker: Speaker) -> Self {
        Self {
            speaker_id: speaker.speaker_id,
            first_name: Some(speaker.first_name),
            middle_name: speaker.middle_name,
            last_name: Some(speaker.last_name),
            bio: speaker.bio,
            company: speaker.company,
            company_url: speaker.company_url,
            blog_url: speaker.blog_url,
            twitter: speaker.twitter,
            github: speaker.github,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkModel {
    pub talk_id: TalkId,
    pub camp_moniker: String,
    pub title: String,
    pub r#abstract: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker: SpeakerModel,
}

impl From<Talk> for TalkModel {
    fn from(talk: Talk) -> Self {
        let speaker = match talk.speaker {
            Some(speaker) => SpeakerModel::from(speaker),
            None => SpeakerModel {
                speaker_id: talk.speaker_id,
                ..SpeakerModel::default()
            },
        };
        Self {
            talk_id: talk.talk_id,
            camp_moniker: talk.camp_moniker,
            title: talk.title,
            r#abstract: talk.r#abstract,
            level: talk.level,
            category: talk.category,
            speaker,
        }
    }
}

/// Reference to an existing speaker, e.g. `{ "speakerId": 42 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeakerRef {
    pub speaker_id: SpeakerId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTalkBody {
    pub title: String,
    pub r#abstract: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker: Option<SpeakerRef>,
}

impl From<CreateTalkBody> for CreateTalk {
    fn from(body: CreateTalkBody) -> Self {
        CreateTalk {
            title: body.title,
            r#abstract: body.r#abstract,
            level: body.level,
            category: body.category,
            speaker_id: body.speaker.map(|s| s.speaker_id),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTalkBody {
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub level: Option<i32>,
    pub category: Option<String>,
    pub speaker: Option<SpeakerRef>,
}

impl From<UpdateTalkBody> for TalkPatch {
    fn from(body: UpdateTalkBody) -> Self {
        TalkPatch {
            title: body.title,
            r#abstract: body.r#abstract,
            level: body.level,
            category: body.category,
            speaker_id: body.speaker.map(|s| s.speaker_id),
        }
    }
}
