// Shared test fixtures for talks and speakers.

use serde::Deserialize;

use crate::modules::camps::core::speaker::{Speaker, SpeakerId};
use crate::modules::camps::core::talk::NewTalk;

#[derive(Debug, Clone, Deserialize)]
pub struct NewTalkDto {
    pub camp_moniker: String,
    pub title: String,
    pub r#abstract: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker_id: SpeakerId,
}

pub fn make_speaker(speaker_id: SpeakerId) -> Speaker {
    Speaker {
        speaker_id,
        first_name: format!("Speaker{speaker_id}"),
        middle_name: None,
        last_name: "Fixture".into(),
        bio: Some("Speaks at camps.".into()),
        company: Some("Wilder Minds LLC".into()),
        company_url: Some("http://wilderminds.com".into()),
        blog_url: None,
        twitter: None,
        github: None,
    }
}

pub struct NewTalkBuilder {
    inner: NewTalk,
}

impl Default for NewTalkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl NewTalkBuilder {
    pub fn new() -> Self {
        let dto: NewTalkDto =
            serde_json::from_str(include_str!("json/talk_entity_framework.json")).unwrap();

        Self {
            inner: NewTalk {
                camp_moniker: dto.camp_moniker,
                title: dto.title,
                r#abstract: dto.r#abstract,
                level: dto.level,
                category: dto.category,
                speaker_id: dto.speaker_id,
            },
        }
    }

    pub fn camp_moniker(mut self, v: impl Into<String>) -> Self {
        self.inner.camp_moniker = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn level(mut self, v: i32) -> Self {
        self.inner.level = v;
        self
    }

    pub fn speaker_id(mut self, v: SpeakerId) -> Self {
        self.inner.speaker_id = v;
        self
    }

    pub fn build(self) -> NewTalk {
        self.inner
    }
}

#[cfg(test)]
mod new_talk_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewTalkBuilder::default().build();
        assert_eq!(built.camp_moniker, "ATL2018");
        assert_eq!(built.title, "Entity Framework From Scratch");
        assert_eq!(built.level, 100);
        assert_eq!(built.category.as_deref(), Some("Data"));
        assert_eq!(built.speaker_id, 1);
    }

    #[rstest]
    fn setters_override_fields() {
        let custom = NewTalkBuilder::new()
            .camp_moniker("SEA2019")
            .title("Intro to X")
            .level(300)
            .speaker_id(42)
            .build();
        assert_eq!(custom.camp_moniker, "SEA2019");
        assert_eq!(custom.title, "Intro to X");
        assert_eq!(custom.level, 300);
        assert_eq!(custom.speaker_id, 42);
    }
}
