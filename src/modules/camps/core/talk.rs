use crate::modules::camps::core::speaker::{Speaker, SpeakerId};

pub type TalkId = i64;

/// A talk given at exactly one camp by exactly one speaker.
///
/// Both relations are held by identifier; `speaker` is only filled in when
/// the speaker was eager-loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Talk {
    pub talk_id: TalkId,
    pub camp_moniker: String,
    pub title: String,
    pub r#abstract: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker_id: SpeakerId,
    pub speaker: Option<Speaker>,
}

/// A talk that has not been given an id by the store yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTalk {
    pub camp_moniker: String,
    pub title: String,
    pub r#abstract: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker_id: SpeakerId,
}

impl NewTalk {
    pub fn with_id(self, talk_id: TalkId) -> Talk {
        Talk {
            talk_id,
            camp_moniker: self.camp_moniker,
            title: self.title,
            r#abstract: self.r#abstract,
            level: self.level,
            category: self.category,
            speaker_id: self.speaker_id,
            speaker: None,
        }
    }
}

impl Talk {
    /// Points the talk at another speaker, keeping the eager-loaded copy in sync.
    pub fn assign_speaker(&mut self, speaker: Speaker) {
        self.speaker_id = speaker.speaker_id;
        self.speaker = Some(speaker);
    }

    pub fn without_speaker(&self) -> Talk {
        Talk {
            speaker: None,
            ..self.clone()
        }
    }
}
