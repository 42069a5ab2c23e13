use crate::modules::camps::core::speaker::SpeakerId;
use crate::modules::camps::core::talk::Talk;

/// A talk as submitted for creation. The speaker is optional here so that a
/// missing speaker can be reported as such instead of as a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTalk {
    pub title: String,
    pub r#abstract: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker_id: Option<SpeakerId>,
}

/// Submitted changes for an existing talk; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalkPatch {
    pub title: Option<String>,
    pub r#abstract: Option<String>,
    pub level: Option<i32>,
    pub category: Option<String>,
    pub speaker_id: Option<SpeakerId>,
}

impl TalkPatch {
    /// Merges everything but the speaker, which has to be resolved first.
    pub fn apply_to(&self, talk: &mut Talk) {
        if let Some(title) = &self.title {
            talk.title.clone_from(title);
        }
        if let Some(text) = &self.r#abstract {
            talk.r#abstract.clone_from(text);
        }
        if let Some(level) = self.level {
            talk.level = level;
        }
        if self.category.is_some() {
            talk.category.clone_from(&self.category);
        }
    }
}
