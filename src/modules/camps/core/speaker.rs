pub type SpeakerId = i64;

/// Speakers are maintained outside of this API; talks only look them up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Speaker {
    pub speaker_id: SpeakerId,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl Speaker {
    pub fn display_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }
}
