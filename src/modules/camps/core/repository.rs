// Ports describing what the camps handlers need from persistence.
//
// Purpose
// - Keep handlers independent of any database by coding against traits.
//
// Responsibilities
// - `CampStore` is the shared, long lived store. Every operation opens its own
//   unit of work with `begin`.
// - `CampRepository` is that unit of work: lookups go straight to the store,
//   writes are staged and only take effect on `commit`.
//
// Testing guidance
// - The in memory adapter implements both traits and can be toggled offline.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use thiserror::Error;

use crate::modules::camps::core::camp::Camp;
use crate::modules::camps::core::speaker::{Speaker, SpeakerId};
use crate::modules::camps::core::talk::{NewTalk, Talk, TalkId};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("moniker already in use: {moniker}")]
    UniqueViolation { moniker: String },

    #[error("reference violation: {0}")]
    ReferenceViolation(String),

    #[error("backend error: {0}")]
    Backend(String),
}

pub trait CampStore: Send + Sync {
    type Session: CampRepository;

    fn begin(&self) -> Self::Session;
}

#[async_trait]
pub trait CampRepository: Send {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError>;

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, RepositoryError>;

    /// Camps whose event date equals `date` exactly.
    async fn search_camps_by_event_date(
        &self,
        date: NaiveDateTime,
        include_talks: bool,
    ) -> Result<Vec<Camp>, RepositoryError>;

    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError>;

    async fn get_talks_by_camp(&self, moniker: &str) -> Result<Vec<Talk>, RepositoryError>;

    async fn get_talk(
        &self,
        moniker: &str,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Option<Talk>, RepositoryError>;

    fn add_camp(&mut self, camp: Camp);

    /// Stages the talk and returns it with the id reserved for it by the store.
    fn add_talk(&mut self, talk: NewTalk) -> Talk;

    fn update_camp(&mut self, camp: Camp);

    fn update_talk(&mut self, talk: Talk);

    fn delete_camp(&mut self, camp: &Camp);

    fn delete_talk(&mut self, talk: &Talk);

    /// Applies every staged change atomically. Returns whether at least one
    /// row was actually changed; staged changes are cleared either way.
    async fn commit(&mut self) -> Result<bool, RepositoryError>;
}
