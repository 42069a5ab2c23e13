// In memory implementation of the CampStore and CampRepository ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep camps, talks and speakers in tables guarded by one lock.
// - Give every session its own staging area and apply it atomically on commit.
// - Enforce moniker uniqueness and references at commit time, the way a
//   relational store enforces its constraints.

use std::collections::BTreeMap;
use std::mem;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;

use crate::modules::camps::core::camp::Camp;
use crate::modules::camps::core::repository::{CampRepository, CampStore, RepositoryError};
use crate::modules::camps::core::speaker::{Speaker, SpeakerId};
use crate::modules::camps::core::talk::{NewTalk, Talk, TalkId};

/// Rows to start a store with. Talk ids continue after the highest seeded id.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub camps: Vec<Camp>,
    pub talks: Vec<Talk>,
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    camps: BTreeMap<String, Camp>,
    talks: BTreeMap<TalkId, Talk>,
    speakers: BTreeMap<SpeakerId, Speaker>,
}

impl Tables {
    fn talks_of(&self, moniker: &str) -> Vec<Talk> {
        self.talks
            .values()
            .filter(|talk| talk.camp_moniker == moniker)
            .cloned()
            .collect()
    }

    fn load_camp(&self, camp: &Camp, include_talks: bool) -> Camp {
        let mut camp = camp.clone();
        if include_talks {
            camp.talks = Some(self.talks_of(&camp.moniker));
        }
        camp
    }

    fn load_talk(&self, talk: &Talk, include_speaker: bool) -> Talk {
        let mut talk = talk.clone();
        if include_speaker {
            talk.speaker = self.speakers.get(&talk.speaker_id).cloned();
        }
        talk
    }

    fn apply(&mut self, change: StagedChange) -> Result<bool, RepositoryError> {
        match change {
            StagedChange::AddCamp(camp) => {
                if self.camps.contains_key(&camp.moniker) {
                    return Err(RepositoryError::UniqueViolation {
                        moniker: camp.moniker,
                    });
                }
                self.camps.insert(camp.moniker.clone(), camp.without_talks());
                Ok(true)
            }
            StagedChange::AddTalk(talk) => {
                self.check_talk_references(&talk)?;
                self.talks.insert(talk.talk_id, talk.without_speaker());
                Ok(true)
            }
            StagedChange::UpdateCamp(camp) => {
                let Some(row) = self.camps.get_mut(&camp.moniker) else {
                    return Ok(false);
                };
                let updated = camp.without_talks();
                if *row == updated {
                    return Ok(false);
                }
                *row = updated;
                Ok(true)
            }
            StagedChange::UpdateTalk(talk) => {
                let Some(existing) = self.talks.get(&talk.talk_id) else {
                    return Ok(false);
                };
                let updated = Talk {
                    camp_moniker: existing.camp_moniker.clone(),
                    ..talk.without_speaker()
                };
                if *existing == updated {
                    return Ok(false);
                }
                self.check_talk_references(&updated)?;
                self.talks.insert(updated.talk_id, updated);
                Ok(true)
            }
            StagedChange::DeleteCamp(moniker) => {
                if !self.camps.contains_key(&moniker) {
                    return Ok(false);
                }
                if self.talks.values().any(|talk| talk.camp_moniker == moniker) {
                    return Err(RepositoryError::ReferenceViolation(format!(
                        "camp {moniker} still has talks"
                    )));
                }
                self.camps.remove(&moniker);
                Ok(true)
            }
            StagedChange::DeleteTalk(talk_id) => Ok(self.talks.remove(&talk_id).is_some()),
        }
    }

    fn check_talk_references(&self, talk: &Talk) -> Result<(), RepositoryError> {
        if !self.camps.contains_key(&talk.camp_moniker) {
            return Err(RepositoryError::ReferenceViolation(format!(
                "camp {} does not exist",
                talk.camp_moniker
            )));
        }
        if !self.speakers.contains_key(&talk.speaker_id) {
            return Err(RepositoryError::ReferenceViolation(format!(
                "speaker {} does not exist",
                talk.speaker_id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum StagedChange {
    AddCamp(Camp),
    AddTalk(Talk),
    UpdateCamp(Camp),
    UpdateTalk(Talk),
    DeleteCamp(String),
    DeleteTalk(TalkId),
}

#[derive(Debug, Default)]
struct Shared {
    tables: RwLock<Tables>,
    talk_sequence: AtomicI64,
}

#[derive(Debug, Default)]
pub struct InMemoryCampStore {
    shared: Arc<Shared>,
    is_offline: bool,
    is_frozen: bool,
    delay_commit_ms: u64,
}

impl InMemoryCampStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let last_talk_id = seed.talks.iter().map(|t| t.talk_id).max().unwrap_or(0);
        let tables = Tables {
            camps: seed
                .camps
                .into_iter()
                .map(|camp| (camp.moniker.clone(), camp.without_talks()))
                .collect(),
            talks: seed
                .talks
                .into_iter()
                .map(|talk| (talk.talk_id, talk.without_speaker()))
                .collect(),
            speakers: seed
                .speakers
                .into_iter()
                .map(|speaker| (speaker.speaker_id, speaker))
                .collect(),
        };
        Self {
            shared: Arc::new(Shared {
                tables: RwLock::new(tables),
                talk_sequence: AtomicI64::new(last_talk_id),
            }),
            ..Self::default()
        }
    }

    pub fn with_speakers(speakers: impl IntoIterator<Item = Speaker>) -> Self {
        Self::from_seed(SeedData {
            speakers: speakers.into_iter().collect(),
            ..SeedData::default()
        })
    }

    /// Speakers are maintained outside of the API, this is the only way in.
    pub async fn insert_speaker(&self, speaker: Speaker) {
        self.shared
            .tables
            .write()
            .await
            .speakers
            .insert(speaker.speaker_id, speaker);
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// While frozen, commits discard their changes and report `false`.
    pub fn toggle_frozen(&mut self) {
        self.is_frozen = !self.is_frozen;
    }

    pub fn set_delay_commit_ms(&mut self, delay_ms: u64) {
        self.delay_commit_ms = delay_ms;
    }

    pub async fn camp_count(&self) -> usize {
        self.shared.tables.read().await.camps.len()
    }

    pub async fn talk_count(&self) -> usize {
        self.shared.tables.read().await.talks.len()
    }
}

impl CampStore for InMemoryCampStore {
    type Session = InMemoryCampSession;

    fn begin(&self) -> InMemoryCampSession {
        InMemoryCampSession {
            shared: Arc::clone(&self.shared),
            is_offline: self.is_offline,
            is_frozen: self.is_frozen,
            delay_commit_ms: self.delay_commit_ms,
            staged: Vec::new(),
        }
    }
}

/// One unit of work against an [`InMemoryCampStore`]. Dropping it discards
/// whatever was staged.
#[derive(Debug)]
pub struct InMemoryCampSession {
    shared: Arc<Shared>,
    is_offline: bool,
    is_frozen: bool,
    delay_commit_ms: u64,
    staged: Vec<StagedChange>,
}

impl InMemoryCampSession {
    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline {
            return Err(RepositoryError::Backend("Camp store offline".into()));
        }
        Ok(())
    }

    pub fn staged_count(&self) -> usize {
        self.staged.len()
    }
}

#[async_trait]
impl CampRepository for InMemoryCampSession {
    async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, RepositoryError> {
        self.ensure_online()?;
        let tables = self.shared.tables.read().await;
        Ok(tables
            .camps
            .values()
            .map(|camp| tables.load_camp(camp, include_talks))
            .collect())
    }

    async fn get_camp(
        &self,
        moniker: &str,
        include_talks: bool,
    ) -> Result<Option<Camp>, RepositoryError> {
        self.ensure_online()?;
        let tables = self.shared.tables.read().await;
        Ok(tables
            .camps
            .get(moniker)
            .map(|camp| tables.load_camp(camp, include_talks)))
    }

    async fn search_camps_by_event_date(
        &self,
        date: NaiveDateTime,
        include_talks: bool,
    ) -> Result<Vec<Camp>, RepositoryError> {
        self.ensure_online()?;
        let tables = self.shared.tables.read().await;
        Ok(tables
            .camps
            .values()
            .filter(|camp| camp.event_date == date)
            .map(|camp| tables.load_camp(camp, include_talks))
            .collect())
    }

    async fn get_speaker(&self, speaker_id: SpeakerId) -> Result<Option<Speaker>, RepositoryError> {
        self.ensure_online()?;
        Ok(self
            .shared
            .tables
            .read()
            .await
            .speakers
            .get(&speaker_id)
            .cloned())
    }

    async fn get_talks_by_camp(&self, moniker: &str) -> Result<Vec<Talk>, RepositoryError> {
        self.ensure_online()?;
        Ok(self.shared.tables.read().await.talks_of(moniker))
    }

    async fn get_talk(
        &self,
        moniker: &str,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Option<Talk>, RepositoryError> {
        self.ensure_online()?;
        let tables = self.shared.tables.read().await;
        Ok(tables
            .talks
            .get(&talk_id)
            .filter(|talk| talk.camp_moniker == moniker)
            .map(|talk| tables.load_talk(talk, include_speaker)))
    }

    fn add_camp(&mut self, camp: Camp) {
        self.staged.push(StagedChange::AddCamp(camp));
    }

    fn add_talk(&mut self, talk: NewTalk) -> Talk {
        let talk_id = self.shared.talk_sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let talk = talk.with_id(talk_id);
        self.staged.push(StagedChange::AddTalk(talk.clone()));
        talk
    }

    fn update_camp(&mut self, camp: Camp) {
        self.staged.push(StagedChange::UpdateCamp(camp));
    }

    fn update_talk(&mut self, talk: Talk) {
        self.staged.push(StagedChange::UpdateTalk(talk));
    }

    fn delete_camp(&mut self, camp: &Camp) {
        self.staged
            .push(StagedChange::DeleteCamp(camp.moniker.clone()));
    }

    fn delete_talk(&mut self, talk: &Talk) {
        self.staged.push(StagedChange::DeleteTalk(talk.talk_id));
    }

    async fn commit(&mut self) -> Result<bool, RepositoryError> {
        let staged = mem::take(&mut self.staged);
        self.ensure_online()?;
        if self.delay_commit_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_commit_ms)).await;
        }
        if self.is_frozen || staged.is_empty() {
            return Ok(false);
        }

        let mut tables = self.shared.tables.write().await;
        let mut working = tables.clone();
        let mut changed = 0usize;
        for change in staged {
            if working.apply(change)? {
                changed += 1;
            }
        }
        *tables = working;
        Ok(changed > 0)
    }
}
