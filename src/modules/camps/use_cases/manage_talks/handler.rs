use std::sync::Arc;

use tracing::{debug, info};

use crate::modules::camps::core::errors::{CampsError, ValidationFailure, require_committed};
use crate::modules::camps::core::outcome::Created;
use crate::modules::camps::core::repository::{CampRepository, CampStore};
use crate::modules::camps::core::talk::{NewTalk, Talk, TalkId};
use crate::modules::camps::use_cases::manage_talks::command::{CreateTalk, TalkPatch};
use crate::shared::infrastructure::links::LinkGenerator;

pub struct TalksHandler<TStore>
where
    TStore: CampStore + 'static,
{
    store: Arc<TStore>,
    links: LinkGenerator,
}

impl<TStore> TalksHandler<TStore>
where
    TStore: CampStore + 'static,
{
    pub fn new(store: Arc<TStore>, links: LinkGenerator) -> Self {
        Self { store, links }
    }

    pub async fn list_talks(&self, moniker: &str) -> Result<Vec<Talk>, CampsError> {
        Ok(self.store.begin().get_talks_by_camp(moniker).await?)
    }

    pub async fn get_talk(
        &self,
        moniker: &str,
        talk_id: TalkId,
        include_speaker: bool,
    ) -> Result<Talk, CampsError> {
        self.store
            .begin()
            .get_talk(moniker, talk_id, include_speaker)
            .await?
            .ok_or_else(|| {
                debug!(moniker, talk_id, "talk not found");
                CampsError::NotFound(format!("talk {talk_id} of camp {moniker}"))
            })
    }

    pub async fn create_talk(
        &self,
        moniker: &str,
        command: CreateTalk,
    ) -> Result<Created<Talk>, CampsError> {
        let mut repository = self.store.begin();
        let Some(camp) = repository.get_camp(moniker, false).await? else {
            debug!(moniker, "camp for new talk not found");
            return Err(CampsError::NotFound(format!("camp {moniker}")));
        };
        let speaker_id = command.speaker_id.ok_or(ValidationFailure::SpeakerMissing)?;
        let Some(speaker) = repository.get_speaker(speaker_id).await? else {
            debug!(moniker, speaker_id, "speaker for new talk not found");
            return Err(ValidationFailure::SpeakerNotFound(speaker_id).into());
        };

        let mut talk = repository.add_talk(NewTalk {
            camp_moniker: camp.moniker,
            title: command.title,
            r#abstract: command.r#abstract,
            level: command.level,
            category: command.category,
            speaker_id: speaker.speaker_id,
        });
        let location = self
            .links
            .talk(moniker, talk.talk_id)
            .map_err(|e| ValidationFailure::UnaddressableResource(e.to_string()))?;
        require_committed(repository.commit().await?)?;

        talk.assign_speaker(speaker);
        info!(moniker, talk_id = talk.talk_id, "talk created");
        Ok(Created {
            resource: talk,
            location,
        })
    }

    /// A submitted speaker that cannot be resolved is ignored; the talk keeps
    /// its current speaker and the rest of the patch still applies.
    pub async fn update_talk(
        &self,
        moniker: &str,
        talk_id: TalkId,
        patch: TalkPatch,
    ) -> Result<Talk, CampsError> {
        let mut repository = self.store.begin();
        let Some(stored) = repository.get_talk(moniker, talk_id, true).await? else {
            debug!(moniker, talk_id, "talk to update not found");
            return Err(CampsError::NotFound(format!(
                "talk {talk_id} of camp {moniker}"
            )));
        };

        let mut talk = stored.clone();
        patch.apply_to(&mut talk);
        if let Some(speaker_id) = patch.speaker_id {
            match repository.get_speaker(speaker_id).await? {
                Some(speaker) => talk.assign_speaker(speaker),
                None => debug!(talk_id, speaker_id, "unknown speaker ignored"),
            }
        }
        if talk == stored {
            debug!(moniker, talk_id, "talk update changes nothing");
            return Ok(talk);
        }

        repository.update_talk(talk.clone());
        require_committed(repository.commit().await?)?;

        info!(moniker, talk_id, "talk updated");
        Ok(talk)
    }

    pub async fn delete_talk(&self, moniker: &str, talk_id: TalkId) -> Result<(), CampsError> {
        let mut repository = self.store.begin();
        let Some(talk) = repository.get_talk(moniker, talk_id, false).await? else {
            debug!(moniker, talk_id, "talk to delete not found");
            return Err(CampsError::NotFound(format!(
                "talk {talk_id} of camp {moniker}"
            )));
        };

        repository.delete_talk(&talk);
        require_committed(repository.commit().await?)?;

        info!(moniker, talk_id, "talk deleted");
        Ok(())
    }
}
