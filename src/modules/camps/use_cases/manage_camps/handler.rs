use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::modules::camps::core::camp::Camp;
use crate::modules::camps::core::errors::{CampsError, ValidationFailure, require_committed};
use crate::modules::camps::core::outcome::Created;
use crate::modules::camps::core::repository::{CampRepository, CampStore};
use crate::modules::camps::use_cases::manage_camps::command::CampPatch;
use crate::shared::infrastructure::links::LinkGenerator;

pub struct CampsHandler<TStore>
where
    TStore: CampStore + 'static,
{
    store: Arc<TStore>,
    links: LinkGenerator,
}

impl<TStore> CampsHandler<TStore>
where
    TStore: CampStore + 'static,
{
    pub fn new(store: Arc<TStore>, links: LinkGenerator) -> Self {
        Self { store, links }
    }

    pub async fn list_camps(&self, include_talks: bool) -> Result<Vec<Camp>, CampsError> {
        Ok(self.store.begin().list_camps(include_talks).await?)
    }

    pub async fn get_camp(&self, moniker: &str, include_talks: bool) -> Result<Camp, CampsError> {
        self.store
            .begin()
            .get_camp(moniker, include_talks)
            .await?
            .ok_or_else(|| {
                debug!(moniker, "camp not found");
                CampsError::NotFound(format!("camp {moniker}"))
            })
    }

    /// Unlike listing, a search that matches nothing is reported as not found.
    pub async fn search_by_event_date(
        &self,
        date: NaiveDateTime,
        include_talks: bool,
    ) -> Result<Vec<Camp>, CampsError> {
        let camps = self
            .store
            .begin()
            .search_camps_by_event_date(date, include_talks)
            .await?;
        if camps.is_empty() {
            debug!(%date, "no camps on date");
            return Err(CampsError::NotFound(format!("camps on {date}")));
        }
        Ok(camps)
    }

    pub async fn create_camp(&self, camp: Camp) -> Result<Created<Camp>, CampsError> {
        camp.check_schedule()?;
        let mut repository = self.store.begin();
        if repository.get_camp(&camp.moniker, false).await?.is_some() {
            debug!(moniker = %camp.moniker, "moniker in use");
            return Err(CampsError::Conflict(format!(
                "moniker {} is already in use",
                camp.moniker
            )));
        }

        let location = self
            .links
            .camp(&camp.moniker)
            .map_err(|e| ValidationFailure::UnaddressableResource(e.to_string()))?;

        let camp = camp.without_talks();
        repository.add_camp(camp.clone());
        require_committed(repository.commit().await?)?;

        info!(moniker = %camp.moniker, "camp created");
        Ok(Created {
            resource: camp,
            location,
        })
    }

    pub async fn update_camp(&self, moniker: &str, patch: CampPatch) -> Result<Camp, CampsError> {
        let mut repository = self.store.begin();
        let Some(stored) = repository.get_camp(moniker, false).await? else {
            debug!(moniker, "camp to update not found");
            return Err(CampsError::NotFound(format!("camp {moniker}")));
        };

        let mut camp = stored.clone();
        patch.apply_to(&mut camp);
        camp.check_schedule()?;
        if camp == stored {
            debug!(moniker, "camp update changes nothing");
            return Ok(camp);
        }

        repository.update_camp(camp.clone());
        require_committed(repository.commit().await?)?;

        info!(moniker, "camp updated");
        Ok(camp)
    }

    /// Camps that still own talks are not deleted; their talks go first.
    pub async fn delete_camp(&self, moniker: &str) -> Result<(), CampsError> {
        let mut repository = self.store.begin();
        let Some(camp) = repository.get_camp(moniker, false).await? else {
            debug!(moniker, "camp to delete not found");
            return Err(CampsError::NotFound(format!("camp {moniker}")));
        };

        let talks = repository.get_talks_by_camp(moniker).await?;
        if !talks.is_empty() {
            debug!(moniker, talks = talks.len(), "camp still has talks");
            return Err(CampsError::Conflict(format!(
                "camp {moniker} still has {} talk(s)",
                talks.len()
            )));
        }

        repository.delete_camp(&camp);
        require_committed(repository.commit().await?)?;

        info!(moniker, "camp deleted");
        Ok(())
    }
}
