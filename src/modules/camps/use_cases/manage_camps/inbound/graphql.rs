use async_graphql::{Context, Object, Result as GqlResult};
use chrono::NaiveDateTime;
use tracing::error;

use crate::modules::camps::core::camp::Camp;
use crate::modules::camps::core::errors::CampsError;
use crate::modules::camps::core::speaker::Speaker;
use crate::modules::camps::core::talk::Talk;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlSpeaker {
    pub speaker_id: i64,
    pub name: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub blog_url: Option<String>,
    pub twitter: Option<String>,
    pub github: Option<String>,
}

impl From<Speaker> for GqlSpeaker {
    fn from(s: Speaker) -> Self {
        Self {
            speaker_id: s.speaker_id,
            name: s.display_name(),
            bio: s.bio,
            company: s.company,
            company_url: s.company_url,
            blog_url: s.blog_url,
            twitter: s.twitter,
            github: s.github,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlTalk {
    pub talk_id: i64,
    pub camp_moniker: String,
    pub title: String,
    #[graphql(name = "abstract")]
    pub abstract_text: String,
    pub level: i32,
    pub category: Option<String>,
    pub speaker_id: i64,
    pub speaker: Option<GqlSpeaker>,
}

impl From<Talk> for GqlTalk {
    fn from(t: Talk) -> Self {
        Self {
            talk_id: t.talk_id,
            camp_moniker: t.camp_moniker,
            title: t.title,
            abstract_text: t.r#abstract,
            level: t.level,
            category: t.category,
            speaker_id: t.speaker_id,
            speaker: t.speaker.map(Into::into),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCamp {
    pub moniker: String,
    pub name: String,
    pub event_date: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub length: i32,
    pub venue: Option<String>,
    pub city_town: Option<String>,
    pub country: Option<String>,
    pub talks: Option<Vec<GqlTalk>>,
}

impl From<Camp> for GqlCamp {
    fn from(c: Camp) -> Self {
        let (_, ends_at) = c.schedule();
        Self {
            moniker: c.moniker,
            name: c.name,
            event_date: c.event_date,
            ends_at,
            length: c.length,
            venue: c.location.venue_name,
            city_town: c.location.city_town,
            country: c.location.country,
            talks: c
                .talks
                .map(|talks| talks.into_iter().map(Into::into).collect()),
        }
    }
}

fn gql_error(error: CampsError) -> async_graphql::Error {
    match error {
        CampsError::Persistence(failure) => {
            error!(error = %failure, "persistence failure");
            async_graphql::Error::new("Database failed")
        }
        other => async_graphql::Error::new(other.to_string()),
    }
}

/// Absent single resources resolve to `null` rather than an error.
fn optional<T>(result: Result<T, CampsError>) -> GqlResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(CampsError::NotFound(_)) => Ok(None),
        Err(other) => Err(gql_error(other)),
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn camps(
        &self,
        context: &Context<'_>,
        include_talks: Option<bool>,
    ) -> GqlResult<Vec<GqlCamp>> {
        let state = context.data_unchecked::<AppState>();
        let camps = state
            .camps
            .list_camps(include_talks.unwrap_or(false))
            .await
            .map_err(gql_error)?;
        Ok(camps.into_iter().map(Into::into).collect())
    }

    async fn camp(
        &self,
        context: &Context<'_>,
        moniker: String,
        include_talks: Option<bool>,
    ) -> GqlResult<Option<GqlCamp>> {
        let state = context.data_unchecked::<AppState>();
        let camp = optional(
            state
                .camps
                .get_camp(&moniker, include_talks.unwrap_or(false))
                .await,
        )?;
        Ok(camp.map(Into::into))
    }

    async fn search_camps(
        &self,
        context: &Context<'_>,
        date: NaiveDateTime,
        include_talks: Option<bool>,
    ) -> GqlResult<Vec<GqlCamp>> {
        let state = context.data_unchecked::<AppState>();
        let camps = optional(
            state
                .camps
                .search_by_event_date(date, include_talks.unwrap_or(false))
                .await,
        )?;
        Ok(camps
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    async fn talks(&self, context: &Context<'_>, moniker: String) -> GqlResult<Vec<GqlTalk>> {
        let state = context.data_unchecked::<AppState>();
        let talks = state
            .talks
            .list_talks(&moniker)
            .await
            .map_err(gql_error)?;
        Ok(talks.into_iter().map(Into::into).collect())
    }

    async fn talk(
        &self,
        context: &Context<'_>,
        moniker: String,
        id: i64,
    ) -> GqlResult<Option<GqlTalk>> {
        let state = context.data_unchecked::<AppState>();
        let talk = optional(state.talks.get_talk(&moniker, id, true).await)?;
        Ok(talk.map(Into::into))
    }
}
