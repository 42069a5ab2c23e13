use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::camps::adapters::inbound::problem::ApiError;
use crate::modules::camps::adapters::inbound::representations::{
    CreateTalkBody, TalkModel, UpdateTalkBody,
};
use crate::modules::camps::adapters::inbound::versioning::ApiVersion;
use crate::modules::camps::core::talk::TalkId;
use crate::modules::camps::use_cases::manage_camps::inbound::http::CampPath;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct TalkPath {
    pub moniker: String,
    pub id: TalkId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncludeSpeakerParams {
    #[serde(default)]
    pub include_speaker: bool,
}

pub async fn list(
    State(state): State<AppState>,
    path: Result<Path<CampPath>, PathRejection>,
) -> Result<Json<Vec<TalkModel>>, ApiError> {
    let Path(path) = path?;
    let talks = state.talks.list_talks(&path.moniker).await?;
    Ok(Json(talks.into_iter().map(TalkModel::from).collect()))
}

pub async fn get(
    State(state): State<AppState>,
    version: ApiVersion,
    path: Result<Path<TalkPath>, PathRejection>,
    params: Result<Query<IncludeSpeakerParams>, QueryRejection>,
) -> Result<Json<TalkModel>, ApiError> {
    let Path(path) = path?;
    let Query(params) = params?;
    let include_speaker = version.include_speaker(params.include_speaker);
    let talk = state
        .talks
        .get_talk(&path.moniker, path.id, include_speaker)
        .await?;
    Ok(Json(talk.into()))
}

pub async fn create(
    State(state): State<AppState>,
    path: Result<Path<CampPath>, PathRejection>,
    body: Result<Json<CreateTalkBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Path(path) = path?;
    let Json(body) = body.map_err(|e| ApiError::UnprocessableBody(e.body_text()))?;
    let created = state.talks.create_talk(&path.moniker, body.into()).await?;
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location)],
        Json(TalkModel::from(created.resource)),
    )
        .into_response())
}

pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<TalkPath>, PathRejection>,
    body: Result<Json<UpdateTalkBody>, JsonRejection>,
) -> Result<Json<TalkModel>, ApiError> {
    let Path(path) = path?;
    let Json(body) = body.map_err(|e| ApiError::UnprocessableBody(e.body_text()))?;
    let talk = state
        .talks
        .update_talk(&path.moniker, path.id, body.into())
        .await?;
    Ok(Json(talk.into()))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<TalkPath>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(path) = path?;
    state.talks.delete_talk(&path.moniker, path.id).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod manage_talks_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::camps::adapters::outbound::in_memory_store::InMemoryCampStore;
    use crate::modules::camps::core::repository::{CampRepository, CampStore};
    use crate::shared::infrastructure::links::LinkGenerator;
    use crate::shell::http::router;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::camps::CampBuilder;
    use crate::tests::fixtures::talks::make_speaker;

    const TALK: &str =
        r#"{"title":"Intro to X","abstract":"All about X","level":100,"speaker":{"speakerId":42}}"#;

    async fn make_app() -> Router {
        let store = InMemoryCampStore::with_speakers([make_speaker(1), make_speaker(42)]);
        let mut session = store.begin();
        session.add_camp(CampBuilder::new().build());
        session.commit().await.unwrap();
        router(AppState::new(Arc::new(store), LinkGenerator::default()))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_of(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn create_talk(app: &Router) -> i64 {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/camps/ATL2018/talks", TALK))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        json_of(response).await["talkId"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_a_location_on_create() {
        let app = make_app().await;
        let response = app
            .oneshot(json_request("POST", "/api/camps/ATL2018/talks", TALK))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let location = response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        let json = json_of(response).await;
        assert_eq!(
            location,
            format!("/api/camps/ATL2018/talks/{}", json["talkId"])
        );
        assert_eq!(json["speaker"]["speakerId"], 42);
        assert_eq!(json["campMoniker"], "ATL2018");
    }

    #[tokio::test]
    async fn it_should_return_400_when_the_speaker_is_missing_or_unknown() {
        let app = make_app().await;
        let missing = r#"{"title":"Intro to X","abstract":"All about X","level":100}"#;
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/camps/ATL2018/talks", missing))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["message"], "a speaker is required");

        let unknown = TALK.replace("42", "7");
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/camps/ATL2018/talks", &unknown))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_of(response).await["message"],
            "speaker 7 could not be found"
        );

        let list = app
            .oneshot(
                Request::get("/api/camps/ATL2018/talks")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(json_of(list).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_404_when_creating_a_talk_for_an_unknown_camp() {
        let response = make_app()
            .await
            .oneshot(json_request("POST", "/api/camps/NOPE/talks", TALK))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_only_load_the_speaker_in_v1_when_asked() {
        let app = make_app().await;
        let id = create_talk(&app).await;

        let plain = app
            .clone()
            .oneshot(
                Request::get(format!("/api/camps/ATL2018/talks/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(
            json_of(plain).await["speaker"],
            serde_json::json!({ "speakerId": 42 })
        );

        let v2 = app
            .oneshot(
                Request::get(format!("/api/v2/camps/ATL2018/talks/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(json_of(v2).await["speaker"]["firstName"], "Speaker42");
    }

    #[tokio::test]
    async fn it_should_keep_the_speaker_when_the_new_one_is_unknown() {
        let app = make_app().await;
        let id = create_talk(&app).await;

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/camps/ATL2018/talks/{id}"),
                r#"{"title":"Intro to Y","speaker":{"speakerId":999}}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = json_of(response).await;
        assert_eq!(json["title"], "Intro to Y");
        assert_eq!(json["speaker"]["speakerId"], 42);
        assert_eq!(json["abstract"], "All about X");
    }

    #[tokio::test]
    async fn it_should_reject_a_non_numeric_talk_id_with_a_problem_body() {
        let response = make_app()
            .await
            .oneshot(
                Request::get("/api/camps/ATL2018/talks/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["error"], "InvalidQuery");
    }

    #[tokio::test]
    async fn it_should_reject_a_malformed_include_speaker_flag_with_a_problem_body() {
        let app = make_app().await;
        let id = create_talk(&app).await;
        let response = app
            .oneshot(
                Request::get(format!("/api/camps/ATL2018/talks/{id}?includeSpeaker=True"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_of(response).await["error"], "InvalidQuery");
    }

    #[tokio::test]
    async fn it_should_delete_a_talk_and_then_return_404() {
        let app = make_app().await;
        let id = create_talk(&app).await;
        let uri = format!("/api/camps/ATL2018/talks/{id}");

        let response = app
            .clone()
            .oneshot(Request::delete(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let gone = app
            .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(gone.status(), StatusCode::NOT_FOUND);
    }
}
