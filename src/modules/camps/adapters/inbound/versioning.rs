// API version dispatch.
//
// Purpose
// - Pick the representation variant a request asked for.
//
// Responsibilities
// - Read the version from the URL segment, the `api-version` query parameter
//   or the `x-version` header, in that order, defaulting to 1.0.
// - Decide the eager loading flags and the collection shape per version.
//
// Boundaries
// - Handlers and the store never see a version, only the flags derived here.

use std::collections::HashMap;
use std::fmt;

use axum::Json;
use axum::extract::{FromRequestParts, Query, RawPathParams};
use axum::http::request::Parts;
use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;

use crate::modules::camps::adapters::inbound::representations::CampModel;
use crate::modules::camps::core::camp::Camp;

pub const VERSION_QUERY_PARAMETER: &str = "api-version";
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("x-version");
pub const SUPPORTED_VERSIONS_HEADER: HeaderName =
    HeaderName::from_static("api-supported-versions");
pub const SUPPORTED_VERSIONS: &str = "1.0, 2.0";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedApiVersion(pub String);

impl IntoResponse for UnsupportedApiVersion {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "UnsupportedApiVersion",
                "message": format!(
                    "version {:?} is not supported, use one of {SUPPORTED_VERSIONS}",
                    self.0
                ),
            })),
        )
            .into_response()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => f.write_str("1.0"),
            ApiVersion::V2 => f.write_str("2.0"),
        }
    }
}

/// Envelope 2.0 wraps camp collections in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampsEnvelope {
    pub count: usize,
    pub results: Vec<CampModel>,
}

impl ApiVersion {
    /// Accepts `1`, `1.0`, `2`, `2.0`, optionally prefixed with `v`.
    pub fn parse(raw: &str) -> Result<Self, UnsupportedApiVersion> {
        let trimmed = raw.trim();
        let number = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);
        match number {
            "1" | "1.0" => Ok(ApiVersion::V1),
            "2" | "2.0" => Ok(ApiVersion::V2),
            _ => Err(UnsupportedApiVersion(raw.to_string())),
        }
    }

    /// Version carried by the URL segment, which always has the `v` prefix.
    fn parse_segment(raw: &str) -> Result<Self, UnsupportedApiVersion> {
        if !raw.starts_with(['v', 'V']) {
            return Err(UnsupportedApiVersion(raw.to_string()));
        }
        Self::parse(raw)
    }

    /// Whether a single camp is fetched with its talks.
    pub fn include_talks(self, requested: bool) -> bool {
        match self {
            ApiVersion::V1 => requested,
            ApiVersion::V2 => true,
        }
    }

    /// Whether a single talk is fetched with its speaker.
    pub fn include_speaker(self, requested: bool) -> bool {
        match self {
            ApiVersion::V1 => requested,
            ApiVersion::V2 => true,
        }
    }

    pub fn camp_collection(self, camps: Vec<Camp>) -> Response {
        let results: Vec<CampModel> = camps.into_iter().map(CampModel::from).collect();
        match self {
            ApiVersion::V1 => Json(results).into_response(),
            ApiVersion::V2 => Json(CampsEnvelope {
                count: results.len(),
                results,
            })
            .into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for ApiVersion
where
    S: Send + Sync,
{
    type Rejection = UnsupportedApiVersion;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(params) = RawPathParams::from_request_parts(parts, state).await {
            if let Some((_, raw)) = params.iter().find(|(name, _)| *name == "version") {
                return ApiVersion::parse_segment(raw);
            }
        }

        if let Ok(Query(query)) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            if let Some(raw) = query.get(VERSION_QUERY_PARAMETER) {
                return ApiVersion::parse(raw);
            }
        }

        if let Some(raw) = parts.headers.get(&VERSION_HEADER) {
            let raw = raw.to_str().map_err(|_| {
                UnsupportedApiVersion(String::from_utf8_lossy(raw.as_bytes()).into_owned())
            })?;
            return ApiVersion::parse(raw);
        }

        Ok(ApiVersion::default())
    }
}

/// Advertises the supported versions on every response.
pub async fn report_api_versions(mut response: Response) -> Response {
    response.headers_mut().insert(
        SUPPORTED_VERSIONS_HEADER,
        HeaderValue::from_static(SUPPORTED_VERSIONS),
    );
    response
}
