use axum::{Router, middleware, routing::get};

use crate::modules::camps::adapters::inbound::versioning::{ApiVersion, report_api_versions};
use crate::modules::camps::use_cases::manage_camps::inbound::http as camps_http;
use crate::modules::camps::use_cases::manage_talks::inbound::http as talks_http;
use crate::shell::state::AppState;

/// Every resource route, mounted under `/api` for the default version and
/// under `/api/{version}` for an explicit `v1`/`v2` URL segment.
fn resource_routes(router: Router<AppState>, prefix: &str) -> Router<AppState> {
    router
        .route(
            &format!("{prefix}/camps"),
            get(camps_http::list).post(camps_http::create),
        )
        .route(&format!("{prefix}/camps/search"), get(camps_http::search))
        .route(
            &format!("{prefix}/camps/{{moniker}}"),
            get(camps_http::get)
                .put(camps_http::update)
                .delete(camps_http::delete),
        )
        .route(
            &format!("{prefix}/camps/{{moniker}}/talks"),
            get(talks_http::list).post(talks_http::create),
        )
        .route(
            &format!("{prefix}/camps/{{moniker}}/talks/{{id}}"),
            get(talks_http::get)
                .put(talks_http::update)
                .delete(talks_http::delete),
        )
}

pub fn router(state: AppState) -> Router {
    let router = resource_routes(Router::new(), "/api");
    resource_routes(router, "/api/{version}")
        .route_layer(middleware::from_extractor::<ApiVersion>())
        .layer(middleware::map_response(report_api_versions))
        .with_state(state)
}
