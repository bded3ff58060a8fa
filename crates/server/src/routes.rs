pub mod menu;

use axum::{http::HeaderValue, routing::get, Json, Router};
use configs::CorsConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Welcome};

use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/", tag = "meta",
    responses((status = 200, description = "Welcome message", body = crate::openapi::WelcomeResponse))
)]
pub async fn root() -> Json<Welcome> {
    Json(Welcome::default())
}

#[utoipa::path(
    get, path = "/health", tag = "meta",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Allow-listed origins, any method and header, credentials on.
/// Methods and headers are mirrored from the preflight since wildcards are
/// not allowed together with credentials.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o).map_err(|e| anyhow::anyhow!("invalid CORS origin {o:?}: {e}")))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Build the full application router: meta routes plus the menu resource
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let mut public = Router::new()
        .route("/", get(root))
        .route("/api-docs/openapi.json", get(openapi_json));
    if state.config.server.enable_health {
        public = public.route("/health", get(health));
    }

    // Collection routes answer with and without the trailing slash
    let menu_routes = Router::new()
        .route("/api/menu", get(menu::list_items).post(menu::create_item))
        .route("/api/menu/", get(menu::list_items).post(menu::create_item))
        .route(
            "/api/menu/:id",
            get(menu::get_item).put(menu::update_item).delete(menu::delete_item),
        );

    public
        .merge(menu_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                        .on_request(DefaultOnRequest::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                )
                .layer(cors),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_accepts_default_origins() {
        assert!(build_cors(&CorsConfig::default()).is_ok());
    }

    #[test]
    fn cors_rejects_unencodable_origin() {
        let cfg = CorsConfig { allowed_origins: vec!["http://bad\norigin".into()] };
        assert!(build_cors(&cfg).is_err());
    }
}
