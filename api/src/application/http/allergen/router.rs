use super::handlers::get_allergens::{__path_get_allergens, get_allergens};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_allergens))]
pub struct AllergenApiDoc;

pub fn allergen_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/allergens", state.args.server.root_path),
        get(get_allergens),
    )
}
