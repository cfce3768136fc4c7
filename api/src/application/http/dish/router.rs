use super::handlers::{
    check_dish_safety::{__path_check_dish_safety, check_dish_safety},
    get_dish::{__path_get_dish, get_dish},
    get_dishes::{__path_get_dishes, get_dishes},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_dishes, get_dish, check_dish_safety))]
pub struct DishApiDoc;

pub fn dish_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dishes", state.args.server.root_path),
            get(get_dishes),
        )
        .route(
            &format!("{}/dishes/{{dish_id}}", state.args.server.root_path),
            get(get_dish),
        )
        .route(
            &format!(
                "{}/dishes/{{dish_id}}/safety-check",
                state.args.server.root_path
            ),
            post(check_dish_safety),
        )
}
