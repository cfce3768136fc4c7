use super::handlers::{
    create_user::{__path_create_user, create_user},
    get_dish_safety::{__path_get_dish_safety, get_dish_safety},
    get_user::{__path_get_user, get_user},
    get_user_allergies::{__path_get_user_allergies, get_user_allergies},
    update_allergy_mode::{__path_update_allergy_mode, update_allergy_mode},
    update_user_allergies::{__path_update_user_allergies, update_user_allergies},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    create_user,
    get_user,
    get_user_allergies,
    update_user_allergies,
    update_allergy_mode,
    get_dish_safety
))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            post(create_user),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
        .route(
            &format!("{}/users/{{user_id}}/allergies", state.args.server.root_path),
            get(get_user_allergies).put(update_user_allergies),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/allergy-mode",
                state.args.server.root_path
            ),
            put(update_allergy_mode),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/dishes/{{dish_id}}/safety",
                state.args.server.root_path
            ),
            get(get_dish_safety),
        )
}
