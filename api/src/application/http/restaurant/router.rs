use super::handlers::{
    get_restaurant::{__path_get_restaurant, get_restaurant},
    get_restaurant_dishes::{__path_get_restaurant_dishes, get_restaurant_dishes},
    get_restaurants::{__path_get_restaurants, get_restaurants},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_restaurants, get_restaurant, get_restaurant_dishes))]
pub struct RestaurantApiDoc;

pub fn restaurant_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/restaurants", state.args.server.root_path),
            get(get_restaurants),
        )
        .route(
            &format!(
                "{}/restaurants/{{restaurant_id}}",
                state.args.server.root_path
            ),
            get(get_restaurant),
        )
        .route(
            &format!(
                "{}/restaurants/{{restaurant_id}}/dishes",
                state.args.server.root_path
            ),
            get(get_restaurant_dishes),
        )
}
