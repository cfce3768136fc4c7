use super::handlers::{
    add_cart_item::{__path_add_cart_item, add_cart_item},
    clear_cart::{__path_clear_cart, clear_cart},
    get_cart::{__path_get_cart, get_cart},
    remove_cart_item::{__path_remove_cart_item, remove_cart_item},
    update_cart_item::{__path_update_cart_item, update_cart_item},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    get_cart,
    add_cart_item,
    update_cart_item,
    remove_cart_item,
    clear_cart
))]
pub struct CartApiDoc;

pub fn cart_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users/{{user_id}}/cart", state.args.server.root_path),
            get(get_cart).delete(clear_cart),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/cart/items",
                state.args.server.root_path
            ),
            post(add_cart_item),
        )
        .route(
            &format!(
                "{}/users/{{user_id}}/cart/items/{{dish_id}}",
                state.args.server.root_path
            ),
            put(update_cart_item).delete(remove_cart_item),
        )
}
