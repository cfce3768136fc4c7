use crate::application::http::{
    allergen::router::AllergenApiDoc, cart::router::CartApiDoc, dish::router::DishApiDoc,
    restaurant::router::RestaurantApiDoc, user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MealGuard API"
    ),
    nest(
        (path = "/restaurants", api = RestaurantApiDoc),
        (path = "/dishes", api = DishApiDoc),
        (path = "/allergens", api = AllergenApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/users/{user_id}/cart", api = CartApiDoc),
    )
)]
pub struct ApiDoc;
