/// Aggregate service over the four repository ports. Feature service
/// traits (catalog, profile, cart) are implemented on this struct in
/// their respective `services` modules.
#[derive(Debug, Clone)]
pub struct Service<D, R, P, C> {
    pub dish_repository: D,
    pub restaurant_repository: R,
    pub profile_repository: P,
    pub cart_repository: C,
}

impl<D, R, P, C> Service<D, R, P, C> {
    pub fn new(
        dish_repository: D,
        restaurant_repository: R,
        profile_repository: P,
        cart_repository: C,
    ) -> Self {
        Self {
            dish_repository,
            restaurant_repository,
            profile_repository,
            cart_repository,
        }
    }
}
