//! In-memory implementations of the repository ports. The upstream
//! application serves its catalog from bundled demo data and keeps
//! user state client-side; this store mirrors that, seeded at startup
//! and held behind `RwLock`s for the lifetime of the process.

pub mod cart;
pub mod catalog;
pub mod profile;
pub mod seed;

pub use cart::InMemoryCartRepository;
pub use catalog::{InMemoryDishRepository, InMemoryRestaurantRepository};
pub use profile::InMemoryProfileRepository;
