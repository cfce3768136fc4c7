pub mod entities;
pub mod helpers;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
