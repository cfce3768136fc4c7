//! Core business logic for MealGuard, an allergy-aware food ordering
//! backend. Domain rules live under [`domain`], wiring under
//! [`application`], and the in-memory store under [`infrastructure`].

pub mod application;
pub mod domain;
pub mod infrastructure;
