//! Pure data structures (DTOs) for the catalog.
//!
//! [`Product`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait; see
//! [`crate::product_actor::entity`].

pub mod product;
pub mod validation;

pub use product::*;
pub use validation::*;
