//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).

pub mod product_client;

pub use product_client::*;
