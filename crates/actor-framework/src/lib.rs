//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on Tokio. Each resource collection is owned
//! by one [`ResourceActor`] task; everything else talks to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the business logic and domain model
//! 2. **Runtime Layer** ([`ResourceActor`]) - the store, the ID counter and the message loop
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Book {
//!     id: u64,
//!     title: String,
//! }
//!
//! #[derive(Debug)] struct BookTitle(String);
//! #[derive(Debug, thiserror::Error)] #[error("book error")] struct BookError;
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = u64;
//!     type Create = BookTitle;
//!     type Update = BookTitle;
//!     type Context = ();
//!     type Error = BookError;
//!
//!     fn from_create_params(id: u64, params: BookTitle) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: params.0 })
//!     }
//!
//!     async fn on_update(&mut self, update: BookTitle, _ctx: &()) -> Result<(), Self::Error> {
//!         self.title = update.0;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Book>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let created = client.create(BookTitle("Dune".into())).await.unwrap();
//!     let book = client.get(created.id).await.unwrap().unwrap();
//!     assert_eq!(book.title, "Dune");
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor, so a request's
//!   check-then-mutate never interleaves with another request
//! - Dropping every client closes the mailbox and ends the actor loop
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which answers requests from a queue of
//! expectations instead of a running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
