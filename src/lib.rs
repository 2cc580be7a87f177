//! # Product Catalog
//!
//! An in-memory product catalog served over HTTP, plus a command-line client for it.
//!
//! Records live in a single [`ResourceActor`](actor_framework::ResourceActor) task. Every
//! read and write is a message to that task, so each operation is atomic without locks.
//! IDs start at 1, only grow, and are never reused after a delete. Nothing survives a
//! restart.
//!
//! ## Module Tour
//!
//! - [`model`]: [`Product`](model::Product) records, validated
//!   [`ProductDraft`](model::ProductDraft) input and field errors.
//! - [`product_actor`]: the `ActorEntity` impl for `Product` and [`ProductError`](product_actor::ProductError).
//! - [`clients`]: [`ProductClient`](clients::ProductClient), the typed handle everything else uses.
//! - [`lifecycle`]: [`CatalogSystem`](lifecycle::CatalogSystem) starts and stops the actor;
//!   [`lifecycle::tracing`] installs logging.
//! - [`config`]: server settings from the environment.
//! - [`api`]: the axum router and HTTP error mapping.
//! - [`cli`]: the `catalog` command tree, transport and rendering.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run --bin catalog-server
//! cargo run --bin catalog -- create --name Widget --price 9.99 --quantity 10
//! cargo run --bin catalog -- list
//! ```

pub mod api;
pub mod cli;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
