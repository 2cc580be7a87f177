//! # System Lifecycle
//!
//! Starting the product actor, handing out its client, and shutting it down again.
//!
//! ```rust,ignore
//! let system = CatalogSystem::new(32);
//! let router = api::router(system.product_client.clone());
//! // ... serve requests ...
//! drop(router);
//! system.shutdown().await?;
//! ```
//!
//! Shutdown works by dropping clients: once the last `ProductClient` clone is gone the
//! actor's mailbox closes and its loop ends. Anything still holding a clone (a router,
//! a spawned task) has to be dropped first or `shutdown` waits for it.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
