//! The actor that owns the product store.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates the product actor and its raw client.
///
/// `capacity` bounds the mailbox; senders wait while it is full.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(capacity)
}
