//! [`ActorEntity`] implementation for [`Product`].
//!
//! Drafts reach the actor already validated, so creation and full replacement
//! cannot fail here. The actor still owns ID assignment.

use super::error::ProductError;
use crate::model::{Product, ProductDraft, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductDraft;
    type Update = ProductDraft;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductDraft) -> Result<Self, Self::Error> {
        Ok(Product::from_draft(id, params))
    }

    /// Replaces every mutable field. The ID is kept.
    async fn on_update(
        &mut self,
        update: ProductDraft,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.replace_with(update);
        Ok(())
    }
}
