use super::error::ApiError;
use crate::clients::ProductClient;
use crate::model::{Product, ProductDraft, ProductId, ValidationErrors};
use actor_framework::ActorClient;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

type Body = Result<Json<Value>, JsonRejection>;
type IdPath = Result<Path<i64>, PathRejection>;

/// Non-integer segments are a 422. Negative integers are valid input that can
/// never match a record, so they are a 404.
fn product_id(path: IdPath) -> Result<ProductId, ApiError> {
    let Path(id) = path.map_err(|_| ValidationErrors::single("id", "must be an integer"))?;
    u64::try_from(id)
        .map(ProductId)
        .map_err(|_| ApiError::UnknownId(id))
}

fn draft(body: Body) -> Result<ProductDraft, ValidationErrors> {
    let Json(value) =
        body.map_err(|rejection| ValidationErrors::single("body", rejection.body_text()))?;
    ProductDraft::from_json(&value)
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

pub async fn create_product(
    State(client): State<ProductClient>,
    body: Body,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = client.create_product(draft(body)?).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn list_products(
    State(client): State<ProductClient>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(client.list().await?))
}

pub async fn get_product(
    State(client): State<ProductClient>,
    path: IdPath,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(path)?;
    Ok(Json(client.require(id).await?))
}

/// Replaces a product. A missing ID wins over an invalid body.
pub async fn update_product(
    State(client): State<ProductClient>,
    path: IdPath,
    body: Body,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(path)?;
    let draft = match draft(body) {
        Ok(draft) => draft,
        Err(invalid) => {
            // Separate message from the rejection; a concurrent delete can land in between.
            client.require(id).await?;
            return Err(invalid.into());
        }
    };
    Ok(Json(client.update_product(id, draft).await?))
}

pub async fn delete_product(
    State(client): State<ProductClient>,
    path: IdPath,
) -> Result<StatusCode, ApiError> {
    let id = product_id(path)?;
    client.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
