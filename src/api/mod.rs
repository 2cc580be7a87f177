//! # HTTP API
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/health` | 200 | |
//! | POST | `/products` | 201 | 422 |
//! | GET | `/products` | 200 | |
//! | GET | `/products/:id` | 200 | 404, 422 |
//! | PUT | `/products/:id` | 200 | 404, 422 |
//! | DELETE | `/products/:id` | 204 | 404, 422 |
//!
//! Errors use [`ErrorBody`]. Malformed JSON and non-integer IDs are reported as 422
//! like any other field problem. A 500 means the product actor is gone.

pub mod error;
pub mod handlers;

pub use error::{ApiError, ErrorBody};

use crate::clients::ProductClient;
use axum::routing::get;
use axum::Router;

pub fn router(client: ProductClient) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .with_state(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use actor_framework::mock::MockClient;
    use actor_framework::FrameworkError;
    use reqwest::StatusCode;
    use tokio::net::TcpListener;

    async fn serve(client: ProductClient) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(client)).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn widget() -> Product {
        Product {
            id: ProductId(4),
            name: "Widget".to_string(),
            price: 1.5,
            quantity: 2,
        }
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_500() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_list().return_err(FrameworkError::ActorClosed);
        let base = serve(ProductClient::new(mock.client())).await;

        let resp = reqwest::get(format!("{base}/products")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorBody = resp.json().await.unwrap();
        assert_eq!(body.detail, "Actor communication error: Actor closed");
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_update_checks_existence_first() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(4)).return_ok(None);
        mock.expect_get(ProductId(4)).return_ok(Some(widget()));
        let base = serve(ProductClient::new(mock.client())).await;
        let http = reqwest::Client::new();

        let missing = http
            .put(format!("{base}/products/4"))
            .json(&serde_json::json!({"name": ""}))
            .send()
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let present = http
            .put(format!("{base}/products/4"))
            .json(&serde_json::json!({"name": ""}))
            .send()
            .await
            .unwrap();
        assert_eq!(present.status(), StatusCode::UNPROCESSABLE_ENTITY);
        mock.verify();
    }

    #[tokio::test]
    async fn test_bad_path_id_never_reaches_actor() {
        let mock = MockClient::<Product>::new();
        let base = serve(ProductClient::new(mock.client())).await;

        let resp = reqwest::get(format!("{base}/products/abc")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: ErrorBody = resp.json().await.unwrap();
        let errors = body.errors.unwrap();
        assert_eq!(errors.fields()[0].field, "id");
        mock.verify();
    }
}
