//! Marketing product catalog (admin-managed)

use crate::api::models::{Ack, Product, ProductFeature};
use crate::client::ApiClient;
use crate::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductData {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<FeatureData>>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureData {
    pub subtitle: String,
    pub sub_description: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeatureData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureOrder {
    pub feature_id: String,
    pub order_index: i32,
}

#[derive(Clone)]
pub struct ProductService {
    client: Arc<ApiClient>,
}

impl ProductService {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List products; `include_all` also returns unpublished drafts
    pub async fn list(&self, include_all: bool) -> Result<Vec<Product>> {
        if include_all {
            self.client
                .get_query("/products", &[("includeAll", "true".to_string())])
                .await
        } else {
            self.client.get("/products").await
        }
    }

    pub async fn get(&self, product_id: &str) -> Result<Product> {
        self.client.get(&format!("/products/{}", product_id)).await
    }

    pub async fn create(&self, data: &CreateProductData) -> Result<Product> {
        self.client.post("/products", data).await
    }

    pub async fn update(&self, product_id: &str, data: &UpdateProductData) -> Result<Product> {
        self.client
            .put(&format!("/products/{}", product_id), data)
            .await
    }

    pub async fn delete(&self, product_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/products/{}", product_id))
            .await
    }

    pub async fn add_feature(&self, product_id: &str, data: &FeatureData) -> Result<ProductFeature> {
        self.client
            .post(&format!("/products/{}/features", product_id), data)
            .await
    }

    pub async fn update_feature(
        &self,
        feature_id: &str,
        data: &UpdateFeatureData,
    ) -> Result<ProductFeature> {
        self.client
            .put(&format!("/products/features/{}", feature_id), data)
            .await
    }

    pub async fn delete_feature(&self, feature_id: &str) -> Result<Ack> {
        self.client
            .delete(&format!("/products/features/{}", feature_id))
            .await
    }

    pub async fn reorder_features(&self, product_id: &str, orders: &[FeatureOrder]) -> Result<Ack> {
        self.client
            .put(
                &format!("/products/{}/features/reorder", product_id),
                &serde_json::json!({ "featureOrders": orders }),
            )
            .await
    }
}
