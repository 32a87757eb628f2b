use async_trait::async_trait;
use reqwest::Client;
pub use reqwest::StatusCode;
use shared::{
    domain::{Product, ProductDraft, ProductId},
    error::ApiError,
};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server rejected request ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

/// Product catalog operations as exposed by the HTTP backend.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError>;
    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError>;
    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ClientError>;
    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ClientError>;
    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError>;
}

pub struct HttpProductsClient {
    http: Client,
    server_url: String,
}

impl HttpProductsClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            server_url,
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/products", self.server_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/api/products/{}", self.server_url, id)
    }

    async fn api_error(response: reqwest::Response) -> ClientError {
        let status = response.status();
        let message = match response.json::<ApiError>().await {
            Ok(envelope) => envelope.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        warn!(%status, %message, "server returned an error response");
        ClientError::Api { status, message }
    }
}

#[async_trait]
impl ProductApi for HttpProductsClient {
    async fn list_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.http.get(self.products_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ClientError> {
        let response = self.http.get(self.product_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ClientError> {
        let response = self
            .http
            .post(self.products_url())
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update_product(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<Product, ClientError> {
        let response = self
            .http
            .put(self.product_url(id))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        let response = self.http.delete(self.product_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
