use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use shared::{
    domain::{Product, ProductDraft, ProductId},
    error::{ApiError, ErrorCode},
};
use storage::Storage;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

mod config;

use config::{load_settings, prepare_database_url};

#[derive(Clone)]
struct AppState {
    storage: Storage,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let database_url = prepare_database_url(&settings.database_url)?;
    let storage = Storage::new(&database_url).await.map_err(|error| {
        error!(
            %database_url,
            %error,
            "failed to open SQLite database; verify parent directory exists and permissions are correct"
        );
        error
    })?;

    let state = AppState { storage };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "product server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api", get(api_root))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello World" }))
}

fn validate_draft(draft: &ProductDraft) -> Result<(), (StatusCode, Json<ApiError>)> {
    let issue = if draft.name.trim().is_empty() {
        Some("name must not be blank")
    } else if draft.description.trim().is_empty() {
        Some("description must not be blank")
    } else if !draft.price.is_finite() || draft.price < 0.0 {
        Some("price must be a non-negative number")
    } else if draft.quantity < 0 {
        Some("quantity must be a non-negative integer")
    } else {
        None
    };

    match issue {
        Some(message) => Err((
            StatusCode::BAD_REQUEST,
            Json(ApiError::new(ErrorCode::Validation, message)),
        )),
        None => Ok(()),
    }
}

async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, (StatusCode, Json<ApiError>)> {
    let products = state.storage.list_products().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(ErrorCode::Internal, e.to_string())),
        )
    })?;
    Ok(Json(products))
}

async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    let product = state
        .storage
        .get_product(ProductId(id))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, e.to_string())),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(ErrorCode::NotFound, "product not found")),
            )
        })?;
    Ok(Json(product))
}

async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<ApiError>)> {
    validate_draft(&draft)?;

    let product = state.storage.create_product(&draft).await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(ErrorCode::Internal, e.to_string())),
        )
    })?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, (StatusCode, Json<ApiError>)> {
    validate_draft(&draft)?;

    let product = state
        .storage
        .update_product(ProductId(id), &draft)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, e.to_string())),
            )
        })?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(ErrorCode::NotFound, "product not found")),
            )
        })?;
    Ok(Json(product))
}

async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<ApiError>)> {
    let removed = state
        .storage
        .delete_product(ProductId(id))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, e.to_string())),
            )
        })?;

    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            Json(ApiError::new(ErrorCode::NotFound, "product not found")),
        ))
    }
}
