//! HTTP inspection endpoints over a shared registry.

use crate::config::Config;
use crate::locale::Locale;
use crate::provider::{
    category, AdapterType, CapabilityKind, LocaleProviderRegistry, MetricsReport, ProviderSummary,
};
use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

pub type SharedRegistry = Arc<LocaleProviderRegistry>;

/// Build the router over `registry`.
pub fn router(registry: SharedRegistry) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/locales", get(available_locales))
        .route("/categories/:category/tags", get(category_tags))
        .route("/supported", get(supported))
        .route("/providers/:kind", get(provider))
        .route("/metrics", get(metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

/// Bind to the configured address and serve until the process stops.
pub async fn serve(config: &Config, registry: SharedRegistry) -> Result<()> {
    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, router(registry))
        .await
        .context("Server error")?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub adapter: AdapterType,
}

pub async fn health(State(registry): State<SharedRegistry>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        adapter: registry.adapter_type(),
    })
}

#[derive(Debug, Serialize)]
pub struct LocalesResponse {
    pub count: usize,
    pub locales: &'static [Locale],
}

pub async fn available_locales(State(registry): State<SharedRegistry>) -> Json<LocalesResponse> {
    let locales = registry.available_locales();
    Json(LocalesResponse {
        count: locales.len(),
        locales,
    })
}

#[derive(Debug, Serialize)]
pub struct TagsResponse {
    pub category: String,
    pub tags: Vec<String>,
}

pub async fn category_tags(
    State(registry): State<SharedRegistry>,
    Path(category): Path<String>,
) -> Result<Json<TagsResponse>, (StatusCode, String)> {
    known_category(&category)?;

    let mut tags: Vec<String> = registry.language_tag_set(&category).iter().cloned().collect();
    tags.sort();
    Ok(Json(TagsResponse { category, tags }))
}

/// Only the fixed category names reach the tag set cache.
fn known_category(name: &str) -> Result<(), (StatusCode, String)> {
    if category::is_known(name) {
        Ok(())
    } else {
        Err((StatusCode::NOT_FOUND, format!("Unknown category: {}", name)))
    }
}

#[derive(Debug, Deserialize)]
pub struct SupportedQuery {
    pub category: String,
    pub tag: String,
}

#[derive(Debug, Serialize)]
pub struct SupportedResponse {
    pub locale: Locale,
    pub category: String,
    pub supported: bool,
}

pub async fn supported(
    State(registry): State<SharedRegistry>,
    Query(query): Query<SupportedQuery>,
) -> Result<Json<SupportedResponse>, (StatusCode, String)> {
    known_category(&query.category)?;

    let locale = Locale::parse(&query.tag);
    let tags = registry.language_tag_set(&query.category);
    let supported = registry.is_supported_provider_locale(&locale, &tags);

    Ok(Json(SupportedResponse {
        locale,
        category: query.category,
        supported,
    }))
}

pub async fn provider(
    State(registry): State<SharedRegistry>,
    Path(kind): Path<String>,
) -> Result<Json<ProviderSummary>, (StatusCode, String)> {
    let kind: CapabilityKind = kind
        .parse()
        .map_err(|e: crate::error::RegistryError| (StatusCode::NOT_FOUND, e.to_string()))?;

    Ok(Json(registry.provider(kind).summary()))
}

pub async fn metrics(State(registry): State<SharedRegistry>) -> Json<MetricsReport> {
    Json(registry.metrics().report())
}
