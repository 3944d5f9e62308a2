//! HTTP client for the finance backend (dashboard, transactions, cash counts,
//! reports). All calls are asynchronous and return `ApiError` on transport or
//! server failure; nothing is retried here.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{
    CashCountPayload, CashSummary, CategoryStat, ChartData, DashboardStats, DetailedReport,
    Period, Transaction, TransactionKind, TransactionPayload,
};

static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

static BASE_URL: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(default_base_url()));

fn default_base_url() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or("http://127.0.0.1:8000")
        .to_string()
}

pub fn set_base_url(url: impl Into<String>) {
    *BASE_URL.lock().unwrap() = url.into();
}

pub fn base_url() -> String {
    BASE_URL.lock().unwrap().clone()
}

fn api_url(path: &str) -> String {
    format!("{}/api{}", base_url(), path)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        body,
    })
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = check(CLIENT.get(api_url(path)).send().await?).await?;
    Ok(resp.json::<T>().await?)
}

/// GET /api/dashboard/stats/{period}
pub async fn dashboard_stats(period: Period) -> Result<DashboardStats, ApiError> {
    get_json(&format!("/dashboard/stats/{}", period.as_str())).await
}

/// GET /api/dashboard/chart-data/{period}
pub async fn chart_data(period: Period) -> Result<ChartData, ApiError> {
    get_json(&format!("/dashboard/chart-data/{}", period.as_str())).await
}

/// GET /api/dashboard/category-stats/{period}/{kind}
pub async fn category_stats(
    period: Period,
    kind: TransactionKind,
) -> Result<Vec<CategoryStat>, ApiError> {
    get_json(&format!(
        "/dashboard/category-stats/{}/{}",
        period.as_str(),
        kind.as_str()
    ))
    .await
}

/// GET /api/transactions
pub async fn transactions() -> Result<Vec<Transaction>, ApiError> {
    get_json("/transactions").await
}

/// POST /api/transactions
pub async fn create_transaction(payload: &TransactionPayload) -> Result<Transaction, ApiError> {
    let resp = check(
        CLIENT
            .post(api_url("/transactions"))
            .json(payload)
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

/// PUT /api/transactions/{id}
pub async fn update_transaction(
    id: &str,
    payload: &TransactionPayload,
) -> Result<Transaction, ApiError> {
    let resp = check(
        CLIENT
            .put(api_url(&format!("/transactions/{}", id)))
            .json(payload)
            .send()
            .await?,
    )
    .await?;
    Ok(resp.json().await?)
}

/// DELETE /api/transactions/{id}
pub async fn delete_transaction(id: &str) -> Result<(), ApiError> {
    check(
        CLIENT
            .delete(api_url(&format!("/transactions/{}", id)))
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

/// GET /api/cash-counts/summary
pub async fn cash_summary() -> Result<CashSummary, ApiError> {
    get_json("/cash-counts/summary").await
}

/// POST /api/cash-counts
pub async fn create_cash_count(payload: &CashCountPayload) -> Result<(), ApiError> {
    check(
        CLIENT
            .post(api_url("/cash-counts"))
            .json(payload)
            .send()
            .await?,
    )
    .await?;
    Ok(())
}

/// GET /api/reports/detailed/{period}
pub async fn detailed_report(period: Period) -> Result<DetailedReport, ApiError> {
    get_json(&format!("/reports/detailed/{}", period.as_str())).await
}
