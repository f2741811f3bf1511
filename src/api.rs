//! HTTP client for the backend category endpoints.

use crate::error::RepositoryError;
use crate::models::{Category, CategoryData};
use crate::repository::CategoryRepository;
use once_cell::sync::Lazy;

static CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("reqwest client")
});

static RUNTIME: Lazy<tokio::runtime::Runtime> =
    Lazy::new(|| tokio::runtime::Runtime::new().expect("tokio runtime"));

fn base_url() -> Result<String, RepositoryError> {
    crate::get_base_url().ok_or(RepositoryError::NotConfigured)
}

fn auth_headers() -> Result<reqwest::header::HeaderMap, RepositoryError> {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::CONTENT_TYPE,
        "application/json".parse().expect("static header value"),
    );
    if let Some(token) = crate::get_auth_token() {
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|e: reqwest::header::InvalidHeaderValue| {
                    RepositoryError::Transport(e.to_string())
                })?,
        );
    }
    Ok(headers)
}

/// Decode a non-2xx body as the backend's validation payload:
/// `{ "message": ..., "errors": [{ "param": ..., "msg": ... }] }`.
/// Bodies that are not JSON become a bare Backend error with no field errors.
fn decode_backend_error(status: reqwest::StatusCode, text: &str) -> RepositoryError {
    let json: serde_json::Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => {
            let message = if text.trim().is_empty() {
                status.to_string()
            } else {
                text.to_string()
            };
            return RepositoryError::Backend {
                status: status.as_u16(),
                message,
                errors: Vec::new(),
            };
        }
    };
    let message = match json
        .get("message")
        .or_else(|| json.get("error"))
        .and_then(|v| v.as_str())
    {
        Some(m) => m.to_string(),
        None => status.to_string(),
    };
    let errors = json
        .get("errors")
        .and_then(|v| v.as_array())
        .map(|a| {
            a.iter()
                .filter_map(|v| serde_json::from_value(v.clone()).ok())
                .collect()
        })
        .unwrap_or_default();
    RepositoryError::Backend {
        status: status.as_u16(),
        message,
        errors,
    }
}

/// GET /restaurantCategories
pub fn get_restaurant_categories() -> Result<Vec<Category>, RepositoryError> {
    let base = base_url()?;
    let url = format!("{}/restaurantCategories", base);
    let headers = auth_headers()?;
    RUNTIME.block_on(async {
        let resp = CLIENT
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(decode_backend_error(status, &text));
        }
        let list: Vec<Category> =
            serde_json::from_str(&text).map_err(|e| RepositoryError::Transport(e.to_string()))?;
        Ok(list)
    })
}

/// POST /restaurantCategories - create category (server echoes the created row)
pub fn create_restaurant_category(data: &CategoryData) -> Result<Category, RepositoryError> {
    let base = base_url()?;
    let url = format!("{}/restaurantCategories", base);
    let headers = auth_headers()?;
    RUNTIME.block_on(async {
        let resp = CLIENT
            .post(&url)
            .headers(headers)
            .json(data)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(decode_backend_error(status, &text));
        }
        let mut created: Category =
            serde_json::from_str(&text).map_err(|e| RepositoryError::Transport(e.to_string()))?;
        if created.created_at.is_none() {
            created.created_at = Some(chrono::Utc::now().to_rfc3339());
        }
        Ok(created)
    })
}

/// Reqwest-backed repository the real app wiring injects into the workflow.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCategoryRepository;

impl CategoryRepository for HttpCategoryRepository {
    fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        get_restaurant_categories()
    }

    fn create(&self, data: &CategoryData) -> Result<Category, RepositoryError> {
        create_restaurant_category(data)
    }
}
