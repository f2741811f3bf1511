//! DeliverUS owner-app client core: the category-creation workflow, an HTTP
//! repository adapter, and drainable notification/log buffers for the host UI.
//!
//! The host (mobile shell) calls `set_backend_config` once at startup, sets
//! the session token after login, builds a workflow per create-category
//! screen visit, and polls `drain_notifications`/`drain_core_logs` to render
//! flash messages and console output.

use once_cell::sync::Lazy;
use std::sync::Mutex;

mod api;
mod error;
mod ids;
mod log_bridge;
mod models;
mod notify;
mod repository;
mod workflow;

pub use api::HttpCategoryRepository;
pub use error::{RepositoryError, SubmissionError, ValidationError};
pub use ids::CategoryId;
pub use log_bridge::drain_core_logs;
pub use models::{BackendFieldError, Category, CategoryData};
pub use notify::{
    drain_notifications, BufferedNotificationSink, Notification, NotificationKind,
    NotificationSink,
};
pub use repository::CategoryRepository;
pub use workflow::{CategoryCreationWorkflow, Navigation, Submission, MAX_NAME_LEN};

static BACKEND_CONFIG: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));
static AUTH_TOKEN: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));

/// Call once at startup with the backend API base URL
/// (e.g. "http://localhost:3000").
pub fn set_backend_config(base_url: String) {
    *BACKEND_CONFIG.lock().unwrap() = Some(base_url);
    core_log!("[deliverus_rs] backend config set");
}

pub fn get_base_url() -> Option<String> {
    BACKEND_CONFIG.lock().unwrap().clone()
}

/// Store the bearer token for the logged-in owner. Session-held only; the
/// host persists credentials itself.
pub fn set_auth_token(token: String) {
    *AUTH_TOKEN.lock().unwrap() = Some(token);
}

pub fn clear_auth_token() {
    *AUTH_TOKEN.lock().unwrap() = None;
}

pub fn is_logged_in() -> bool {
    AUTH_TOKEN.lock().unwrap().is_some()
}

pub(crate) fn get_auth_token() -> Option<String> {
    AUTH_TOKEN.lock().unwrap().clone()
}

/// Build the create-category screen's workflow wired to the real backend and
/// the global notification buffer. Fetches existing names immediately.
pub fn start_category_creation(
) -> CategoryCreationWorkflow<HttpCategoryRepository, BufferedNotificationSink> {
    CategoryCreationWorkflow::start(HttpCategoryRepository, BufferedNotificationSink)
}

/// Fetch all categories. The list screen calls this on entry and again when
/// it receives a navigation signal with `dirty: true`.
pub fn get_restaurant_categories() -> Result<Vec<Category>, RepositoryError> {
    api::get_restaurant_categories()
}
