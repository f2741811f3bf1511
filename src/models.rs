//! Data models for restaurant categories.
//! Wire format uses camelCase keys and string dates (JSON); ids are typed.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Restaurant category as the backend returns it. Dates are optional because
/// the create response may omit them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating a category. Only the name is user-supplied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub name: String,
}

/// One field-level error reported by the backend on a rejected request
/// (express-validator shape: `{ "param": ..., "msg": ... }`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendFieldError {
    pub param: String,
    pub msg: String,
}
