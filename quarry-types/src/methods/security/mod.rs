use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// User definition sent as the body of a put user request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PutUserParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutUserResponse {
    pub created: bool,
}

/// A user as reported by the security API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(default)]
    pub enabled: bool,
}

/// Users keyed by username.
pub type GetUserResponse = HashMap<String, User>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub found: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordParams {
    pub password: String,
}

// The endpoints below acknowledge with an empty JSON object. Decoding into
// these markers still validates the response shape.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnableUserResponse {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisableUserResponse {}
