use serde_json::Value;
use thiserror::Error;

use crate::{User, UserProfile};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Username and password are required")]
    Missing,
    #[error("Username and password must be strings")]
    InvalidType,
    #[error("Username must be at least 3 characters and password at least 6 characters")]
    InvalidLength,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl CredentialError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing => "MISSING_CREDENTIALS",
            Self::InvalidType => "INVALID_INPUT_TYPE",
            Self::InvalidLength => "INVALID_INPUT_LENGTH",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
        }
    }

    /// True for shape/length problems, false for a failed lookup.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::InvalidCredentials)
    }
}

/// Borrowed username/password pulled out of a login body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

fn is_blank(v: Option<&Value>) -> bool {
    match v {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Runs the guard chain over a raw JSON body. Anything that is not an object
/// counts as carrying no fields.
pub fn validate_credentials(body: &Value) -> Result<Credentials<'_>, CredentialError> {
    let username = body.get("username");
    let password = body.get("password");
    if is_blank(username) || is_blank(password) {
        return Err(CredentialError::Missing);
    }
    let (Some(Value::String(username)), Some(Value::String(password))) = (username, password) else {
        return Err(CredentialError::InvalidType);
    };
    if username.chars().count() < MIN_USERNAME_LEN || password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialError::InvalidLength);
    }
    Ok(Credentials { username: username.as_str(), password: password.as_str() })
}

/// Exact username + password match against the user table.
pub fn authenticate(users: &[User], creds: Credentials<'_>) -> Result<UserProfile, CredentialError> {
    users
        .iter()
        .find(|u| u.username == creds.username && u.password == creds.password)
        .map(UserProfile::from)
        .ok_or(CredentialError::InvalidCredentials)
}
