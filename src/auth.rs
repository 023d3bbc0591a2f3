use serde::{Deserialize, Serialize};

use crate::validation::BodySchema;

/// Token handed out for every login. Stands in for a real JWT.
pub const PLACEHOLDER_TOKEN: &str = "<fake JWT token>";

/// Credentials posted to `/login`. Neither field is checked.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct AuthInput {
    pub email: String,
    pub password: String,
}

impl BodySchema for AuthInput {
    const REQUIRED_STRINGS: &'static [&'static str] = &["email", "password"];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub fn placeholder() -> Self {
        Self {
            token: PLACEHOLDER_TOKEN.to_string(),
        }
    }
}
