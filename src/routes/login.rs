use axum::Json;

use crate::auth::{AuthInput, AuthToken};
use crate::validation::ValidJson;

/// POST /login — accepts any well-formed credentials and returns the placeholder token
pub async fn login(ValidJson(_input): ValidJson<AuthInput>) -> Json<AuthToken> {
    Json(AuthToken::placeholder())
}
