use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::api::errors::ApiError;
use crate::domain::errors::{FootballError, FootballResult, ValidationErrors};

/// JSON body extractor whose failures are validation errors
///
/// A body that is not JSON, not an object, or has a field of the wrong type
/// is answered with 400 and a field to messages map, the same shape the
/// request validators produce. Target types must be `#[serde(default)]` so a
/// single field can be decoded on its own.
///
/// Usage:
/// ```rust,ignore
/// async fn create_player(
///     ValidatedJson(command): ValidatedJson<CreatePlayerCommand>,
/// ) -> Result<StatusCode, ApiError> { ... }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        Ok(ValidatedJson(decode(value)?))
    }
}

fn body_error(message: impl Into<String>) -> FootballError {
    let mut errors = ValidationErrors::new();
    errors.insert("body".to_string(), vec![message.into()]);
    FootballError::Validation(errors)
}

fn rejection_error(rejection: JsonRejection) -> ApiError {
    let err = match &rejection {
        JsonRejection::JsonSyntaxError(_)
        | JsonRejection::JsonDataError(_)
        | JsonRejection::MissingJsonContentType(_) => body_error(rejection.body_text()),
        _ => FootballError::Other(rejection.body_text()),
    };

    ApiError::from(err)
}

/// Decodes a JSON object, naming every field that fails on its own
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> FootballResult<T> {
    let Value::Object(fields) = value else {
        return Err(body_error("Request body must be a JSON object."));
    };

    let err = match serde_json::from_value(Value::Object(fields.clone())) {
        Ok(decoded) => return Ok(decoded),
        Err(err) => err,
    };

    let mut errors = ValidationErrors::new();
    for (field, field_value) in fields {
        let single: Map<String, Value> = Map::from_iter([(field.clone(), field_value)]);
        if let Err(field_err) = serde_json::from_value::<T>(Value::Object(single)) {
            errors
                .entry(field.clone())
                .or_default()
                .push(format!("'{}' has an invalid value: {}.", field, field_err));
        }
    }
    if errors.is_empty() {
        errors.insert("body".to_string(), vec![err.to_string()]);
    }

    Err(FootballError::Validation(errors))
}
