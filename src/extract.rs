//! Request parsing shared by every resource handler.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::errors::AppError;

/// JSON body extractor whose failures become a `success: false` envelope
/// (400) instead of axum's plain-text rejection. `Content-Type` is not checked.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody(e.body_text()))?;
        parse_object(&bytes).map(JsonBody)
    }
}

/// Decode a body that must be a single JSON object.
pub fn parse_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::InvalidBody("request body is empty".to_string()));
    }

    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::InvalidBody(e.to_string()))?;
    if !value.is_object() {
        return Err(AppError::InvalidBody("expected a JSON object".to_string()));
    }

    serde_json::from_value(value).map_err(|e| AppError::InvalidBody(e.to_string()))
}

/// `axum::extract::Query` with a failure envelope as its rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);

/// `axum::extract::Path` with a failure envelope as its rejection.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// `?id=` as sent by the admin panel for updates and deletes.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

impl IdQuery {
    pub fn require(self) -> Result<String, AppError> {
        self.id
            .filter(|id| !id.trim().is_empty())
            .ok_or(AppError::MissingId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    #[test]
    fn test_parse_object() {
        let map: Map<String, Value> = parse_object(br#"{"name":"Ana"}"#).unwrap();
        assert_eq!(map["name"], "Ana");
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_object::<Map<String, Value>>(b"{\"name\":").unwrap_err();
        assert!(matches!(err, AppError::InvalidBody(_)));
    }

    #[test]
    fn test_parse_rejects_empty_body() {
        let err = parse_object::<Map<String, Value>>(b"  \n").unwrap_err();
        assert_eq!(err.to_string(), "invalid request body: request body is empty");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_object::<Map<String, Value>>(b"[1,2,3]").unwrap_err();
        assert_eq!(err.to_string(), "invalid request body: expected a JSON object");
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let err = parse_object::<Map<String, Value>>(b"{\"name\":\"\xff\"}").unwrap_err();
        assert!(matches!(err, AppError::InvalidBody(_)));
    }

    #[test]
    fn test_id_query_require() {
        assert_eq!(IdQuery { id: Some("7".into()) }.require().unwrap(), "7");
        assert!(matches!(
            IdQuery { id: Some(" ".into()) }.require(),
            Err(AppError::MissingId)
        ));
        assert!(matches!(IdQuery::default().require(), Err(AppError::MissingId)));
    }
}
