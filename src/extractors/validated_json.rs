use crate::models::ErrorResponse;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

/// JSON body extractor where every schema failure is a 422.
///
/// A body without `Content-Type` is parsed as JSON. Any `application/*json`
/// type goes through axum's JSON parsing. Other content types are rejected.
/// Malformed JSON, missing fields and mistyped fields all answer
/// `422 Unprocessable Entity` with an [`ErrorResponse`], so the handler only
/// ever sees a valid value.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req.headers().get(header::CONTENT_TYPE).cloned();

        // Failing to read the body at all is a transport error, not a schema one
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let parsed = match content_type {
            None => serde_json::from_slice::<T>(&body)
                .map_err(|e| format!("Failed to deserialize the JSON body: {}", e)),
            Some(value) if is_json_content_type(&value) => Json::<T>::from_bytes(&body)
                .map(|Json(value)| value)
                .map_err(|rejection| rejection.body_text()),
            Some(value) => Err(format!(
                "Expected a JSON body, got content type {:?}",
                value
            )),
        };

        parsed.map(ValidatedJson).map_err(|message| {
            warn!("Rejected request body: {}", message);
            let status = StatusCode::UNPROCESSABLE_ENTITY;
            (status, Json(ErrorResponse::new(status, message))).into_response()
        })
    }
}

/// `application/json` and `application/<anything>+json`, parameters ignored
fn is_json_content_type(value: &HeaderValue) -> bool {
    let Ok(value) = value.to_str() else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence
        .strip_prefix("application/")
        .is_some_and(|subtype| subtype == "json" || subtype.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;
    use axum::body::{to_bytes, Body};
    use serde_json::Value;

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/items/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    async fn extract(req: Request) -> Result<Item, Response> {
        ValidatedJson::<Item>::from_request(req, &())
            .await
            .map(|ValidatedJson(item)| item)
    }

    async fn status_and_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn body_without_content_type_is_parsed_as_json() {
        let item = extract(request(None, r#"{"name": "Widget", "price": 9.99}"#))
            .await
            .unwrap();
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
    }

    #[tokio::test]
    async fn json_subtypes_and_parameters_are_accepted() {
        for content_type in [
            "application/json",
            "application/json; charset=utf-8",
            "Application/JSON",
            "application/vnd.api+json",
        ] {
            let item = extract(request(Some(content_type), r#"{"name": "A", "price": 1}"#))
                .await
                .unwrap();
            assert_eq!(item.price, 1.0, "content type {content_type}");
        }
    }

    #[tokio::test]
    async fn every_schema_failure_is_unprocessable() {
        let cases = [
            (Some("application/json"), r#"{"name": "Widget""#),
            (Some("application/json"), r#"{"name": "Widget"}"#),
            (Some("application/json"), r#"{"name": "Widget", "price": "free"}"#),
            (Some("text/plain"), r#"{"name": "Widget", "price": 9.99}"#),
            (None, r#"{"name": "Widget""#),
            (None, ""),
        ];
        for (content_type, body) in cases {
            let response = extract(request(content_type, body)).await.unwrap_err();
            let (status, json) = status_and_json(response).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{content_type:?} {body}");
            assert_eq!(json["code"], 422);
            assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
        }
    }

    #[test]
    fn json_content_type_detection() {
        assert!(is_json_content_type(&HeaderValue::from_static("application/json")));
        assert!(is_json_content_type(&HeaderValue::from_static("application/problem+json")));
        assert!(!is_json_content_type(&HeaderValue::from_static("text/json")));
        assert!(!is_json_content_type(&HeaderValue::from_static("application/jsonp")));
        assert!(!is_json_content_type(&HeaderValue::from_static("multipart/form-data")));
    }
}
