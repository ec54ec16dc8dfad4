//! Response shaping for the Policy Cost Engine API.
//!
//! The existing consumers of this service parse a pretty-printed JSON body
//! with a fixed key order, so the response is carried as a pre-rendered
//! string rather than an `axum::Json` value.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::calculation::PricedPolicy;
use crate::error::EngineError;
use crate::models::PolicyDocument;

/// Success message carried verbatim from the existing service for
/// consumer compatibility.
pub const SUCCESS_MESSAGE: &str = "Go Serverless v1.0! Your function executed successfully!";

/// A finished reply: an HTTP status code and a pretty-printed JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyReply {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response body, 2-space-indented JSON.
    pub body: String,
}

/// Body of a successful pricing response.
#[derive(Debug, Serialize)]
struct SuccessBody {
    message: &'static str,
    input: PolicyDocument,
    data: ResponseData,
}

#[derive(Debug, Serialize)]
struct ResponseData {
    policy: PricedPolicy,
}

/// Body of any failure response.
#[derive(Debug, Serialize)]
struct FailureBody {
    message: String,
}

/// Renders a value as 2-space-indented JSON.
///
/// These body types have no fallible serialize paths; the fallback keeps
/// the handler total without panicking.
fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

impl PolicyReply {
    /// Builds the 200 reply for a priced policy.
    ///
    /// `input` echoes the fetched document unmodified; the priced workers
    /// and totals go under `data.policy`.
    pub fn success(input: PolicyDocument, priced: PricedPolicy) -> Self {
        let body = SuccessBody {
            message: SUCCESS_MESSAGE,
            input,
            data: ResponseData { policy: priced },
        };
        Self {
            status: StatusCode::OK,
            body: pretty(&body),
        }
    }
}

impl From<EngineError> for PolicyReply {
    fn from(error: EngineError) -> Self {
        let status = match &error {
            EngineError::DataUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            EngineError::Transport { .. } | EngineError::MalformedDocument { .. } => {
                StatusCode::BAD_GATEWAY
            }
            EngineError::InvalidPercentage { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            body: pretty(&FailureBody {
                message: error.to_string(),
            }),
        }
    }
}

impl IntoResponse for PolicyReply {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::price_policy;
    use serde_json::Value;

    fn sample_document() -> PolicyDocument {
        serde_json::from_str(
            r#"{
                "workers": [{ "name": "Ana", "age": 30, "childs": 0 }],
                "has_dental_care": false,
                "company_percentage": 50
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_success_reply_shape() {
        let document = sample_document();
        let priced = price_policy(&document, 50.0);
        let reply = PolicyReply::success(document, priced);

        assert_eq!(reply.status, StatusCode::OK);

        let body: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(body["message"], SUCCESS_MESSAGE);
        assert_eq!(body["input"]["company_percentage"], 50.0);
        assert_eq!(body["data"]["policy"]["workers"][0]["name"], "Ana");
        assert!(body["data"]["policy"]["total"]["company"].is_number());
    }

    #[test]
    fn test_success_reply_key_order() {
        let document = sample_document();
        let priced = price_policy(&document, 50.0);
        let reply = PolicyReply::success(document, priced);

        let body: Value = serde_json::from_str(&reply.body).unwrap();
        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["message", "input", "data"]);
    }

    #[test]
    fn test_body_is_two_space_indented() {
        let document = sample_document();
        let priced = price_policy(&document, 50.0);
        let reply = PolicyReply::success(document, priced);

        assert!(reply.body.starts_with("{\n  \"message\""));
    }

    #[test]
    fn test_data_unavailable_maps_to_503_with_exact_message() {
        let reply = PolicyReply::from(EngineError::DataUnavailable);
        assert_eq!(reply.status, StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(
            body["message"],
            "Service Unavailable: Error al cargar los datos"
        );
        // The failure body carries nothing but the message.
        assert_eq!(body.as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_transport_maps_to_502() {
        let reply = PolicyReply::from(EngineError::Transport {
            message: "connection refused".to_string(),
        });
        assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_malformed_document_maps_to_502() {
        let reply = PolicyReply::from(EngineError::MalformedDocument {
            message: "missing field `workers`".to_string(),
        });
        assert_eq!(reply.status, StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_invalid_percentage_maps_to_422() {
        let reply = PolicyReply::from(EngineError::InvalidPercentage { value: 130.0 });
        assert_eq!(reply.status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
