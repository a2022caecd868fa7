use serde::{Deserialize, Serialize};

use crate::common::ItemList;

/// HTTP method of one element in a batched request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// One API call inside a batch. `body` is the untyped request payload,
/// passed through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequestElement {
    pub method: HttpMethod,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept_type: Option<String>,
}

impl BatchRequestElement {
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            body: None,
            content_type: None,
            accept_type: None,
        }
    }
}

pub type BatchRequest = ItemList<BatchRequestElement>;

/// Outcome of one batched call: its HTTP status and untyped response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponseElement {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,
}

impl BatchResponseElement {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Responses to a batch, in request order, plus whether every element
/// succeeded (a batch is all-or-nothing on the server).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResponse {
    #[serde(default = "Vec::new")]
    pub items: Vec<BatchResponseElement>,
    #[serde(default)]
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_request_wire_shape() {
        let request: BatchRequest = vec![
            BatchRequestElement::new(HttpMethod::Get, "/api/v11/clusters/prod"),
            BatchRequestElement {
                body: Some(serde_json::json!({"items": [{"name": "u1"}]})),
                content_type: Some("application/json".to_string()),
                ..BatchRequestElement::new(HttpMethod::Post, "/api/v11/users")
            },
        ]
        .into();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["items"][0]["method"], "GET");
        assert_eq!(json["items"][1]["body"]["items"][0]["name"], "u1");
    }

    #[test]
    fn test_batch_response_success_per_element() {
        let element = BatchResponseElement {
            status_code: 201,
            response: None,
        };
        assert!(element.is_success());
        let failed = BatchResponseElement {
            status_code: 404,
            response: Some(serde_json::json!({"message": "no such cluster"})),
        };
        assert!(!failed.is_success());
    }

    #[test]
    fn test_batch_response_round_trip() {
        let response = BatchResponse {
            items: vec![BatchResponseElement {
                status_code: 200,
                response: Some(serde_json::json!({"name": "prod"})),
            }],
            success: true,
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(serde_json::from_str::<BatchResponse>(&json).unwrap(), response);
    }
}
