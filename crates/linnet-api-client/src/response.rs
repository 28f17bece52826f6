use linnet_core::{ApiErrorBody, ErrorDetail};
use reqwest::StatusCode;
use serde::Deserialize;

/// Success payload of `GET /health` as seen by a client.
///
/// `status` is optional so that a server omitting it can still be rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HealthPayload {
    #[serde(default)]
    pub status: Option<String>,
}

/// Either the decoded success payload or the structured error branch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiBody<T> {
    Data(T),
    Error(ErrorDetail),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: ApiBody<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(status: StatusCode, data: T) -> Self {
        Self {
            status,
            body: ApiBody::Data(data),
        }
    }

    pub fn error(status: StatusCode, detail: ErrorDetail) -> Self {
        Self {
            status,
            body: ApiBody::Error(detail),
        }
    }

    pub fn data_ref(&self) -> Option<&T> {
        match &self.body {
            ApiBody::Data(data) => Some(data),
            ApiBody::Error(_) => None,
        }
    }

    pub fn error_ref(&self) -> Option<&ErrorDetail> {
        match &self.body {
            ApiBody::Data(_) => None,
            ApiBody::Error(detail) => Some(detail),
        }
    }
}

/// Builds the error branch for a non-2xx response body.
///
/// Prefers `{"error":{"message":...}}`, then the raw body text, then the
/// status reason phrase.
pub(crate) fn error_detail(status: StatusCode, text: &str) -> ErrorDetail {
    if let Ok(body) = serde_json::from_str::<ApiErrorBody>(text) {
        return body.into();
    }

    let text = text.trim();
    let message = if text.is_empty() {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string())
    } else {
        text.to_string()
    };

    ErrorDetail { message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_wins() {
        let detail = error_detail(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"boom"}}"#,
        );
        assert_eq!(detail.message, "boom");
    }

    #[test]
    fn plain_text_body_becomes_message() {
        let detail = error_detail(StatusCode::BAD_GATEWAY, "upstream gone\n");
        assert_eq!(detail.message, "upstream gone");
    }

    #[test]
    fn empty_body_uses_reason_phrase() {
        let detail = error_detail(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(detail.message, "Service Unavailable");
    }

    #[test]
    fn accessors_follow_branch() {
        let ok = ApiResponse::data(StatusCode::OK, HealthPayload::default());
        assert!(ok.data_ref().is_some());
        assert!(ok.error_ref().is_none());

        let err: ApiResponse<HealthPayload> = ApiResponse::error(
            StatusCode::NOT_FOUND,
            ErrorDetail {
                message: "missing".into(),
            },
        );
        assert!(err.data_ref().is_none());
        assert_eq!(err.error_ref().map(|d| d.message.as_str()), Some("missing"));
    }
}
