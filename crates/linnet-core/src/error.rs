use serde::{Deserialize, Serialize};

/// Structured error branch of an API response: `{"error":{"message":"..."}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }

    pub fn message(&self) -> &str {
        &self.error.message
    }
}

impl From<ApiErrorBody> for ErrorDetail {
    fn from(body: ApiErrorBody) -> Self {
        body.error
    }
}
