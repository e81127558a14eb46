use thiserror::Error;

use crate::error::Error as CoreError;
use crate::providers::route53::types::ApiError;

#[derive(Error, Debug)]
pub enum Route53Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("credential error: {0}")]
    Credential(String),
}

impl From<ApiError> for Route53Error {
    fn from(err: ApiError) -> Self {
        Route53Error::Api {
            code: err.code,
            message: err.message,
        }
    }
}

/// Failures while reading the record surface as lookup errors.
pub fn lookup_error(e: Route53Error) -> CoreError {
    CoreError::RecordLookup(e.to_string())
}

/// Failures while submitting the change batch surface as update errors.
pub fn update_error(e: Route53Error) -> CoreError {
    CoreError::RecordUpdate(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_api_error_conversion() {
        let api = ApiError {
            code: "InvalidChangeBatch".to_string(),
            message: "malformed".to_string(),
        };
        let err: Route53Error = api.into();
        assert_matches!(err, Route53Error::Api { ref code, .. } if code == "InvalidChangeBatch");
        assert_eq!(err.to_string(), "API error InvalidChangeBatch: malformed");
    }

    #[test]
    fn test_stage_mapping() {
        let api = || Route53Error::Api {
            code: "Throttling".to_string(),
            message: "slow down".to_string(),
        };
        assert_matches!(lookup_error(api()), CoreError::RecordLookup(msg) if msg.contains("Throttling"));
        assert_matches!(update_error(api()), CoreError::RecordUpdate(msg) if msg.contains("Throttling"));
    }
}
