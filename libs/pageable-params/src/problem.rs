//! RFC 9457 problem details for pagination parameter errors.

use http::StatusCode;
use pageable_core::Error;
use serde::{Deserialize, Serialize};

/// Content type for Problem Details as per RFC 9457.
pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// RFC 9457 Problem Details for HTTP APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// The HTTP status code for this occurrence of the problem.
    pub status: u16,
    /// A human-readable explanation specific to this occurrence of the problem.
    pub detail: String,
    /// A URI reference that identifies the specific occurrence of the problem.
    pub instance: String,
    /// Machine-readable error code.
    pub code: String,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_url: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: String::new(),
            code: String::new(),
        }
    }

    pub fn with_instance(mut self, uri: impl Into<String>) -> Self {
        self.instance = uri.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Stable machine code for each error kind.
pub fn error_code(e: &Error) -> &'static str {
    match e {
        Error::WrongPageValueCount => "PAGE_VALUE_COUNT",
        Error::InvalidPageValue => "PAGE_VALUE_INVALID",
        Error::WrongSizeValueCount => "SIZE_VALUE_COUNT",
        Error::InvalidSizeValue => "SIZE_VALUE_INVALID",
        Error::EmptySortClause => "SORT_CLAUSE_EMPTY",
        Error::InvalidDirection => "SORT_DIRECTION_INVALID",
        Error::InvalidNullHandling => "SORT_NULL_HANDLING_INVALID",
        Error::InvalidContent => "PAGE_CONTENT_INVALID",
    }
}

/// Map a pagination error to a Problem. Parameter errors are the caller's fault (400);
/// invalid page content is a server-side bug (500).
pub fn pageable_error_to_problem(e: &Error, instance: &str) -> Problem {
    let (status, title) = match e {
        Error::WrongPageValueCount | Error::InvalidPageValue => {
            (StatusCode::BAD_REQUEST, "Invalid Page Parameter")
        }
        Error::WrongSizeValueCount | Error::InvalidSizeValue => {
            (StatusCode::BAD_REQUEST, "Invalid Size Parameter")
        }
        Error::EmptySortClause | Error::InvalidDirection | Error::InvalidNullHandling => {
            (StatusCode::BAD_REQUEST, "Invalid Sort Parameter")
        }
        Error::InvalidContent => (StatusCode::INTERNAL_SERVER_ERROR, "Invalid Page Content"),
    };
    Problem::new(status, title, e.to_string())
        .with_code(error_code(e))
        .with_instance(instance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_errors_are_bad_requests() {
        let p = pageable_error_to_problem(&Error::InvalidDirection, "/items");
        assert_eq!(p.status, 400);
        assert_eq!(p.code, "SORT_DIRECTION_INVALID");
        assert_eq!(p.instance, "/items");
        assert_eq!(p.type_url, "about:blank");
        assert!(p.detail.contains("'asc' or 'desc'"));
    }

    #[test]
    fn invalid_content_is_server_error() {
        let p = pageable_error_to_problem(&Error::InvalidContent, "/");
        assert_eq!(p.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn problem_serializes_type_field() {
        let p = pageable_error_to_problem(&Error::WrongPageValueCount, "/x");
        let v = serde_json::to_value(&p).expect("serialize");
        assert_eq!(v["type"], "about:blank");
        assert_eq!(v["code"], "PAGE_VALUE_COUNT");
        assert_eq!(v["status"], 400);
    }
}
