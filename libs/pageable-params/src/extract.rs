//! Axum integration: a `Pageable` extractor and the matching rejection.

use std::ops::Deref;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts, HeaderValue};
use axum::response::{IntoResponse, Response};
use pageable_core::Pageable;

use crate::parser::PageableParser;
use crate::problem::{pageable_error_to_problem, Problem, APPLICATION_PROBLEM_JSON};
use crate::query::QueryParams;

/// Axum response wrapper that renders `Problem` with correct status & content type.
#[derive(Debug, Clone)]
pub struct ProblemResponse(pub Problem);

impl From<Problem> for ProblemResponse {
    fn from(p: Problem) -> Self {
        Self(p)
    }
}

impl IntoResponse for ProblemResponse {
    fn into_response(self) -> Response {
        let status = self.0.status_code();
        let mut resp = axum::Json(self.0).into_response();
        *resp.status_mut() = status;
        resp.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(APPLICATION_PROBLEM_JSON),
        );
        resp
    }
}

/// Extractor for page/size/sort query parameters.
///
/// Uses the `PageableParser` found in request extensions (e.g. added with
/// `axum::Extension`), or the default parser otherwise.
///
/// ```ignore
/// async fn list_items(PageRequest(pageable): PageRequest) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct PageRequest(pub Pageable);

impl PageRequest {
    #[inline]
    pub fn into_inner(self) -> Pageable {
        self.0
    }
}

impl Deref for PageRequest {
    type Target = Pageable;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<PageRequest> for Pageable {
    #[inline]
    fn from(x: PageRequest) -> Self {
        x.0
    }
}

/// Parse the request query into a `Pageable`, mapping errors to a problem response.
pub fn extract_pageable(parts: &Parts) -> Result<Pageable, ProblemResponse> {
    let params = QueryParams::from_query_str(parts.uri.query().unwrap_or_default());
    let result = match parts.extensions.get::<PageableParser>() {
        Some(parser) => parser.parse(&params),
        None => PageableParser::default().parse(&params),
    };
    result.map_err(|e| pageable_error_to_problem(&e, parts.uri.path()).into())
}

impl<S> FromRequestParts<S> for PageRequest
where
    S: Send + Sync,
{
    type Rejection = ProblemResponse;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl core::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = extract_pageable(parts).map(PageRequest);
        async move { result }
    }
}
