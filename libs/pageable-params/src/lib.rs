//! Parsing of page/size/sort request parameters into a [`Pageable`].
//!
//! Transport-agnostic: the input is a parameter name → values map. Helpers decode
//! URL query strings, and the `axum` feature adds a request extractor.

pub mod config;
pub mod parser;
pub mod problem;
pub mod query;
pub mod sort;

#[cfg(feature = "axum")]
pub mod extract;

pub use config::ParserConfig;
pub use parser::{parse, PageableParser};
pub use problem::{error_code, pageable_error_to_problem, Problem};
pub use query::{ParamSource, QueryParams};
pub use sort::{parse_sort_clause, parse_sort_values};

#[cfg(feature = "axum")]
pub use extract::{PageRequest, ProblemResponse};

// Re-export the value types so callers need only this crate.
pub use pageable_core::{Direction, Error, NullHandling, Order, Page, Pageable, Sort};
