//! Apply a [`pageable_core::Pageable`] to SeaORM selects.
//! Parsing belongs to the ingress layer; this crate only consumes parsed values.

pub mod query;

pub use query::{FieldMap, PageableBuildError, PageableBuildResult, PageableExt};
