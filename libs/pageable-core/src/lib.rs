//! Pagination value objects: sort orders, page requests and result pages.
//!
//! Everything here is an immutable value. Modifiers such as [`Order::with_direction`],
//! [`Sort::and`] or [`Pageable::next`] return new values instead of mutating in place.

pub mod page;
pub mod pageable;
pub mod sort;

pub use page::Page;
pub use pageable::Pageable;
pub use sort::{Direction, NullHandling, Order, Sort};

/// Every failure this crate and the parameter parser can report.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("wrong number of page parameter values, expected 1")]
    WrongPageValueCount,

    #[error("page value must be numeric greater or equal than 0")]
    InvalidPageValue,

    #[error("wrong number of size parameter values, expected 1")]
    WrongSizeValueCount,

    #[error("size value must be numeric greater or equal than 1")]
    InvalidSizeValue,

    #[error("wrong sort value provided: expected <p1>,<p2>,...,<pN>,<dir>")]
    EmptySortClause,

    #[error(
        "invalid value for order given, it has to be either 'asc' or 'desc' (case insensitive)"
    )]
    InvalidDirection,

    #[error(
        "invalid value for null handling given, it has to be 'native', 'nullsFirst' or 'nullsLast'"
    )]
    InvalidNullHandling,

    #[error("invalid content provided: expected an array")]
    InvalidContent,
}

pub type Result<T> = std::result::Result<T, Error>;
