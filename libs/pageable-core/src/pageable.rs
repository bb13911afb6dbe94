use serde::{Deserialize, Serialize};

use crate::{Error, Sort};

/// Request for the `page`-th page (zero based) of `size` elements, optionally sorted.
///
/// `sort` is `None` when no sorting was requested at all, which callers can tell
/// apart from an explicit but empty [`Sort`].
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PageableRepr")]
pub struct Pageable {
    page: u64,
    size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<Sort>,
}

#[derive(Deserialize)]
struct PageableRepr {
    page: u64,
    size: u64,
    #[serde(default)]
    sort: Option<Sort>,
}

impl TryFrom<PageableRepr> for Pageable {
    type Error = Error;

    fn try_from(repr: PageableRepr) -> Result<Self, Self::Error> {
        Ok(Self::try_new(repr.page, repr.size)?.with_sort(repr.sort))
    }
}

impl Pageable {
    /// Unsorted request.
    ///
    /// # Panics
    /// Panics if `size` is 0. Use [`Pageable::try_new`] for values that come from outside.
    pub fn new(page: u64, size: u64) -> Self {
        assert!(size > 0, "page size must be at least 1");
        Self {
            page,
            size,
            sort: None,
        }
    }

    pub fn try_new(page: u64, size: u64) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::InvalidSizeValue);
        }
        Ok(Self::new(page, size))
    }

    /// # Panics
    /// Panics if `size` is 0.
    pub fn sorted(page: u64, size: u64, sort: Sort) -> Self {
        Self::new(page, size).with_sort(Some(sort))
    }

    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn sort(&self) -> Option<&Sort> {
        self.sort.as_ref()
    }

    pub fn is_sorted(&self) -> bool {
        self.sort.is_some()
    }

    /// Index of the first element of this page, saturating at `u64::MAX`.
    /// Use [`Pageable::checked_offset`] where a clamped value must not reach a query.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }

    /// `page * size`, or `None` when the product does not fit in a `u64`.
    pub fn checked_offset(&self) -> Option<u64> {
        self.page.checked_mul(self.size)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub fn next(&self) -> Self {
        self.at(self.page.saturating_add(1))
    }

    /// Previous page, or an equal copy of `self` on the first page.
    #[must_use]
    pub fn previous(&self) -> Self {
        self.at(self.page.saturating_sub(1))
    }

    #[must_use]
    pub fn first(&self) -> Self {
        self.at(0)
    }

    #[must_use]
    pub fn previous_or_first(&self) -> Self {
        if self.has_previous() {
            self.previous()
        } else {
            self.first()
        }
    }

    fn at(&self, page: u64) -> Self {
        Self {
            page,
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}
