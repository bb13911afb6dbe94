use std::collections::HashMap;

use pageable_core::{Direction, NullHandling, Order as SortOrder, Pageable, Sort};
use sea_orm::{
    sea_query::{Func, NullOrdering, Order, SimpleExpr},
    ColumnTrait, EntityTrait, IntoSimpleExpr, QueryOrder, QuerySelect,
};
use thiserror::Error;

/// Whitelist of sortable API property names and the columns they map to.
/// Lookups are case-insensitive.
#[derive(Clone)]
pub struct FieldMap<E: EntityTrait> {
    map: HashMap<String, E::Column>,
}

impl<E: EntityTrait> Default for FieldMap<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EntityTrait> FieldMap<E> {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn insert(mut self, api_name: impl Into<String>, col: E::Column) -> Self {
        self.map.insert(api_name.into().to_lowercase(), col);
        self
    }

    pub fn get(&self, name: &str) -> Option<&E::Column> {
        self.map.get(&name.to_lowercase())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageableBuildError {
    #[error("unknown sort field: {0}")]
    UnknownField(String),

    #[error("offset of page {page} with size {size} overflows")]
    OffsetOverflow { page: u64, size: u64 },
}

pub type PageableBuildResult<T> = Result<T, PageableBuildError>;

fn resolve_column<E: EntityTrait>(
    fld_map: &FieldMap<E>,
    order: &SortOrder,
) -> PageableBuildResult<E::Column>
where
    E::Column: Copy,
{
    fld_map.get(order.property()).copied().ok_or_else(|| {
        tracing::debug!(field = %order.property(), "sort field not in field map");
        PageableBuildError::UnknownField(order.property().to_string())
    })
}

fn sort_expr<C: ColumnTrait>(col: C, order: &SortOrder) -> SimpleExpr {
    if order.ignore_case() {
        Func::lower(col.into_simple_expr()).into()
    } else {
        col.into_simple_expr()
    }
}

/// Extension trait for applying sorting and paging to a select.
pub trait PageableExt<E: EntityTrait>: Sized {
    /// Add `ORDER BY` terms for every order of `sort`, in precedence order.
    fn apply_sort(self, sort: &Sort, fld_map: &FieldMap<E>) -> PageableBuildResult<Self>;

    /// Sort (if requested), then `OFFSET page * size` and `LIMIT size`.
    /// Fails instead of clamping when `page * size` overflows.
    fn apply_pageable(
        self,
        pageable: &Pageable,
        fld_map: &FieldMap<E>,
    ) -> PageableBuildResult<Self>;
}

impl<E> PageableExt<E> for sea_orm::Select<E>
where
    E: EntityTrait,
    E::Column: ColumnTrait + Copy,
{
    fn apply_sort(self, sort: &Sort, fld_map: &FieldMap<E>) -> PageableBuildResult<Self> {
        let mut query = self;

        for order in sort {
            let col = resolve_column(fld_map, order)?;
            let expr = sort_expr(col, order);

            let sea_order = match order.direction() {
                Direction::Asc => Order::Asc,
                Direction::Desc => Order::Desc,
            };

            query = match order.null_handling() {
                NullHandling::Native => query.order_by(expr, sea_order),
                NullHandling::NullsFirst => {
                    query.order_by_with_nulls(expr, sea_order, NullOrdering::First)
                }
                NullHandling::NullsLast => {
                    query.order_by_with_nulls(expr, sea_order, NullOrdering::Last)
                }
            };
        }

        Ok(query)
    }

    fn apply_pageable(
        self,
        pageable: &Pageable,
        fld_map: &FieldMap<E>,
    ) -> PageableBuildResult<Self> {
        let offset = pageable.checked_offset().ok_or(PageableBuildError::OffsetOverflow {
            page: pageable.page(),
            size: pageable.size(),
        })?;
        let query = match pageable.sort() {
            Some(sort) => self.apply_sort(sort, fld_map)?,
            None => self,
        };
        Ok(query.offset(offset).limit(pageable.size()))
    }
}
