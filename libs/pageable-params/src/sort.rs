//! Grammar of a single `sort` parameter value.
//!
//! `p1,p2,...,pN,dir` sorts every listed property in direction `dir`; a value without
//! a comma names one property sorted ascending.

use pageable_core::{Direction, Error, Order, Sort};

/// Parse one raw sort value into its orders.
pub fn parse_sort_clause(raw: &str) -> Result<Sort, Error> {
    let fields: Vec<&str> = raw.split(',').collect();
    match fields.as_slice() {
        [] | [""] => Err(Error::EmptySortClause),
        [property] => Ok(Sort::from(Order::asc(*property))),
        [properties @ .., direction] => {
            let direction: Direction = direction.parse()?;
            Ok(Sort::by(direction, properties.iter().copied()))
        }
    }
}

/// Parse every raw value in order and concatenate the results.
///
/// Returns `Ok(None)` when there is nothing to parse, so "no sort requested" survives.
pub fn parse_sort_values<I, S>(values: I) -> Result<Option<Sort>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .try_fold(None, |acc: Option<Sort>, raw| -> Result<_, Error> {
            let sort = parse_sort_clause(raw.as_ref())?;
            Ok(Some(match acc {
                Some(acc) => acc.and(&sort),
                None => sort,
            }))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_property_defaults_to_ascending() {
        let sort = parse_sort_clause("a").expect("parse");
        assert_eq!(sort.orders(), &[Order::asc("a")]);
    }

    #[test]
    fn trailing_direction_applies_to_all_properties() {
        let sort = parse_sort_clause("a,b,desc").expect("parse");
        assert_eq!(sort.orders(), &[Order::desc("a"), Order::desc("b")]);
    }

    #[test]
    fn direction_is_case_insensitive() {
        let sort = parse_sort_clause("a,DESC").expect("parse");
        assert_eq!(sort.orders(), &[Order::desc("a")]);
    }

    #[test]
    fn empty_value_is_rejected() {
        assert_eq!(parse_sort_clause(""), Err(Error::EmptySortClause));
    }

    #[test]
    fn non_direction_trailing_field_is_rejected() {
        assert_eq!(parse_sort_clause("a,b"), Err(Error::InvalidDirection));
        assert_eq!(parse_sort_clause("a, desc"), Err(Error::InvalidDirection));
        assert_eq!(parse_sort_clause(","), Err(Error::InvalidDirection));
    }

    #[test]
    fn property_names_are_not_validated() {
        let sort = parse_sort_clause("address.city,asc").expect("parse");
        assert_eq!(sort.orders(), &[Order::asc("address.city")]);

        let sort = parse_sort_clause(",asc").expect("parse");
        assert_eq!(sort.orders(), &[Order::asc("")]);
    }

    #[test]
    fn values_concatenate_in_given_order() {
        let sort = parse_sort_values(["a,desc", "b"])
            .expect("parse")
            .expect("some");
        assert_eq!(sort.orders(), &[Order::desc("a"), Order::asc("b")]);
    }

    #[test]
    fn no_values_means_no_sort() {
        assert_eq!(parse_sort_values(Vec::<String>::new()), Ok(None));
    }

    #[test]
    fn first_bad_value_aborts() {
        assert_eq!(
            parse_sort_values(["a,desc", "", "b,sideways"]),
            Err(Error::EmptySortClause)
        );
    }
}
