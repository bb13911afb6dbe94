use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Sort direction of a single property.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Direction::Asc
    }

    pub fn is_descending(self) -> bool {
        self == Direction::Desc
    }

    /// Parse a direction that is known to be valid, e.g. a literal in code.
    ///
    /// # Panics
    /// Panics if `value` is neither `asc` nor `desc`. Never call this on user input.
    pub fn must_parse(value: &str) -> Self {
        match value.parse() {
            Ok(direction) => direction,
            Err(e) => panic!("{e}: {value:?}"),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Direction::Asc),
            "desc" => Ok(Direction::Desc),
            _ => Err(Error::InvalidDirection),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hint to the backing store on where null-valued sort keys go.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NullHandling {
    /// Let the store decide.
    #[default]
    Native,
    NullsFirst,
    NullsLast,
}

impl NullHandling {
    pub fn as_str(self) -> &'static str {
        match self {
            NullHandling::Native => "native",
            NullHandling::NullsFirst => "nullsFirst",
            NullHandling::NullsLast => "nullsLast",
        }
    }

    /// Parse a null handling value that is known to be valid.
    ///
    /// # Panics
    /// Panics on anything but `native`, `nullsFirst` or `nullsLast` (any case).
    pub fn must_parse(value: &str) -> Self {
        match value.parse() {
            Ok(null_handling) => null_handling,
            Err(e) => panic!("{e}: {value:?}"),
        }
    }
}

impl FromStr for NullHandling {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "native" => Ok(NullHandling::Native),
            "nullsfirst" => Ok(NullHandling::NullsFirst),
            "nullslast" => Ok(NullHandling::NullsLast),
            _ => Err(Error::InvalidNullHandling),
        }
    }
}

impl fmt::Display for NullHandling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property/direction pair of a [`Sort`].
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    property: String,
    #[serde(default)]
    direction: Direction,
    #[serde(default)]
    ignore_case: bool,
    #[serde(default)]
    null_handling: NullHandling,
}

impl Order {
    pub fn by(property: impl Into<String>, direction: Direction) -> Self {
        Self {
            property: property.into(),
            direction,
            ignore_case: false,
            null_handling: NullHandling::Native,
        }
    }

    /// Ascending order on `property`.
    pub fn asc(property: impl Into<String>) -> Self {
        Self::by(property, Direction::Asc)
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self::by(property, Direction::Desc)
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn null_handling(&self) -> NullHandling {
        self.null_handling
    }

    pub fn is_ascending(&self) -> bool {
        self.direction.is_ascending()
    }

    pub fn is_descending(&self) -> bool {
        self.direction.is_descending()
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = property.into();
        self
    }

    pub fn ignoring_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn with_null_handling(mut self, null_handling: NullHandling) -> Self {
        self.null_handling = null_handling;
        self
    }

    pub fn nulls_native(self) -> Self {
        self.with_null_handling(NullHandling::Native)
    }

    pub fn nulls_first(self) -> Self {
        self.with_null_handling(NullHandling::NullsFirst)
    }

    pub fn nulls_last(self) -> Self {
        self.with_null_handling(NullHandling::NullsLast)
    }
}

/// Ordered list of [`Order`]s. The first order is the primary key, later ones break ties.
#[cfg_attr(feature = "with-utoipa", derive(utoipa::ToSchema))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sort {
    orders: Vec<Order>,
}

impl Sort {
    pub fn new(orders: impl IntoIterator<Item = Order>) -> Self {
        Self {
            orders: orders.into_iter().collect(),
        }
    }

    /// A sort without any order.
    pub fn unsorted() -> Self {
        Self::default()
    }

    /// All `properties` in the given `direction`, in the order given.
    pub fn by<I, S>(direction: Direction, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        properties
            .into_iter()
            .map(|p| Order::by(p, direction))
            .collect()
    }

    pub fn by_properties<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::by(Direction::Asc, properties)
    }

    /// Orders of `self` followed by the orders of `other`.
    #[must_use]
    pub fn and(&self, other: &Sort) -> Sort {
        let mut orders = Vec::with_capacity(self.orders.len() + other.orders.len());
        orders.extend_from_slice(&self.orders);
        orders.extend_from_slice(&other.orders);
        Sort { orders }
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Order> {
        self.orders.iter()
    }

    /// First order on `property`, if any.
    pub fn order_for(&self, property: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.property == property)
    }

    /// Render as `-created_at,+id`, the form string-keyed stores accept.
    /// Only property and direction survive the rendering.
    pub fn to_signed_tokens(&self) -> String {
        self.orders
            .iter()
            .map(|o| {
                let sign = match o.direction {
                    Direction::Asc => '+',
                    Direction::Desc => '-',
                };
                format!("{sign}{}", o.property)
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse `-created_at,+id`. A bare name is ascending.
    pub fn from_signed_tokens(raw: &str) -> Result<Self, Error> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::EmptySortClause);
        }
        raw.split(',')
            .map(|token| {
                let token = token.trim();
                let (property, direction) = if let Some(rest) = token.strip_prefix('-') {
                    (rest, Direction::Desc)
                } else if let Some(rest) = token.strip_prefix('+') {
                    (rest, Direction::Asc)
                } else {
                    (token, Direction::Asc)
                };
                if property.is_empty() {
                    return Err(Error::EmptySortClause);
                }
                Ok(Order::by(property, direction))
            })
            .collect()
    }
}

impl From<Order> for Sort {
    fn from(order: Order) -> Self {
        Self {
            orders: vec![order],
        }
    }
}

impl From<Vec<Order>> for Sort {
    fn from(orders: Vec<Order>) -> Self {
        Self { orders }
    }
}

impl FromIterator<Order> for Sort {
    fn from_iter<T: IntoIterator<Item = Order>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for Sort {
    type Item = Order;
    type IntoIter = std::vec::IntoIter<Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sort {
    type Item = &'a Order;
    type IntoIter = std::slice::Iter<'a, Order>;

    fn into_iter(self) -> Self::IntoIter {
        self.orders.iter()
    }
}
