use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Error, Pageable};

/// One page of results together with the totals needed to navigate.
///
/// The page count is never stored; it is derived from `total_elements` and `size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    number: u64,
    size: u64,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Create a page holding `content` for the given request.
    pub fn new(content: Vec<T>, pageable: &Pageable, total_elements: u64) -> Self {
        Self {
            content,
            number: pageable.page(),
            size: pageable.size(),
            total_elements,
        }
    }

    /// Create an empty page for the given request.
    pub fn empty(pageable: &Pageable) -> Self {
        Self::new(Vec::new(), pageable, 0)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(self.size)
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn is_first(&self) -> bool {
        self.number == 0
    }

    pub fn is_last(&self) -> bool {
        self.number.saturating_add(1) == self.total_pages()
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Map content while keeping the page numbers (domain -> DTO convenience).
    pub fn map_content<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

impl Page<serde_json::Value> {
    /// Build a page from untyped content, which must be a JSON array.
    pub fn from_json(
        content: serde_json::Value,
        pageable: &Pageable,
        total_elements: u64,
    ) -> Result<Self, Error> {
        match content {
            serde_json::Value::Array(items) => Ok(Self::new(items, pageable, total_elements)),
            _ => Err(Error::InvalidContent),
        }
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr<'a, C> {
            content: &'a [C],
            number: u64,
            size: u64,
            total_pages: u64,
            total_elements: u64,
        }

        Repr {
            content: &self.content,
            number: self.number,
            size: self.size,
            total_pages: self.total_pages(),
            total_elements: self.total_elements,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // totalPages is derived, so an incoming value is ignored.
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr<C> {
            content: Vec<C>,
            number: u64,
            size: u64,
            total_elements: u64,
        }

        let repr = Repr::<T>::deserialize(deserializer)?;
        if repr.size == 0 {
            return Err(de::Error::custom(Error::InvalidSizeValue));
        }
        Ok(Self {
            content: repr.content,
            number: repr.number,
            size: repr.size,
            total_elements: repr.total_elements,
        })
    }
}
