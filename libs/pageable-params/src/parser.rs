use pageable_core::{Error, Pageable, Sort};
use tracing::{debug, trace};

use crate::config::ParserConfig;
use crate::query::{ParamSource, QueryParams};
use crate::sort::parse_sort_values;

/// Turns page/size/sort parameters into a [`Pageable`].
///
/// Parameters are validated in a fixed order (page, size, sort) and the first
/// failure is returned; a partial [`Pageable`] is never produced. A page whose
/// offset (`page * size`) does not fit in a `u64` is an invalid page value.
#[derive(Debug, Clone, Default)]
pub struct PageableParser {
    config: ParserConfig,
}

impl PageableParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse<P: ParamSource + ?Sized>(&self, params: &P) -> Result<Pageable, Error> {
        let page = self.parse_page(params)?;
        let size = self.parse_size(params)?;
        if page.checked_mul(size).is_none() {
            return Err(rejected(&self.config.page_param, Error::InvalidPageValue));
        }
        let sort = self.parse_sort(params)?;

        trace!(
            page,
            size,
            sort = sort.as_ref().map(Sort::to_signed_tokens).as_deref(),
            "parsed pageable"
        );
        Ok(Pageable::try_new(page, size)?.with_sort(sort))
    }

    /// Parse a raw `application/x-www-form-urlencoded` query string.
    pub fn parse_query_str(&self, raw: &str) -> Result<Pageable, Error> {
        self.parse(&QueryParams::from_query_str(raw))
    }

    pub fn parse_url(&self, url: &url::Url) -> Result<Pageable, Error> {
        self.parse(&QueryParams::from_url(url))
    }

    fn parse_page<P: ParamSource + ?Sized>(&self, params: &P) -> Result<u64, Error> {
        let name = &self.config.page_param;
        match params.param_values(name) {
            None => Ok(self.config.default_page),
            Some([raw]) => {
                parse_at_least(raw, 0).ok_or_else(|| rejected(name, Error::InvalidPageValue))
            }
            Some(_) => Err(rejected(name, Error::WrongPageValueCount)),
        }
    }

    fn parse_size<P: ParamSource + ?Sized>(&self, params: &P) -> Result<u64, Error> {
        let name = &self.config.size_param;
        match params.param_values(name) {
            None => Ok(self.config.default_size),
            Some([raw]) => {
                parse_at_least(raw, 1).ok_or_else(|| rejected(name, Error::InvalidSizeValue))
            }
            Some(_) => Err(rejected(name, Error::WrongSizeValueCount)),
        }
    }

    fn parse_sort<P: ParamSource + ?Sized>(&self, params: &P) -> Result<Option<Sort>, Error> {
        let name = &self.config.sort_param;
        match params.param_values(name) {
            None => Ok(None),
            Some(values) => parse_sort_values(values).map_err(|e| rejected(name, e)),
        }
    }
}

/// Parse with the canonical parameter names and defaults.
pub fn parse<P: ParamSource + ?Sized>(params: &P) -> Result<Pageable, Error> {
    PageableParser::default().parse(params)
}

/// Decimal integer no smaller than `min`. A leading `+` or `-0` is accepted.
fn parse_at_least(raw: &str, min: u64) -> Option<u64> {
    raw.parse::<u64>()
        .ok()
        .or_else(|| raw.parse::<i64>().ok().and_then(|v| u64::try_from(v).ok()))
        .filter(|v| *v >= min)
}

fn rejected(param: &str, error: Error) -> Error {
    debug!(param, error = %error, "rejected pagination parameter");
    error
}
