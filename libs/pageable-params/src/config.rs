use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_PARAM: &str = "page";
pub const DEFAULT_SIZE_PARAM: &str = "size";
pub const DEFAULT_SORT_PARAM: &str = "sort";
pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_SIZE: u64 = 10;

/// Parameter names and defaults used by [`crate::PageableParser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserConfig {
    #[serde(default = "default_page_param")]
    pub page_param: String,
    #[serde(default = "default_size_param")]
    pub size_param: String,
    #[serde(default = "default_sort_param")]
    pub sort_param: String,
    #[serde(default = "default_page")]
    pub default_page: u64,
    #[serde(default = "default_size")]
    pub default_size: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            page_param: default_page_param(),
            size_param: default_size_param(),
            sort_param: default_sort_param(),
            default_page: default_page(),
            default_size: default_size(),
        }
    }
}

fn default_page_param() -> String {
    DEFAULT_PAGE_PARAM.to_string()
}

fn default_size_param() -> String {
    DEFAULT_SIZE_PARAM.to_string()
}

fn default_sort_param() -> String {
    DEFAULT_SORT_PARAM.to_string()
}

fn default_page() -> u64 {
    DEFAULT_PAGE
}

fn default_size() -> u64 {
    DEFAULT_SIZE
}

impl ParserConfig {
    pub fn new(
        page_param: impl Into<String>,
        size_param: impl Into<String>,
        sort_param: impl Into<String>,
        default_page: u64,
        default_size: u64,
    ) -> Self {
        Self {
            page_param: page_param.into(),
            size_param: size_param.into(),
            sort_param: sort_param.into(),
            default_page,
            default_size,
        }
    }

    /// Load configuration with layered loading: defaults → YAML file → environment variables.
    /// A missing file is not an error; the remaining layers still apply.
    pub fn load_layered<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let figment = Figment::new()
            .merge(Serialized::defaults(ParserConfig::default()))
            .merge(Yaml::file(config_path.as_ref()))
            // Example: PAGEABLE__SIZE_PARAM=limit maps to size_param
            .merge(Env::prefixed("PAGEABLE__").split("__"));

        let config: ParserConfig = figment.extract().with_context(|| {
            format!(
                "failed to load pageable config from {}",
                config_path.as_ref().display()
            )
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the parser cannot work with.
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("page_param", &self.page_param),
            ("size_param", &self.size_param),
            ("sort_param", &self.sort_param),
        ];
        for (key, name) in names {
            if name.is_empty() {
                bail!("{key} must not be empty");
            }
        }
        if self.page_param == self.size_param
            || self.page_param == self.sort_param
            || self.size_param == self.sort_param
        {
            bail!(
                "parameter names must be distinct (page={}, size={}, sort={})",
                self.page_param,
                self.size_param,
                self.sort_param
            );
        }
        if self.default_size == 0 {
            bail!("default_size must be at least 1");
        }
        Ok(())
    }
}
