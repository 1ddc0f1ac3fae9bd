// Configuration of an excitation handler
use crate::error::ConfigError;
use crate::fermi::{lfu_split_cache, simple_split_cache, SplitCache, DEFAULT_CACHE_CAPACITY};
use crate::nuclear_data::{NuclearData, NuclideTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Storage policy of the Fermi break-up split cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CacheKind {
    /// Bounded, evicts the least frequently used nucleus
    #[default]
    Lfu,
    /// Unbounded
    Simple,
}

impl FromStr for CacheKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lfu" => Ok(CacheKind::Lfu),
            "simple" => Ok(CacheKind::Simple),
            other => Err(ConfigError::UnknownCache(other.to_string())),
        }
    }
}

impl TryFrom<String> for CacheKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CacheKind> for String {
    fn from(kind: CacheKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKind::Lfu => write!(f, "lfu"),
            CacheKind::Simple => write!(f, "simple"),
        }
    }
}

/// Settings used to assemble an [`ExcitationHandler`](crate::handler::ExcitationHandler).
///
/// Every field is optional; missing fields fall back to the defaults (an LFU
/// split cache of 180 nuclei and the built-in nuclide table). The same
/// settings can be read from JSON or from a flat map of named parameters:
///
/// ```json
/// { "cache": "simple", "nuclear_masses": "masses.json" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandlerConfig {
    pub cache: Option<CacheKind>,
    pub cache_capacity: Option<usize>,
    /// JSON file of `{"a", "z", "mass"}` records overriding built-in masses
    pub nuclear_masses: Option<PathBuf>,
}

impl HandlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings from named string parameters: `cache`, `cache_capacity` and `nuclear_masses`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let mut config = HandlerConfig::new();
        for (name, value) in params {
            match name.as_str() {
                "cache" => config.cache = Some(value.parse()?),
                "cache_capacity" => {
                    let capacity = value.parse().map_err(|_| ConfigError::InvalidParameter {
                        name: name.clone(),
                        value: value.clone(),
                    })?;
                    config.cache_capacity = Some(capacity);
                }
                "nuclear_masses" => config.nuclear_masses = Some(PathBuf::from(value)),
                _ => tracing::warn!(parameter = %name, "ignoring unknown handler parameter"),
            }
        }
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn cache_kind(&self) -> CacheKind {
        self.cache.unwrap_or_default()
    }

    /// Nuclear data provider, with the mass overrides loaded when a file is set.
    pub fn nuclear_data(&self) -> Result<Arc<dyn NuclearData>, ConfigError> {
        let table = match &self.nuclear_masses {
            Some(path) => NuclideTable::with_mass_file(path)?,
            None => NuclideTable::new(),
        };
        Ok(Arc::new(table))
    }

    /// Empty split cache of the configured kind.
    pub fn split_cache(&self) -> SplitCache {
        match self.cache_kind() {
            CacheKind::Lfu => lfu_split_cache(self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY)),
            CacheKind::Simple => {
                if self.cache_capacity.is_some() {
                    tracing::warn!("cache_capacity has no effect on the simple cache");
                }
                simple_split_cache()
            }
        }
    }
}
