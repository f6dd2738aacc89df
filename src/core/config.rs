use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::encoding::{ALT, ALT_ALPHABET, Encoding, PY3, PY3_ALPHABET, STD, STD_ALPHABET};
use crate::encoders::algorithms::errors::{
    EncodingNotFoundError, RegistryError, find_closest_encoding,
};

/// Name of the encoding used when neither the caller nor the config picks one.
pub const DEFAULT_ENCODING: &str = "std";

/// File name looked up in the user config directory and the working directory.
pub const CONFIG_FILE_NAME: &str = "encodings.toml";

/// The predefined encodings. Their alphabets are shared with the PHP, Java
/// and Python ports and cannot be redefined by config files.
const BUILTINS: [(&str, &str, &str); 3] = [
    ("std", STD_ALPHABET, "numerals and letters except DIOQio"),
    ("alt", ALT_ALPHABET, "PHP/Java compatible, lowercase before uppercase"),
    ("py3", PY3_ALPHABET, "Python 3 compatible, uppercase before lowercase"),
];

/// Configuration for a single encoding loaded from TOML.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EncodingConfig {
    /// The 56 digit characters, least significant first
    pub chars: String,
    /// Short human readable description shown by `base56 list`
    #[serde(default)]
    pub description: Option<String>,
}

/// Global settings.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Encoding used when `--encoding` is not given
    #[serde(default)]
    pub default_encoding: Option<String>,
}

/// Named encodings: the built-ins plus any loaded from TOML files.
///
/// ```toml
/// [settings]
/// default_encoding = "py3"
///
/// [encodings.reversed]
/// chars = "zyxwvutsrqpnmlkjhgfedcbaZYXWVUTSRPNMLKJHGFECBA9876543210"
/// ```
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EncodingRegistry {
    /// Map of lowercase encoding names to their configurations
    #[serde(default)]
    pub encodings: BTreeMap<String, EncodingConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

impl EncodingRegistry {
    /// Parses encoding configurations from TOML content.
    ///
    /// Names are case-insensitive and stored lowercase.
    pub fn from_toml(content: &str) -> Result<Self, RegistryError> {
        let mut parsed: Self = toml::from_str(content)?;
        parsed.encodings = parsed
            .encodings
            .into_iter()
            .map(|(name, config)| (name.to_ascii_lowercase(), config))
            .collect();
        Ok(parsed)
    }

    /// Returns a registry holding only the built-in encodings.
    pub fn load_default() -> Self {
        let encodings = BUILTINS
            .iter()
            .map(|&(name, chars, description)| {
                (
                    name.to_string(),
                    EncodingConfig {
                        chars: chars.to_string(),
                        description: Some(description.to_string()),
                    },
                )
            })
            .collect();

        EncodingRegistry {
            encodings,
            settings: Settings::default(),
        }
    }

    /// Loads configuration from a file path. The result holds only what the
    /// file defines; merge it into [`EncodingRegistry::load_default`] to use it.
    pub fn load_from_file(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads the built-ins plus overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in encodings
    /// 2. `<config dir>/base56/encodings.toml` (user overrides)
    /// 3. `./encodings.toml` (project-local overrides)
    ///
    /// Files that are missing are skipped silently; files that fail to load
    /// are skipped with a warning.
    pub fn load_with_overrides() -> Self {
        let mut registry = Self::load_default();

        for path in Self::override_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(overrides) => {
                    tracing::debug!(path = %path.display(), "loaded encoding overrides");
                    registry.merge(overrides);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping encodings config");
                }
            }
        }

        registry
    }

    /// Like [`EncodingRegistry::load_with_overrides`], then merges `path` on
    /// top. Errors in an explicitly requested file are returned, not skipped.
    pub fn load_with_file(path: &Path) -> Result<Self, RegistryError> {
        let mut registry = Self::load_with_overrides();
        let explicit = Self::load_from_file(path)?;
        tracing::debug!(path = %path.display(), "loaded encodings config");
        registry.merge(explicit);
        Ok(registry)
    }

    fn override_paths() -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("base56").join(CONFIG_FILE_NAME));
        }
        paths.push(PathBuf::from(CONFIG_FILE_NAME));
        paths
    }

    /// Merges another configuration into this one.
    ///
    /// Encodings from `other` replace those with the same name in `self`,
    /// except that built-in encodings keep their alphabets.
    pub fn merge(&mut self, other: EncodingRegistry) {
        for (name, config) in other.encodings {
            if let Some(builtin) = builtin_alphabet(&name)
                && config.chars != builtin
            {
                tracing::warn!(encoding = %name, "ignoring attempt to redefine built-in encoding");
                continue;
            }
            self.encodings.insert(name, config);
        }

        if other.settings.default_encoding.is_some() {
            self.settings.default_encoding = other.settings.default_encoding;
        }
    }

    /// Retrieves an encoding configuration by name.
    pub fn get_encoding(&self, name: &str) -> Option<&EncodingConfig> {
        self.encodings.get(&name.to_ascii_lowercase())
    }

    /// All known encoding names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.encodings.keys().map(String::as_str).collect()
    }

    /// Name of the encoding to use when none is requested explicitly.
    pub fn default_encoding_name(&self) -> &str {
        self.settings
            .default_encoding
            .as_deref()
            .unwrap_or(DEFAULT_ENCODING)
    }

    /// Builds the named encoding.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] (with a spelling suggestion when one
    /// is close) for unknown names and [`RegistryError::Alphabet`] when a
    /// configured alphabet is invalid.
    pub fn build(&self, name: &str) -> Result<Encoding, RegistryError> {
        let key = name.to_ascii_lowercase();
        match key.as_str() {
            "std" => return Ok(STD.clone()),
            "alt" => return Ok(ALT.clone()),
            "py3" => return Ok(PY3.clone()),
            _ => {}
        }

        let config = self.encodings.get(&key).ok_or_else(|| {
            let suggestion = find_closest_encoding(&key, &self.names());
            EncodingNotFoundError::new(name, suggestion)
        })?;

        Encoding::new(&config.chars).map_err(|source| RegistryError::Alphabet {
            name: key,
            source,
        })
    }
}

fn builtin_alphabet(name: &str) -> Option<&'static str> {
    BUILTINS
        .iter()
        .find(|(builtin, _, _)| *builtin == name)
        .map(|&(_, chars, _)| chars)
}
