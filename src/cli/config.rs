use super::global::GlobalArgs;
use base56::{Encoding, EncodingRegistry};
use std::path::PathBuf;

/// Loads the registry, honouring `--config` when given.
pub fn load_registry(global: &GlobalArgs) -> Result<EncodingRegistry, Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
            Ok(EncodingRegistry::load_with_file(&expanded)?)
        }
        None => Ok(EncodingRegistry::load_with_overrides()),
    }
}

/// Name of the encoding selected by `--encoding` or the config default.
pub fn encoding_name<'a>(global: &'a GlobalArgs, registry: &'a EncodingRegistry) -> &'a str {
    global
        .encoding
        .as_deref()
        .unwrap_or_else(|| registry.default_encoding_name())
}

/// Builds the encoding selected by `--encoding` or the config default.
pub fn create_encoding(
    global: &GlobalArgs,
    registry: &EncodingRegistry,
) -> Result<Encoding, Box<dyn std::error::Error>> {
    let name = encoding_name(global, registry);
    tracing::debug!(encoding = name, "resolving encoding");
    Ok(registry.build(name)?)
}
