// Starting catalogues for the item registry
use anyhow::{Context, Result};
use rankx_core::ItemAttributes;
use std::path::Path;

const HERITAGE_SITES: &str = include_str!("../data/heritage_sites.json");

/// The bundled catalogue of UNESCO World Heritage Sites in India
pub fn bundled_catalogue() -> Result<Vec<ItemAttributes>> {
    parse_catalogue(HERITAGE_SITES).context("bundled catalogue is malformed")
}

/// Read a catalogue file: a JSON array of `{name, category, metadata}` objects
pub fn load_catalogue<P: AsRef<Path>>(path: P) -> Result<Vec<ItemAttributes>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;
    parse_catalogue(&content)
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}

pub fn parse_catalogue(json: &str) -> Result<Vec<ItemAttributes>> {
    let catalogue: Vec<ItemAttributes> = serde_json::from_str(json)?;
    Ok(catalogue)
}
