//! Shared fixtures for scrollweave tests: page manifests and geometry
//! snapshots, indexed by `fixtures/manifest.json` at the repo root.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    pages: HashMap<String, String>,
    geometry: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Raw JSON for a named page manifest.
pub fn page_manifest_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .pages
        .get(name)
        .ok_or_else(|| anyhow!("unknown page fixture '{name}'"))?;
    read_to_string(rel)
}

/// Raw JSON for a named geometry snapshot.
pub fn geometry_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .geometry
        .get(name)
        .ok_or_else(|| anyhow!("unknown geometry fixture '{name}'"))?;
    read_to_string(rel)
}

/// Deserialize a named geometry snapshot into a caller-provided shape.
pub fn load_geometry<T: DeserializeOwned>(name: &str) -> Result<T> {
    let raw = geometry_json(name)?;
    serde_json::from_str(&raw).with_context(|| format!("geometry fixture '{name}' should parse"))
}

/// Names of all page fixtures, sorted for deterministic iteration.
pub fn page_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.pages.keys().cloned().collect();
    names.sort();
    names
}
