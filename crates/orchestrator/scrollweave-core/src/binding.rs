//! Target resolution at the host boundary.
//!
//! Canonical paths name elements the way a page manifest refers to them;
//! hosts resolve them to opaque handles once, at setup. A path that fails
//! to resolve means the element is absent on this page variant and every
//! feature referring to it degrades to a no-op.

/// Canonical element path as written in manifests and registrations
/// (e.g. "#newsletter-canvas", ".story-card:2").
pub type TargetPath = String;

/// Opaque target handle (small string key).
pub type TargetHandle = String;

/// Trait for resolving canonical element paths to opaque handles.
/// Adapters implement this and pass it into Orchestrator::prebind().
pub trait TargetResolver {
    fn resolve(&mut self, path: &str) -> Option<TargetHandle>;
}

/// Identity resolver: every path resolves to itself. Useful for tests and
/// hosts whose handles are the canonical paths.
#[derive(Default, Debug)]
pub struct IdentityResolver;

impl TargetResolver for IdentityResolver {
    fn resolve(&mut self, path: &str) -> Option<TargetHandle> {
        Some(path.to_string())
    }
}
