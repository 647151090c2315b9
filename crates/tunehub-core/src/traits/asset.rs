//! Static asset catalog trait.

/// A collection of static UI files that can be probed by name.
///
/// The share endpoint consults the catalog before treating a path segment
/// as a share id, so `exists` must be a cheap existence probe and never
/// read the file itself.
pub trait AssetCatalog: Send + Sync + std::fmt::Debug + 'static {
    /// Whether `name` (a path relative to the catalog root) is a servable file.
    fn exists(&self, name: &str) -> bool;
}
