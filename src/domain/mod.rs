//! Domain types - version semantics independent of file formats

pub mod version;

pub use version::ChartVersion;
