//! # petal-config
//!
//! Configuration system for the Petal utility CSS generator. Reads from
//! `petal.toml`, with defaults for anything not set.
//!
//! The document lists the content globs the class scanner walks and the
//! design tokens layered additively on top of the base theme. Scanning and
//! CSS generation consume this document; they live outside this crate.

pub mod schema;
pub mod loader;

pub use schema::PetalConfig;
pub use schema::{COLORS_CATEGORY, ConfigWarning, PluginRef, ThemeConfig, ThemeExtend, WarningSeverity};
pub use loader::ConfigLoader;
