//! Compile-time configuration for the trainer bridge firmware.
//!
//! Copy one of the files under `templates/` to `cfg.toml` at the crate root,
//! edit it, and rebuild. `build.rs` turns it into the [`CONFIG`] constant, so
//! every value is fixed at build time and immutable for the life of the
//! program. Template values keep the `YOUR_` prefix until edited; the build
//! warns about each one left in place, and [`Config::warn_if_unedited`] does
//! the same from firmware if wanted.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod constants;
pub mod placeholder;

pub use config::{Config, CONFIG};
pub use placeholder::is_placeholder;
