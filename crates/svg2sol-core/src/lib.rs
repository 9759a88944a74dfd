//! Core library for the svg2sol toolkit.
//!
//! svg2sol embeds Base64-encoded image payloads into generated Solidity
//! storage contracts, so that image assets can live fully on-chain as
//! `data:` URI constants. The library side provides:
//!
//! - [`embedder`] — the payload-to-contract generation run
//! - [`layers`] — the default layer-name identifier table consumed by the
//!   SVG asset-composition pipeline
//! - [`config`] — the `svg2sol.config.json` project file
//! - [`templates`] — compile-time embedded Handlebars templates
//!
//! The CLI crate (`svg2sol`) wraps these in `embed`, `layers`, and `init`
//! commands.

pub mod config;
pub mod embedder;
pub mod error;
pub mod layers;
pub mod project;
pub mod templates;
