//! Template system for svg2sol source generation.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module, then rendered at runtime with
//! [Handlebars](https://handlebarsjs.com/) via the
//! [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Templates use Handlebars syntax. The storage contract template takes:
//! - `{{contract_name}}` — Solidity contract name (e.g., `MushroomGifStorage`)
//! - `{{constant_name}}` — name of the generated string constant
//! - `{{data_uri}}` — the full `data:<mime>;base64,<payload>` value
//!
//! ## Adding a new template
//!
//! 1. Create the `.tmpl` file under `templates/`
//! 2. Add a `pub const` with `include_str!` in [`embedded`]
//! 3. Run `cargo build` to verify the path resolves
//!
//! **Warning**: Template files in `templates/` and constants in [`embedded`]
//! must stay in sync. The `include_str!` paths are relative to this file and
//! checked at compile-time.

pub mod embedded;
pub mod renderer;
