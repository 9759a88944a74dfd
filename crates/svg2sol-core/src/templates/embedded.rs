//! Compile-time embedded templates for source generation and scaffolding.
//!
//! Each constant loads a file from the workspace `templates/` directory via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/svg2sol-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!`
//! path here, and do NOT edit template variables without checking what the
//! embedder passes to the renderer.

// -------------------------------------------------------
// Generated contract templates
// -------------------------------------------------------

pub const GIF_STORAGE_CONTRACT: &str =
    include_str!("../../../../templates/contracts/gif_storage.sol.tmpl");

// -------------------------------------------------------
// Project scaffolding
// -------------------------------------------------------

/// Starter payload written by `init`: a 1x1 transparent GIF, Base64-encoded,
/// so a freshly scaffolded project embeds successfully with no edits.
pub const STARTER_PAYLOAD: &str = include_str!("../../../../templates/payloads/starter_gif.txt");
