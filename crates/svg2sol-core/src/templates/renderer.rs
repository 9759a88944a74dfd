//! Handlebars-based template renderer for Solidity source generation.
//!
//! Wraps the [`handlebars::Handlebars`] engine with two non-default settings:
//!
//! - **Strict mode on** — any `{{variable}}` referenced in a template must be
//!   present in the data context, otherwise rendering returns an error. The
//!   templates produce Solidity source; a silently missing variable would
//!   generate a contract that fails to compile in `solc` with confusing
//!   errors far from the actual cause.
//! - **Escaping off** — the default Handlebars escape function is for HTML
//!   and would rewrite characters like `=` and `/` as entities. The payload
//!   is Base64 text that must land in the output character-for-character
//!   (`=` padding included), so escaping is disabled entirely.

use handlebars::{no_escape, Handlebars};
use serde_json::Value;

use crate::error::{EmbedError, Result};

/// Template renderer for generating Solidity source files.
pub struct TemplateRenderer {
    hbs: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a new renderer with strict mode on and escaping off.
    pub fn new() -> Self {
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(true);
        hbs.register_escape_fn(no_escape);
        Self { hbs }
    }

    /// Render a template string with the given data context.
    pub fn render(&self, template: &str, data: &Value) -> Result<String> {
        self.hbs
            .render_template(template, data)
            .map_err(|e| EmbedError::TemplateRender(e.to_string()))
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
