//! Template rendering for scone.
//! A thin seam over MiniJinja; both file contents and the path expressions
//! inside template trees go through it.

use crate::error::Result;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a relative path expression. Surrounding whitespace is
    /// trimmed so an expression that renders to nothing reads as empty.
    fn render_path(&self, path: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.render(path, context)?.trim().to_string())
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with the default environment.
    pub fn new() -> Self {
        let env = Environment::new();
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a one-off template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if parsing or rendering fails
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}
