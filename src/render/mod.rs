pub mod context;
pub mod filters;

pub use context::build_context;

use crate::config::Param;
use crate::error::{NullgenError, Result};
use crate::template::{self, BUNDLED_TEMPLATE, TEMPLATE_NAME};

/// Render `template` for `param`.
///
/// Pure: the same inputs always give the same text. Identifiers are not
/// sanitized; one that is not valid Rust fails the render.
pub fn generate(template: &str, param: &Param) -> Result<String> {
    let tera = template::load(template)?;
    let context = build_context(param);
    tera.render(TEMPLATE_NAME, &context)
        .map_err(|e| NullgenError::Render { source: e })
}

/// Render the template that ships with nullgen.
pub fn generate_bundled(param: &Param) -> Result<String> {
    generate(BUNDLED_TEMPLATE, param)
}
