//! The bundled nullable-wrapper template.
//!
//! The text ships inside the binary; it is not read from disk at run time.

use tera::Tera;

use crate::error::{NullgenError, Result};
use crate::render::filters;

/// Name the template is registered under inside [`Tera`].
pub const TEMPLATE_NAME: &str = "nullable.rs";

/// Template with the two substitution points `Package` and `Type`.
pub const BUNDLED_TEMPLATE: &str = include_str!("../../templates/nullable.rs.tera");

/// Parse `text` as the nullable template and register the identifier filters.
pub fn load(text: &str) -> Result<Tera> {
    let mut tera = Tera::default();
    filters::register(&mut tera);
    tera.add_raw_template(TEMPLATE_NAME, text)
        .map_err(|e| NullgenError::TemplateParse { source: e })?;
    Ok(tera)
}
