use tera::Context;

use crate::config::Param;

/// Template context: `Package` and `Type`, the only two substitution points.
pub fn build_context(param: &Param) -> Context {
    let mut context = Context::new();
    context.insert("Package", param.package());
    context.insert("Type", param.type_name());
    context
}
