use serde::Serialize;
use tera::{Context, Tera};

use crate::error::ExportError;

/// Render a raw Tera template against any serializable context; the
/// context's fields become template variables.
pub fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    context: &T,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    Ok(tera.render(template_name, &context)?)
}
