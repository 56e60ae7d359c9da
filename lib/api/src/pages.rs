//! Inline HTML for the form page.
//!
//! The page is deliberately minimal; programmatic consumers use
//! `/api/predict`.

use crate::rest::FORM_FIELDS;

/// Renders the input form page, with the result sentence when one is
/// available.
#[must_use]
pub fn index(result: Option<&str>) -> String {
    let inputs: String = FORM_FIELDS
        .iter()
        .map(|name| {
            format!(
                r#"      <label>{name} <input type="number" step="any" name="{name}" required></label>
"#
            )
        })
        .collect();

    let result_block = match result {
        Some(text) => format!("    <p class=\"result\">{}</p>\n", escape(text)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Cropwise</title>
    <style>
      body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
      label {{ display: block; margin: 0.5rem 0; }}
      .result {{ border: 1px solid #888; padding: 0.75rem; }}
    </style>
  </head>
  <body>
    <h1>Crop Recommendation</h1>
    <form method="post" action="/predict">
{inputs}      <button type="submit">Recommend</button>
    </form>
{result_block}  </body>
</html>
"#
    )
}

/// Minimal HTML escaping for result text, which can echo request values.
fn escape(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
