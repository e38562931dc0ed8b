//! HTML views for the browser-facing pages.
//!
//! Two pages only: the upload form and the analysis result. The result page
//! embeds the downstream JSON verbatim (pretty-printed, HTML-escaped).

use serde_json::Value;

/// Render the upload form. The file input is named after the configured
/// multipart field so the form and the handler cannot drift apart.
pub fn index_page(field_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Vestibule</title>
</head>
<body>
  <h1>Upload a document</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <input type="file" name="{field}" required>
    <button type="submit">Upload</button>
  </form>
</body>
</html>
"#,
        field = escape_html(field_name)
    )
}

/// Render the downstream JSON result.
pub fn result_page(result: &Value) -> String {
    let pretty = serde_json::to_string_pretty(result).unwrap_or_else(|_| result.to_string());
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Analysis result</title>
</head>
<body>
  <h1>Analysis result</h1>
  <pre>{json}</pre>
  <p><a href="/">Upload another file</a></p>
</body>
</html>
"#,
        json = escape_html(&pretty)
    )
}

/// Minimal HTML escaping for text nodes and attribute values.
fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
