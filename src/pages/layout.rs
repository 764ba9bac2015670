use crate::navigation;
use crate::utils::html::escape;

/// Wrap page content in the shared document shell
pub fn page(title: &str, current_path: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {brand}</title>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body>
{nav}
<main class="container">
{body}
</main>
</body>
</html>"#,
        title = escape(title),
        brand = navigation::BRAND,
        nav = navigation::render(current_path),
        body = body,
    )
}
