use crate::utils::html::escape;

pub const BRAND: &str = "WebApp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
}

pub const LINKS: &[NavLink] = &[
    NavLink { path: "/", label: "Home" },
    NavLink { path: "/translate", label: "Translate" },
    NavLink { path: "/random", label: "Random String" },
];

pub fn is_active(current_path: &str, link_path: &str) -> bool {
    current_path == link_path
}

/// Render the navigation bar with the link for `current_path` highlighted
pub fn render(current_path: &str) -> String {
    let links: String = LINKS
        .iter()
        .map(|link| {
            let class = if is_active(current_path, link.path) {
                "nav-link active"
            } else {
                "nav-link"
            };
            format!(
                r#"<a href="{}" class="{}">{}</a>"#,
                link.path,
                class,
                escape(link.label)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r#"<nav class="navbar">
    <a href="/" class="brand">{}</a>
    <div class="nav-links">
        {}
    </div>
</nav>"#,
        BRAND, links
    )
}
