use axum::response::Html;

use super::layout::page;

pub async fn home() -> Html<String> {
    Html(render())
}

pub fn render() -> String {
    let body = r#"<section class="hero">
    <h1>Welcome to WebApp</h1>
    <p class="lead">A couple of small everyday tools.</p>
</section>
<section class="cards">
    <a class="card" href="/translate">
        <h2>Text Translation</h2>
        <p>Translate English text into fifteen languages.</p>
    </a>
    <a class="card" href="/random">
        <h2>Random String Generator</h2>
        <p>Generate random strings for passwords, tokens and more.</p>
    </a>
</section>"#;

    page("Home", "/", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_to_both_tools() {
        let html = render();
        assert!(html.contains(r#"class="card" href="/translate""#));
        assert!(html.contains(r#"class="card" href="/random""#));
        assert!(html.contains(r#"href="/" class="nav-link active""#));
    }
}
