use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::warn;

use super::layout::page;
use crate::state::AppState;
use crate::translate::{TargetLanguage, TranslationSession, TranslationState};
use crate::utils::html::escape;

#[derive(Debug, Default, Deserialize)]
pub struct TranslateForm {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub target: String,
}

pub async fn translate_page() -> Html<String> {
    Html(render("", TargetLanguage::default(), &TranslationState::Idle))
}

pub async fn translate_submit(
    State(state): State<AppState>,
    Form(form): Form<TranslateForm>,
) -> Html<String> {
    let target = form.target.parse().unwrap_or_else(|e| {
        warn!("{}, using default", e);
        TargetLanguage::default()
    });

    let mut session = TranslationSession::new(state.translator.clone()).with_input(form.text, target);
    session.submit().await;

    Html(render(&session.input_text, session.target, session.state()))
}

pub fn render(input_text: &str, target: TargetLanguage, state: &TranslationState) -> String {
    let options: String = TargetLanguage::ALL
        .iter()
        .map(|lang| {
            let selected = if *lang == target { " selected" } else { "" };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                lang.code(),
                selected,
                escape(lang.name())
            )
        })
        .collect::<Vec<_>>()
        .join("\n                ");

    let output = match state {
        TranslationState::Idle | TranslationState::Error(_) => {
            r#"<p class="placeholder">Translation will appear here...</p>"#.to_string()
        }
        TranslationState::Loading => r#"<p class="placeholder">Translating...</p>"#.to_string(),
        TranslationState::Success(text) => {
            format!(r#"<p class="translated">{}</p>"#, escape(text))
        }
    };

    let error = match state {
        TranslationState::Error(e) => {
            format!(r#"<div class="alert alert-error">{}</div>"#, escape(&e.to_string()))
        }
        _ => String::new(),
    };

    let disabled = if state.is_loading() { " disabled" } else { "" };

    let body = format!(
        r#"<h1>Text Translation</h1>
<p class="lead">Translate your English text into various languages.</p>
<form method="post" action="/translate" class="panel" id="translate-form">
    <div class="grid-2">
        <div>
            <label for="input-text">English Text</label>
            <textarea id="input-text" name="text" rows="8" placeholder="Enter your English text here...">{input}</textarea>
        </div>
        <div>
            <label>Translated Text</label>
            <div class="output">{output}</div>
        </div>
    </div>
    <div class="controls">
        <div>
            <label for="target-language">Target Language</label>
            <select id="target-language" name="target">
                {options}
            </select>
        </div>
        <button type="submit" class="btn btn-primary"{disabled}>Translate</button>
    </div>
    {error}
</form>
<script>
document.getElementById('translate-form').addEventListener('submit', function (e) {{
    var text = document.getElementById('input-text').value;
    if (!text.trim()) {{ return; }}
    var button = this.querySelector('button');
    button.disabled = true;
    button.textContent = 'Translating...';
}});
</script>"#,
        input = escape(input_text),
        output = output,
        options = options,
        disabled = disabled,
        error = error,
    );

    page("Translate", "/translate", &body)
}
