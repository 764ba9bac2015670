use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::layout::page;
use crate::generator::{
    self, CharClass, GeneratedString, GenerationConfig, GeneratorError, MAX_LENGTH, MIN_LENGTH,
};
use crate::state::AppState;
use crate::utils::html::{checked, escape};

/// Query shared by `/random` and `/api/random-string`.
///
/// Flags take `true`/`false` or checkbox encoding (`on` when ticked, absent
/// when not). Once the form's hidden `generated` marker is present, a missing
/// flag means unchecked; otherwise it keeps its default.
#[derive(Debug, Default, Deserialize)]
pub struct RandomStringQuery {
    pub length: Option<String>,
    pub uppercase: Option<String>,
    pub lowercase: Option<String>,
    pub numbers: Option<String>,
    pub symbols: Option<String>,
    pub generated: Option<String>,
}

impl RandomStringQuery {
    fn flag(&self, class: CharClass) -> Option<&str> {
        match class {
            CharClass::Uppercase => self.uppercase.as_deref(),
            CharClass::Lowercase => self.lowercase.as_deref(),
            CharClass::Numbers => self.numbers.as_deref(),
            CharClass::Symbols => self.symbols.as_deref(),
        }
    }

    fn base_config(&self, default_length: usize) -> GenerationConfig {
        let mut config = GenerationConfig {
            length: default_length,
            ..Default::default()
        }
        .with_clamped_length();

        let submitted = self.generated.is_some();
        for class in CharClass::ALL {
            match self.flag(class) {
                Some(value) => config.set_class(class, flag_enabled(value)),
                None if submitted => config.set_class(class, false),
                None => {}
            }
        }

        config
    }

    /// Config for the page. Out-of-range or garbled lengths are ignored.
    pub fn to_config(&self, default_length: usize) -> GenerationConfig {
        let mut config = self.base_config(default_length);

        if let Some(length) = self
            .length
            .as_deref()
            .and_then(|l| l.trim().parse::<usize>().ok())
            .filter(|l| (MIN_LENGTH..=MAX_LENGTH).contains(l))
        {
            config.length = length;
        }

        config
    }

    /// Config for the JSON API, which rejects a bad length instead.
    pub fn to_strict_config(
        &self,
        default_length: usize,
    ) -> Result<GenerationConfig, GeneratorError> {
        let mut config = self.base_config(default_length);

        if let Some(raw) = self.length.as_deref() {
            config.length = raw
                .trim()
                .parse()
                .map_err(|_| GeneratorError::InvalidLength(raw.to_string()))?;
            config.validate()?;
        }

        Ok(config)
    }
}

fn flag_enabled(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "off" | "0" | "no"
    )
}

pub async fn random_page(
    State(state): State<AppState>,
    Query(query): Query<RandomStringQuery>,
) -> Html<String> {
    let config = query.to_config(state.config.generator_config.default_length);
    let generated = generator::generate(&config);
    Html(render(&config, &generated))
}

pub fn render(config: &GenerationConfig, generated: &GeneratedString) -> String {
    let checkboxes: String = CharClass::ALL
        .iter()
        .map(|class| {
            format!(
                r#"<label class="checkbox"><input type="checkbox" name="{}" onchange="this.form.submit()"{}> {}</label>"#,
                class.field(),
                checked(config.includes(*class)),
                escape(class.label())
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let body = format!(
        r#"<h1>Random String Generator</h1>
<p class="lead">Generate secure random alphanumeric strings for passwords, tokens, and more</p>
<div class="panel">
    <label>Generated String</label>
    <div class="generated">
        <p id="generated-value" class="mono">{value}</p>
        <button type="button" class="btn-copy" title="Copy to clipboard"
            onclick="navigator.clipboard.writeText(document.getElementById('generated-value').textContent).catch(function (err) {{ console.error('Failed to copy text: ', err); }})">Copy</button>
    </div>
    <form method="get" action="/random" id="random-form">
        <input type="hidden" name="generated" value="1">
        <label for="string-length">String Length: <span id="length-value">{length}</span></label>
        <input id="string-length" type="range" name="length" min="{min}" max="{max}" value="{length}"
            oninput="document.getElementById('length-value').textContent = this.value"
            onchange="this.form.submit()">
        <div class="range-labels"><span>{min}</span><span>{max}</span></div>
        <label>Character Types</label>
        <div class="grid-2">
            {checkboxes}
        </div>
        <div class="center">
            <button type="submit" class="btn btn-accent">Generate New String</button>
        </div>
    </form>
    <div class="info">
        <h3>String Information</h3>
        <span>Length: <strong>{actual} characters</strong></span>
        <span>Entropy: <strong>~{entropy} bits</strong></span>
    </div>
</div>
<div class="alert alert-note">
    <strong>Security Note:</strong> These strings are drawn from the operating system seeded
    thread-local generator, which is cryptographically secure. The entropy figure is an estimate.
</div>"#,
        value = escape(&generated.value),
        length = config.length,
        min = MIN_LENGTH,
        max = MAX_LENGTH,
        checkboxes = checkboxes,
        actual = generated.value.chars().count(),
        entropy = generated.entropy_bits,
    );

    page("Random String", "/random", &body)
}
