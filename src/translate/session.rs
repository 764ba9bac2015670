use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use super::error::TranslateError;
use super::interface::TranslateInterface;
use super::languages::TargetLanguage;

/// Lifecycle of a translation submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TranslationState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(TranslateError),
}

impl TranslationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, TranslationState::Loading)
    }
}

/// Input text, target selection and the outcome of the latest submission.
///
/// `submit` borrows the session mutably, so at most one request is in
/// flight per session.
pub struct TranslationSession {
    translator: Arc<dyn TranslateInterface>,
    pub input_text: String,
    pub target: TargetLanguage,
    state: TranslationState,
}

impl TranslationSession {
    pub fn new(translator: Arc<dyn TranslateInterface>) -> Self {
        Self {
            translator,
            input_text: String::new(),
            target: TargetLanguage::default(),
            state: TranslationState::Idle,
        }
    }

    pub fn with_input(mut self, text: impl Into<String>, target: TargetLanguage) -> Self {
        self.input_text = text.into();
        self.target = target;
        self
    }

    pub fn state(&self) -> &TranslationState {
        &self.state
    }

    /// Submit the current input. Empty input fails without touching the network.
    pub async fn submit(&mut self) -> &TranslationState {
        if !self.input_text.trim().is_empty() {
            // Previous result is discarded before the call goes out
            self.state = TranslationState::Loading;
        }

        self.state = match self.request().await {
            Ok(text) => TranslationState::Success(text),
            Err(e) => TranslationState::Error(e),
        };

        &self.state
    }

    /// Submit once and hand back the outcome, consuming the session.
    pub async fn into_translation(self) -> Result<String, TranslateError> {
        self.request().await
    }

    async fn request(&self) -> Result<String, TranslateError> {
        if self.input_text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let request_id = Uuid::new_v4();
        debug!(
            %request_id,
            target = %self.target,
            chars = self.input_text.chars().count(),
            "Submitting translation"
        );

        let outcome = self.translator.translate(&self.input_text, self.target).await;
        match &outcome {
            Ok(_) => info!(%request_id, target = %self.target, "Translation succeeded"),
            Err(e) => info!(%request_id, target = %self.target, error = %e, "Translation failed"),
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Replays canned outcomes and counts calls
    struct ScriptedTranslator {
        calls: AtomicUsize,
        outcomes: Mutex<Vec<Result<String, TranslateError>>>,
    }

    impl ScriptedTranslator {
        fn new(mut outcomes: Vec<Result<String, TranslateError>>) -> Arc<Self> {
            outcomes.reverse();
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcomes: Mutex::new(outcomes),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslateInterface for ScriptedTranslator {
        async fn translate(
            &self,
            _text: &str,
            _target: TargetLanguage,
        ) -> Result<String, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(TranslateError::Unavailable("script exhausted".into())))
        }
    }

    #[tokio::test]
    async fn empty_input_never_calls_translator() {
        let translator = ScriptedTranslator::new(vec![Ok("unused".into())]);

        for input in ["", "   ", "\n\t  "] {
            let mut session = TranslationSession::new(translator.clone())
                .with_input(input, TargetLanguage::French);
            let state = session.submit().await.clone();
            assert_eq!(state, TranslationState::Error(TranslateError::EmptyInput));
        }

        assert_eq!(translator.calls(), 0);
    }

    #[tokio::test]
    async fn starts_idle() {
        let session = TranslationSession::new(ScriptedTranslator::new(vec![]));
        assert_eq!(session.state(), &TranslationState::Idle);
        assert_eq!(session.target, TargetLanguage::Hindi);
        assert!(!session.state().is_loading());
    }

    #[tokio::test]
    async fn success_then_error_then_success() {
        let translator = ScriptedTranslator::new(vec![
            Ok("Hola".into()),
            Err(TranslateError::Provider {
                status: 500,
                message: "boom".into(),
            }),
            Ok("Adiós".into()),
        ]);
        let mut session =
            TranslationSession::new(translator.clone()).with_input("Hello", TargetLanguage::Spanish);

        assert_eq!(session.submit().await, &TranslationState::Success("Hola".into()));
        assert!(matches!(
            session.submit().await,
            TranslationState::Error(TranslateError::Provider { status: 500, .. })
        ));

        session.input_text = "Goodbye".into();
        assert_eq!(session.submit().await, &TranslationState::Success("Adiós".into()));
        assert_eq!(translator.calls(), 3);
    }

    #[tokio::test]
    async fn unavailable_is_reported_not_raised() {
        let translator =
            ScriptedTranslator::new(vec![Err(TranslateError::Unavailable("refused".into()))]);
        let mut session =
            TranslationSession::new(translator).with_input("Hello", TargetLanguage::Korean);

        assert!(matches!(
            session.submit().await,
            TranslationState::Error(TranslateError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn into_translation_reports_outcome() {
        let translator = ScriptedTranslator::new(vec![Ok("Hallo".into())]);

        let blank =
            TranslationSession::new(translator.clone()).with_input(" ", TargetLanguage::German);
        assert_eq!(blank.into_translation().await, Err(TranslateError::EmptyInput));
        assert_eq!(translator.calls(), 0);

        let session =
            TranslationSession::new(translator.clone()).with_input("Hello", TargetLanguage::German);
        assert_eq!(session.into_translation().await, Ok("Hallo".to_string()));
        assert_eq!(translator.calls(), 1);
    }
}
