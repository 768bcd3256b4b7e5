//! SOAP 1.2 fault reasons

/// Human-readable fault description with its language tag
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaultReason {
    text: Option<String>,
    lang: Option<String>,
}

impl FaultReason {
    pub const DEFAULT_LANG: &'static str = "en";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    /// Sets the `xml:lang` tag; `en` when never set
    pub fn lang(&mut self, lang: impl Into<String>) {
        self.lang = Some(lang.into());
    }

    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn lang_or_default(&self) -> &str {
        self.lang.as_deref().unwrap_or(Self::DEFAULT_LANG)
    }
}
