//! Declarative option schema: keys, descriptions, defaults.

/// Every user-facing option of the plugin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionKey {
    SmoothCaret,
    SmoothChars,
    CaretSpeed,
    FadeSpeed,
    CaretColor,
    SmoothScrollbar,
    ScrollbarColor,
}

/// All options, in settings-panel order.
pub const OPTIONS: [OptionKey; 7] = [
    OptionKey::SmoothCaret,
    OptionKey::SmoothChars,
    OptionKey::CaretSpeed,
    OptionKey::FadeSpeed,
    OptionKey::CaretColor,
    OptionKey::SmoothScrollbar,
    OptionKey::ScrollbarColor,
];

impl OptionKey {
    pub fn name(self) -> &'static str {
        match self {
            OptionKey::SmoothCaret => "smooth_caret",
            OptionKey::SmoothChars => "smooth_chars",
            OptionKey::CaretSpeed => "caret_speed",
            OptionKey::FadeSpeed => "fade_speed",
            OptionKey::CaretColor => "caret_color",
            OptionKey::SmoothScrollbar => "smooth_scrollbar",
            OptionKey::ScrollbarColor => "scrollbar_color",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OptionKey::SmoothCaret => "Enable smooth caret (cursor) animation",
            OptionKey::SmoothChars => "Enable smooth character fade-in while typing",
            OptionKey::CaretSpeed => "Caret transition speed (ms) - lower = faster",
            OptionKey::FadeSpeed => "Character fade-in speed (ms) - lower = faster",
            OptionKey::CaretColor => "Caret color (packed RGB, 0 = host text color)",
            OptionKey::SmoothScrollbar => "Enable smooth scrollbar in the text area",
            OptionKey::ScrollbarColor => "Scrollbar color",
        }
    }

    pub fn default_value(self) -> OptionValue {
        match self {
            OptionKey::SmoothCaret => OptionValue::Bool(true),
            OptionKey::SmoothChars => OptionValue::Bool(true),
            OptionKey::CaretSpeed => OptionValue::Uint(80),
            OptionKey::FadeSpeed => OptionValue::Uint(80),
            OptionKey::CaretColor => OptionValue::Uint(0xffffff),
            OptionKey::SmoothScrollbar => OptionValue::Bool(true),
            OptionKey::ScrollbarColor => OptionValue::Text("#3b3b3b".to_string()),
        }
    }

    pub fn kind(self) -> ValueKind {
        self.default_value().kind()
    }
}

/// Dynamically-typed option value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    Uint(u32),
    Text(String),
}

impl OptionValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            OptionValue::Bool(_) => ValueKind::Bool,
            OptionValue::Uint(_) => ValueKind::Uint,
            OptionValue::Text(_) => ValueKind::Text,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Uint,
    Text,
}
