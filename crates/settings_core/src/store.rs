//! Typed settings store with revision-based change notification.

use crate::schema::{OptionKey, OptionValue, ValueKind};
use std::fmt;

/// Current value of every plugin option.
///
/// Writes go through the typed setters (or [`SettingsStore::set`] for
/// schema-driven callers); every write bumps [`SettingsStore::revision`],
/// which is the only change signal consumers need.
///
/// # Example
///
/// ```
/// use settings_core::SettingsStore;
///
/// let mut store = SettingsStore::default();
/// let seen = store.revision();
///
/// store.set_caret_speed(120);
/// assert_ne!(store.revision(), seen);
/// assert_eq!(store.caret_speed(), 120);
/// ```
#[derive(Clone, Debug)]
pub struct SettingsStore {
    smooth_caret: bool,
    smooth_chars: bool,
    caret_speed: u32,
    fade_speed: u32,
    caret_color: u32,
    smooth_scrollbar: bool,
    scrollbar_color: String,
    revision: u64,
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self {
            smooth_caret: true,
            smooth_chars: true,
            caret_speed: 80,
            fade_speed: 80,
            caret_color: 0xffffff,
            smooth_scrollbar: true,
            scrollbar_color: "#3b3b3b".to_string(),
            revision: 0,
        }
    }
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic change counter, bumped on every write.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn smooth_caret(&self) -> bool {
        self.smooth_caret
    }

    pub fn smooth_chars(&self) -> bool {
        self.smooth_chars
    }

    pub fn caret_speed(&self) -> u32 {
        self.caret_speed
    }

    pub fn fade_speed(&self) -> u32 {
        self.fade_speed
    }

    /// Packed `0xRRGGBB`; `0` means "unset, use the host's text color".
    pub fn caret_color(&self) -> u32 {
        self.caret_color
    }

    pub fn smooth_scrollbar(&self) -> bool {
        self.smooth_scrollbar
    }

    pub fn scrollbar_color(&self) -> &str {
        &self.scrollbar_color
    }

    pub fn set_smooth_caret(&mut self, value: bool) {
        self.smooth_caret = value;
        self.bump();
    }

    pub fn set_smooth_chars(&mut self, value: bool) {
        self.smooth_chars = value;
        self.bump();
    }

    pub fn set_caret_speed(&mut self, value: u32) {
        self.caret_speed = value;
        self.bump();
    }

    pub fn set_fade_speed(&mut self, value: u32) {
        self.fade_speed = value;
        self.bump();
    }

    pub fn set_caret_color(&mut self, value: u32) {
        self.caret_color = value & 0x00ff_ffff;
        self.bump();
    }

    pub fn set_smooth_scrollbar(&mut self, value: bool) {
        self.smooth_scrollbar = value;
        self.bump();
    }

    pub fn set_scrollbar_color(&mut self, value: impl Into<String>) {
        self.scrollbar_color = value.into();
        self.bump();
    }

    /// Read an option through the dynamic schema view.
    pub fn get(&self, key: OptionKey) -> OptionValue {
        match key {
            OptionKey::SmoothCaret => OptionValue::Bool(self.smooth_caret),
            OptionKey::SmoothChars => OptionValue::Bool(self.smooth_chars),
            OptionKey::CaretSpeed => OptionValue::Uint(self.caret_speed),
            OptionKey::FadeSpeed => OptionValue::Uint(self.fade_speed),
            OptionKey::CaretColor => OptionValue::Uint(self.caret_color),
            OptionKey::SmoothScrollbar => OptionValue::Bool(self.smooth_scrollbar),
            OptionKey::ScrollbarColor => OptionValue::Text(self.scrollbar_color.clone()),
        }
    }

    /// Write an option through the dynamic schema view.
    ///
    /// The value's type must match the option's schema kind.
    pub fn set(&mut self, key: OptionKey, value: OptionValue) -> Result<(), SettingsError> {
        match (key, value) {
            (OptionKey::SmoothCaret, OptionValue::Bool(v)) => self.set_smooth_caret(v),
            (OptionKey::SmoothChars, OptionValue::Bool(v)) => self.set_smooth_chars(v),
            (OptionKey::CaretSpeed, OptionValue::Uint(v)) => self.set_caret_speed(v),
            (OptionKey::FadeSpeed, OptionValue::Uint(v)) => self.set_fade_speed(v),
            (OptionKey::CaretColor, OptionValue::Uint(v)) => self.set_caret_color(v),
            (OptionKey::SmoothScrollbar, OptionValue::Bool(v)) => self.set_smooth_scrollbar(v),
            (OptionKey::ScrollbarColor, OptionValue::Text(v)) => self.set_scrollbar_color(v),
            (key, value) => {
                return Err(SettingsError::TypeMismatch {
                    key,
                    got: value.kind(),
                });
            }
        }
        Ok(())
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum SettingsError {
    TypeMismatch { key: OptionKey, got: ValueKind },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::TypeMismatch { key, got } => {
                write!(
                    f,
                    "option {} expects {:?}, got {:?}",
                    key.name(),
                    key.kind(),
                    got
                )
            }
        }
    }
}

impl std::error::Error for SettingsError {}
