//! Immutable per-apply-cycle snapshot of the visual configuration.

use core_types::Rgb;
use settings_core::SettingsStore;

/// Everything the engine needs for one apply cycle, read from the
/// settings store in a single pass. Components receive it by reference
/// and never mutate it; the lifecycle controller replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    pub caret_enabled: bool,
    pub fade_enabled: bool,
    pub caret_speed_ms: u32,
    pub fade_speed_ms: u32,
    /// Packed `0xRRGGBB`; `0` means "unset".
    pub caret_color: u32,
    pub scrollbar_enabled: bool,
    pub scrollbar_color: String,
}

impl EngineConfig {
    pub fn from_store(store: &SettingsStore) -> Self {
        Self {
            caret_enabled: store.smooth_caret(),
            fade_enabled: store.smooth_chars(),
            caret_speed_ms: store.caret_speed(),
            fade_speed_ms: store.fade_speed(),
            caret_color: store.caret_color(),
            scrollbar_enabled: store.smooth_scrollbar(),
            scrollbar_color: store.scrollbar_color().to_string(),
        }
    }

    /// CSS color for the overlay; an unset color falls through to the
    /// host's own text color variable.
    pub fn caret_color_css(&self) -> String {
        if self.caret_color == 0 {
            return "var(--text-normal, #fff)".to_string();
        }
        Rgb(self.caret_color).to_hex()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_store(&SettingsStore::default())
    }
}
