//! Shared primitive types for the smooth-typing workspace.

/// Axis-aligned rectangle in CSS pixels.
///
/// Matches what a host document reports for a selection range's bounding
/// rectangle: `x`/`y` are the top-left corner in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The "no visual rect" case: a collapsed range with no surrounding
    /// glyph reports zero width and zero height.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// Packed `0xRRGGBB` color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    /// Render as a CSS hex color, e.g. `#ff0000`.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }

    /// Parse `#rgb` or `#rrggbb`. Named colors are out of scope here.
    pub fn parse_hex(value: &str) -> Option<Rgb> {
        let hex = value.trim().strip_prefix('#')?;
        // Length checks below count bytes; multi-byte input must not
        // reach the per-digit slicing.
        if !hex.is_ascii() {
            return None;
        }
        if hex.len() == 3 {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            return Some(Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32));
        }
        if hex.len() == 6 {
            let raw = u32::from_str_radix(hex, 16).ok()?;
            return Some(Rgb(raw));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_needs_both_dimensions_zero() {
        assert!(Rect::new(3.0, 4.0, 0.0, 0.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 0.0, 18.0).is_degenerate());
        assert!(!Rect::new(0.0, 0.0, 2.0, 0.0).is_degenerate());
    }

    #[test]
    fn rgb_to_hex_pads_to_six_digits() {
        assert_eq!(Rgb(0xff0000).to_hex(), "#ff0000");
        assert_eq!(Rgb(0x00000f).to_hex(), "#00000f");
        // High byte is ignored.
        assert_eq!(Rgb(0xff_3b3b3b).to_hex(), "#3b3b3b");
    }

    #[test]
    fn rgb_parse_hex_round_trips() {
        assert_eq!(Rgb::parse_hex("#3b3b3b"), Some(Rgb(0x3b3b3b)));
        assert_eq!(Rgb::parse_hex(" #fff "), Some(Rgb(0xffffff)));
        assert_eq!(Rgb::parse_hex("#f00"), Some(Rgb(0xff0000)));
        assert_eq!(Rgb::parse_hex("red"), None);
        assert_eq!(Rgb::parse_hex("#12345"), None);
    }

    #[test]
    fn rgb_parse_hex_rejects_non_ascii() {
        // 3- and 6-byte UTF-8 payloads hit the length checks for the
        // short and long hex forms; both must reject, not slice.
        assert_eq!(Rgb::parse_hex("#€"), None);
        assert_eq!(Rgb::parse_hex("#€€"), None);
        assert_eq!(Rgb::parse_hex("#fömm"), None);
    }
}
