//! Color fields and their normalization to an editable hex string.
//!
//! A color in the options can be written several ways:
//!
//! | JSON | Variant |
//! |------|---------|
//! | `"#ff0000"` | [`ColorField::Hex`] |
//! | `{}` | [`ColorField::Wrapped`]`(None)` |
//! | `{ "value": "ff0000" }` | [`ColorValue::Hex`] |
//! | `{ "value": { "r": 255, "g": 0, "b": 0 } }` | [`ColorValue::Rgb`] |
//! | `{ "value": { "h": 0, "s": 100, "l": 50 } }` | [`ColorValue::Hsl`] |
//!
//! The editor shows every shape as one hex string and writes edits back as a
//! hex string while keeping the outer shape (bare string stays a bare string,
//! wrapped stays wrapped). Converting an RGB or HSL value to hex on the first
//! edit is intended.

use glam::DVec3;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ColorShapeError;

/// HSL → RGB conversion used when displaying HSL colors.
///
/// Swappable so the host can match its renderer's rounding.
pub type HslToRgb = fn(Hsl) -> Rgb;

/// An RGB triple, each channel 0-255.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Six lowercase hex digits, no leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Parse `rrggbb` or `rgb`, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match digits.len() {
            6 => Some(Self::new(
                channel(digits.get(0..2)?)?,
                channel(digits.get(2..4)?)?,
                channel(digits.get(4..6)?)?,
            )),
            3 => {
                let short = |i: usize| channel(digits.get(i..i + 1)?).map(|c| c * 17);
                Some(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => None,
        }
    }
}

/// An HSL triple: hue in degrees, saturation and lightness in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Convert HSL to RGB.
///
/// * `h` - 0 to 360
/// * `s`, `l` - 0 to 100
///
/// Channels are floored after scaling to 0-255.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    let channels = if s == 0.0 {
        DVec3::splat(l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        DVec3::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    let scaled = (channels * 255.0)
        .floor()
        .clamp(DVec3::ZERO, DVec3::splat(255.0));

    Rgb::new(scaled.x as u8, scaled.y as u8, scaled.z as u8)
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// The interior of a wrapped color: `{ "value": ... }`.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorValue {
    Hex(String),
    Rgb(Rgb),
    Hsl(Hsl),
}

impl ColorValue {
    /// Discriminate an interior value. An object with an `h` member is HSL,
    /// any other object must be RGB.
    pub fn from_json(value: &Value) -> Result<Self, ColorShapeError> {
        match value {
            Value::String(hex) => Ok(ColorValue::Hex(hex.clone())),
            Value::Object(map) if map.contains_key("h") => serde_json::from_value(value.clone())
                .map(ColorValue::Hsl)
                .map_err(|_| ColorShapeError::new(value)),
            Value::Object(_) => serde_json::from_value(value.clone())
                .map(ColorValue::Rgb)
                .map_err(|_| ColorShapeError::new(value)),
            other => Err(ColorShapeError::new(other)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ColorValue::Hex(hex) => Value::String(hex.clone()),
            ColorValue::Rgb(rgb) => json!({ "r": rgb.r, "g": rgb.g, "b": rgb.b }),
            ColorValue::Hsl(hsl) => json!({ "h": hsl.h, "s": hsl.s, "l": hsl.l }),
        }
    }

    fn to_display_value(&self, hsl_to_rgb: HslToRgb) -> String {
        match self {
            // Strings are assumed to already be renderable.
            ColorValue::Hex(hex) => hex.clone(),
            ColorValue::Rgb(rgb) => rgb.to_hex(),
            ColorValue::Hsl(hsl) => hsl_to_rgb(*hsl).to_hex(),
        }
    }
}

/// A color option in one of its legal shapes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum ColorField {
    /// A bare string.
    Hex(String),
    /// An object, possibly without a `value` yet.
    Wrapped(Option<ColorValue>),
}

impl ColorField {
    /// `{ "value": hex }`
    pub fn wrapped(hex: impl Into<String>) -> Self {
        ColorField::Wrapped(Some(ColorValue::Hex(hex.into())))
    }

    pub fn from_json(value: &Value) -> Result<Self, ColorShapeError> {
        match value {
            Value::String(hex) => Ok(ColorField::Hex(hex.clone())),
            Value::Object(map) => match map.get("value") {
                None | Some(Value::Null) => Ok(ColorField::Wrapped(None)),
                Some(inner) => ColorValue::from_json(inner)
                    .map(|v| ColorField::Wrapped(Some(v)))
                    .map_err(|_| ColorShapeError::new(value)),
            },
            other => Err(ColorShapeError::new(other)),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            ColorField::Hex(hex) => Value::String(hex.clone()),
            ColorField::Wrapped(None) => json!({}),
            ColorField::Wrapped(Some(value)) => json!({ "value": value.to_json() }),
        }
    }
}

impl TryFrom<Value> for ColorField {
    type Error = ColorShapeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ColorField::from_json(&value)
    }
}

impl From<ColorField> for Value {
    fn from(field: ColorField) -> Self {
        field.to_json()
    }
}

/// Storage a color binding can read and write: a required [`ColorField`] or
/// an optional one.
pub trait ColorSlot: 'static {
    /// The hex string shown in the widget, or `None` when no color is set.
    fn to_display_value(&self, hsl_to_rgb: HslToRgb) -> Option<String>;

    /// Store `hex`, keeping the current outer shape.
    fn apply_display_value(&mut self, hex: String);
}

impl ColorSlot for ColorField {
    fn to_display_value(&self, hsl_to_rgb: HslToRgb) -> Option<String> {
        match self {
            ColorField::Hex(hex) => Some(hex.clone()),
            ColorField::Wrapped(value) => value.as_ref().map(|v| v.to_display_value(hsl_to_rgb)),
        }
    }

    fn apply_display_value(&mut self, hex: String) {
        match self {
            ColorField::Hex(current) => *current = hex,
            ColorField::Wrapped(value) => *value = Some(ColorValue::Hex(hex)),
        }
    }
}

impl ColorSlot for Option<ColorField> {
    fn to_display_value(&self, hsl_to_rgb: HslToRgb) -> Option<String> {
        self.as_ref()
            .and_then(|field| field.to_display_value(hsl_to_rgb))
    }

    fn apply_display_value(&mut self, hex: String) {
        match self {
            Some(field) => field.apply_display_value(hex),
            None => *self = Some(ColorField::wrapped(hex)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn red_stub(_: Hsl) -> Rgb {
        Rgb::new(255, 0, 0)
    }

    #[test]
    fn test_bare_string_round_trip() {
        let mut field = ColorField::Hex("1a2b3c".into());
        assert_eq!(field.to_display_value(hsl_to_rgb).as_deref(), Some("1a2b3c"));

        field.apply_display_value("ff00ff".into());
        assert_eq!(field, ColorField::Hex("ff00ff".into()));
    }

    #[test]
    fn test_wrapped_string_round_trip() {
        let mut field = ColorField::wrapped("00ff00");
        assert_eq!(field.to_display_value(hsl_to_rgb).as_deref(), Some("00ff00"));

        field.apply_display_value("112233".into());
        assert_eq!(field, ColorField::wrapped("112233"));
    }

    #[test]
    fn test_rgb_display_is_zero_padded() {
        let field = ColorField::Wrapped(Some(ColorValue::Rgb(Rgb::new(255, 0, 128))));
        assert_eq!(field.to_display_value(hsl_to_rgb).as_deref(), Some("ff0080"));
    }

    #[test]
    fn test_hsl_display_uses_converter() {
        let field = ColorField::Wrapped(Some(ColorValue::Hsl(Hsl { h: 0.0, s: 1.0, l: 0.5 })));
        assert_eq!(field.to_display_value(red_stub).as_deref(), Some("ff0000"));
    }

    #[test]
    fn test_rgb_edit_becomes_hex() {
        let mut field = ColorField::Wrapped(Some(ColorValue::Rgb(Rgb::new(1, 2, 3))));
        field.apply_display_value("abcdef".into());
        assert_eq!(field, ColorField::wrapped("abcdef"));
    }

    #[test]
    fn test_unset_color_first_write() {
        let mut unset: Option<ColorField> = None;
        assert_eq!(unset.to_display_value(hsl_to_rgb), None);

        unset.apply_display_value("abcdef".into());
        assert_eq!(unset, Some(ColorField::wrapped("abcdef")));

        let mut empty = ColorField::Wrapped(None);
        assert_eq!(empty.to_display_value(hsl_to_rgb), None);
        empty.apply_display_value("abcdef".into());
        assert_eq!(empty, ColorField::wrapped("abcdef"));
    }

    #[test]
    fn test_hsl_to_rgb_primaries() {
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 100.0, l: 50.0 }), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl { h: 120.0, s: 100.0, l: 50.0 }), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl { h: 240.0, s: 100.0, l: 50.0 }), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 0.0, l: 100.0 }), Rgb::new(255, 255, 255));
        // Gray is floored, not rounded.
        assert_eq!(hsl_to_rgb(Hsl { h: 0.0, s: 0.0, l: 50.0 }), Rgb::new(127, 127, 127));
    }

    #[test]
    fn test_json_shapes() {
        let cases = [
            (json!("#ffffff"), ColorField::Hex("#ffffff".into())),
            (json!({}), ColorField::Wrapped(None)),
            (json!({ "value": "0d47a1" }), ColorField::wrapped("0d47a1")),
            (
                json!({ "value": { "r": 10, "g": 20, "b": 30 } }),
                ColorField::Wrapped(Some(ColorValue::Rgb(Rgb::new(10, 20, 30)))),
            ),
            (
                json!({ "value": { "h": 200.0, "s": 50.0, "l": 40.0 } }),
                ColorField::Wrapped(Some(ColorValue::Hsl(Hsl { h: 200.0, s: 50.0, l: 40.0 }))),
            ),
        ];

        for (json, expected) in cases {
            let field: ColorField = serde_json::from_value(json.clone()).unwrap();
            assert_eq!(field, expected);
            assert_eq!(serde_json::to_value(&field).unwrap(), json);
        }
    }

    #[test]
    fn test_unrecognized_shapes_fail() {
        for json in [
            json!(42),
            json!(true),
            json!({ "value": 7 }),
            json!({ "value": { "r": 300, "g": 0, "b": 0 } }),
            json!({ "value": { "x": 1 } }),
            json!({ "value": { "h": "red" } }),
        ] {
            let err = ColorField::from_json(&json).unwrap_err();
            assert_eq!(err.found, json.to_string());
            assert!(serde_json::from_value::<ColorField>(json).is_err());
        }
    }

    #[test]
    fn test_hex_parse_accepts_display_output() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let rgb = Rgb::new(rng.gen(), rng.gen(), rng.gen());
            let hex = rgb.to_hex();
            assert_eq!(hex.len(), 6);
            assert_eq!(hex, hex.to_lowercase());
            assert_eq!(Rgb::from_hex(&hex), Some(rgb));
        }

        assert_eq!(Rgb::from_hex("#FFF"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::from_hex("12345"), None);
        assert_eq!(Rgb::from_hex("zzzzzz"), None);
    }
}
