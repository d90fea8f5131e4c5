//! The particle options edited by the editor.
//!
//! These types serialize to the camelCase JSON the particle engine reads.
//! Every section has `#[serde(default)]`, so partial documents load.

mod background;
mod background_mask;
mod infection;
mod interactivity;
mod links;
mod particles;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::color::ColorField;
use crate::error::{ColorShapeError, EditorError};
use crate::Section;

pub use background::Background;
pub use background_mask::{BackgroundMask, BackgroundMaskCover};
pub use infection::{Infection, InfectionStage};
pub use interactivity::{
    Bubble, ClickEvent, Connect, Events, Grab, HoverEvent, Interactivity, Modes, Parallax, Push,
    Remove, Repulse,
};
pub use links::{Links, LinksShadow, LinksTriangles};
pub use particles::{Density, Move, Number, Opacity, Particles, Shape, Size, Stroke};

/// Root of the particle options.
#[derive(Section, Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    #[editor(section)]
    pub background: Background,
    #[editor(section)]
    pub background_mask: BackgroundMask,
    #[editor(section)]
    pub infection: Infection,
    #[editor(section)]
    pub interactivity: Interactivity,
    #[editor(section)]
    pub particles: Particles,
    pub auto_play: bool,
    pub detect_retina: bool,
    #[editor(label = "FPS Limit")]
    pub fps_limit: f64,
    #[editor(label = "Pause on Blur")]
    pub pause_on_blur: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            background: Background::default(),
            background_mask: BackgroundMask::default(),
            infection: Infection::default(),
            interactivity: Interactivity::default(),
            particles: Particles::default(),
            auto_play: true,
            detect_retina: true,
            fps_limit: 60.0,
            pause_on_blur: true,
        }
    }
}

impl Options {
    /// Parse options from a JSON document.
    ///
    /// A `color` entry in a shape the normalizer does not know fails with
    /// [`EditorError::UnrecognizedColor`].
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let value: Value = serde_json::from_str(json)?;
        Options::deserialize(&value).map_err(|err| match color_error(&value) {
            Some(color) => EditorError::UnrecognizedColor(color),
            None => EditorError::Json(err),
        })
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EditorError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// The first `color` entry anywhere in `value` that is not a known shape.
fn color_error(value: &Value) -> Option<ColorShapeError> {
    match value {
        Value::Object(map) => map.iter().find_map(|(key, child)| {
            if key == "color" && !child.is_null() {
                if let Err(err) = ColorField::from_json(child) {
                    return Some(err);
                }
            }
            color_error(child)
        }),
        Value::Array(items) => items.iter().find_map(color_error),
        _ => None,
    }
}
