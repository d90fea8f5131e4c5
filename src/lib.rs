//! # particles-editor
//!
//! A live property editor for particle-animation options.
//!
//! The editor walks a nested options object and builds a tree of collapsible
//! groups, each holding typed property widgets and buttons. Every widget is
//! bound to one field of the live options; editing it writes the field in
//! place and asks the simulation to refresh.
//!
//! ## Quick Start
//!
//! ```ignore
//! use particles_editor::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let options = Rc::new(RefCell::new(Options::default()));
//! let (commands, rx) = command_channel();
//! let mut editor = OptionsEditor::new(Rc::clone(&options), commands)?;
//!
//! editor.edit_path(&["particles", "links"], "enable", true)?;
//! editor.click_path(&["infection", "stages"], "addStage")?;
//!
//! assert!(options.borrow().particles.links.enable);
//! assert_eq!(drain_refreshes(&rx), 2);
//! ```
//!
//! ## Core Concepts
//!
//! ### Sections
//!
//! Each options struct derives [`Section`](derive@Section), which generates
//! its composer: one group for the struct, one widget per scalar field,
//! nested groups for `#[editor(section)]` fields and list sections for
//! `#[editor(list(...))]` fields.
//!
//! ```ignore
//! #[derive(Section, Default)]
//! struct Stage {
//!     #[editor(color)]
//!     color: Option<ColorField>,
//!     #[editor(step = 0.01)]
//!     rate: f64,
//! }
//! ```
//!
//! ### Edits
//!
//! A widget value carries its kind (boolean, number or text). A value whose
//! kind does not match the binding is dropped without touching the options.
//! A matching value is written, then a refresh is requested. The editor
//! never waits for the refresh.
//!
//! ### Colors
//!
//! Color options come in several JSON shapes: a bare string, or an object
//! whose `value` is a string, an RGB object or an HSL object. Widgets always
//! see a hex string. Edits are written back as hex, keeping the bare or
//! wrapped outer shape.
//!
//! ## Feature Overview
//!
//! | Feature | What it adds |
//! |---------|--------------|
//! | default | tree, bindings, options, JSON load/save, presets |
//! | `egui` | [`OptionsEditor::show`] and the `particles-editor` demo binary |

// Lets the derive's `::particles_editor::` paths resolve inside this crate.
extern crate self as particles_editor;

mod binder;
pub mod color;
mod editor;
mod error;
mod lens;
mod list;
pub mod options;
pub mod presets;
pub mod refresh;
mod section;
mod tree;
#[cfg(feature = "egui")]
mod ui;
mod value;

pub use binder::{
    bind_color, bind_property, EditOutcome, NumberConstraints, PropertyBinding, WidgetHandle,
};
pub use color::{hsl_to_rgb, ColorField, ColorSlot, ColorValue, Hsl, HslToRgb, Rgb};
pub use editor::{OptionsEditor, SharedOptions};
pub use error::{ColorShapeError, EditorError};
pub use lens::Lens;
pub use list::{build_list, ListSpec};
pub use options::Options;
pub use particles_editor_derive::Section;
pub use presets::{Preset, PRESETS};
pub use refresh::{command_channel, drain_refreshes, CommandSender, Refresh, SimulationCommand};
pub use section::{EditorCx, Header, Section};
pub use tree::{Button, EditorTree, GroupId, GroupNode};
pub use value::{FieldValue, PropertyValue, ValueKind};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use particles_editor::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{ColorField, ColorValue, Hsl, Rgb};
    pub use crate::editor::{OptionsEditor, SharedOptions};
    pub use crate::error::EditorError;
    pub use crate::options::Options;
    pub use crate::presets::{Preset, PRESETS};
    pub use crate::refresh::{command_channel, drain_refreshes, Refresh, SimulationCommand};
    pub use crate::binder::EditOutcome;
    pub use crate::section::{EditorCx, Header, Section};
    pub use crate::tree::GroupId;
    pub use crate::value::{PropertyValue, ValueKind};
    pub use particles_editor_derive::Section;
    #[cfg(feature = "egui")]
    pub use egui;
}
