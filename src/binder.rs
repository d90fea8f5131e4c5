//! Property bindings: one option field wired to one typed widget.

use std::fmt;

use crate::color::ColorSlot;
use crate::lens::Lens;
use crate::section::EditorCx;
use crate::tree::GroupId;
use crate::value::{FieldValue, PropertyValue, ValueKind};

type ChangeHandler<O> = Box<dyn Fn(&mut O, PropertyValue) -> bool>;

/// What happened to an edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Written to the options; a refresh was requested.
    Applied,
    /// Wrong kind for the binding; nothing changed and no refresh.
    Dropped,
}

/// Step and bounds for numeric widgets.
///
/// These only shape the widget. Values outside the bounds are still written
/// if a widget emits them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NumberConstraints {
    pub step: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A leaf of the editor tree.
pub struct PropertyBinding<O> {
    key: String,
    label: String,
    kind: ValueKind,
    current: Option<PropertyValue>,
    constraints: NumberConstraints,
    on_change: ChangeHandler<O>,
}

impl<O: 'static> PropertyBinding<O> {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        current: Option<PropertyValue>,
        kind: ValueKind,
        on_change: impl Fn(&mut O, PropertyValue) -> bool + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            current,
            constraints: NumberConstraints::default(),
            on_change: Box::new(on_change),
        }
    }

    /// Run the change protocol for one raw widget value.
    ///
    /// The value's kind must match the binding's kind, otherwise the edit is
    /// dropped without touching `options`.
    pub fn apply(&mut self, options: &mut O, value: PropertyValue) -> EditOutcome {
        if !self.kind.accepts(&value) {
            log::trace!("dropping {:?} for {} property `{}`", value, self.kind, self.key);
            return EditOutcome::Dropped;
        }

        if !(self.on_change)(options, value.clone()) {
            return EditOutcome::Dropped;
        }

        self.current = Some(value);
        EditOutcome::Applied
    }
}

impl<O> PropertyBinding<O> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The value the widget currently shows.
    pub fn current(&self) -> Option<&PropertyValue> {
        self.current.as_ref()
    }

    pub fn constraints(&self) -> NumberConstraints {
        self.constraints
    }
}

impl<O> fmt::Debug for PropertyBinding<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyBinding")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("current", &self.current)
            .field("constraints", &self.constraints)
            .finish_non_exhaustive()
    }
}

/// Returned by the bind calls so callers can tune numeric widgets.
pub struct WidgetHandle<'a, O> {
    binding: &'a mut PropertyBinding<O>,
}

impl<'a, O> WidgetHandle<'a, O> {
    pub(crate) fn new(binding: &'a mut PropertyBinding<O>) -> Self {
        Self { binding }
    }

    pub fn step(self, step: f64) -> Self {
        self.binding.constraints.step = Some(step);
        self
    }

    pub fn min(self, min: f64) -> Self {
        self.binding.constraints.min = Some(min);
        self
    }

    pub fn max(self, max: f64) -> Self {
        self.binding.constraints.max = Some(max);
        self
    }

    pub fn binding(&self) -> &PropertyBinding<O> {
        self.binding
    }
}

/// Bind a scalar field. The widget kind comes from `T`.
pub fn bind_property<'c, O: 'static, T: FieldValue>(
    cx: &'c mut EditorCx<'_, O>,
    group: GroupId,
    key: &str,
    label: &str,
    lens: Lens<O, T>,
) -> WidgetHandle<'c, O> {
    let current = lens.get(cx.options_mut()).to_property_value();

    cx.tree_mut().add_property(
        group,
        key,
        label,
        current,
        T::KIND,
        move |options: &mut O, value| match T::from_property_value(value) {
            Some(value) => {
                *lens.get(options) = value;
                true
            }
            None => false,
        },
    )
}

/// Bind a color field through the normalizer: the widget sees a hex string,
/// edits go back in the field's own shape.
pub fn bind_color<'c, O: 'static, C: ColorSlot>(
    cx: &'c mut EditorCx<'_, O>,
    group: GroupId,
    key: &str,
    label: &str,
    lens: Lens<O, C>,
) -> WidgetHandle<'c, O> {
    let hsl_to_rgb = cx.hsl_to_rgb();
    let current = lens
        .get(cx.options_mut())
        .to_display_value(hsl_to_rgb)
        .map(PropertyValue::Text);

    cx.tree_mut().add_property(
        group,
        key,
        label,
        current,
        ValueKind::Color,
        move |options: &mut O, value| match value {
            PropertyValue::Text(hex) => {
                lens.get(options).apply_display_value(hex);
                true
            }
            _ => false,
        },
    )
}
