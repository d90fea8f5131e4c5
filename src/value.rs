//! Value kinds carried by property widgets.

use std::fmt;

/// The kind a property binding accepts. Fixed when the binding is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Boolean,
    Number,
    String,
    /// A hex string edited with a color picker.
    Color,
}

impl ValueKind {
    /// Whether a raw widget value has the primitive this kind expects.
    /// Colors travel as strings.
    pub fn accepts(self, value: &PropertyValue) -> bool {
        matches!(
            (self, value),
            (ValueKind::Boolean, PropertyValue::Bool(_))
                | (ValueKind::Number, PropertyValue::Number(_))
                | (ValueKind::String | ValueKind::Color, PropertyValue::Text(_))
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Color => "color",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A raw value emitted by a widget.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_owned())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// A scalar option type that can back a property widget.
///
/// The kind comes from the field's static type, so a binding never has to
/// guess it from the current value.
pub trait FieldValue: Sized + 'static {
    const KIND: ValueKind;

    /// Seed value for the widget. `None` means the option is unset.
    fn to_property_value(&self) -> Option<PropertyValue>;

    /// Convert an incoming widget value, or `None` if it is the wrong kind.
    fn from_property_value(value: PropertyValue) -> Option<Self>;
}

impl FieldValue for bool {
    const KIND: ValueKind = ValueKind::Boolean;

    fn to_property_value(&self) -> Option<PropertyValue> {
        Some(PropertyValue::Bool(*self))
    }

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for f64 {
    const KIND: ValueKind = ValueKind::Number;

    fn to_property_value(&self) -> Option<PropertyValue> {
        Some(PropertyValue::Number(*self))
    }

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        value.as_number()
    }
}

impl FieldValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn to_property_value(&self) -> Option<PropertyValue> {
        Some(PropertyValue::Text(self.clone()))
    }

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Optional options show as unset until the first edit writes them.
impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: ValueKind = T::KIND;

    fn to_property_value(&self) -> Option<PropertyValue> {
        self.as_ref().and_then(T::to_property_value)
    }

    fn from_property_value(value: PropertyValue) -> Option<Self> {
        T::from_property_value(value).map(Some)
    }
}
