//! egui rendering of the editor tree.
//!
//! Widgets are drawn from a shared borrow of the tree. Anything the user
//! does is queued as a [`UiEvent`] and dispatched once the frame's layout is
//! done, since an edit or a click needs the tree mutably.

use crate::binder::{EditOutcome, PropertyBinding};
use crate::color::Rgb;
use crate::editor::OptionsEditor;
use crate::tree::{EditorTree, GroupId};
use crate::value::{PropertyValue, ValueKind};

enum UiEvent {
    Edit {
        group: GroupId,
        key: String,
        value: PropertyValue,
    },
    Click {
        group: GroupId,
        key: String,
    },
    Toggle {
        group: GroupId,
        collapsed: bool,
    },
}

impl<O: 'static> OptionsEditor<O> {
    /// Render the tree. Returns `true` if any edit or click changed the
    /// options this frame.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        let mut events = Vec::new();
        show_group(ui, self.tree(), self.root(), &mut events);

        let mut changed = false;
        for event in events {
            let result = match event {
                UiEvent::Edit { group, key, value } => self
                    .edit(group, &key, value)
                    .map(|outcome| outcome == EditOutcome::Applied),
                UiEvent::Click { group, key } => self.click(group, &key).map(|()| true),
                UiEvent::Toggle { group, collapsed } => {
                    if let Some(node) = self.tree_mut().group_mut(group) {
                        node.set_collapsed(collapsed);
                    }
                    Ok(false)
                }
            };

            match result {
                Ok(applied) => changed |= applied,
                Err(err) => log::warn!("editor event failed: {}", err),
            }
        }

        changed
    }
}

fn show_group<O: 'static>(
    ui: &mut egui::Ui,
    tree: &EditorTree<O>,
    id: GroupId,
    events: &mut Vec<UiEvent>,
) {
    let Some(group) = tree.group(id) else {
        return;
    };

    let response = egui::CollapsingHeader::new(group.label())
        .id_salt(("group", id.index()))
        .default_open(!group.is_collapsed())
        .show(ui, |ui| {
            if !group.properties().is_empty() {
                egui::Grid::new(("properties", id.index()))
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui| {
                        for binding in group.properties() {
                            ui.label(binding.label());
                            if let Some(value) = property_widget(ui, binding) {
                                events.push(UiEvent::Edit {
                                    group: id,
                                    key: binding.key().to_owned(),
                                    value,
                                });
                            }
                            ui.end_row();
                        }
                    });
            }

            for &child in group.children() {
                show_group(ui, tree, child, events);
            }

            for button in group.buttons() {
                if ui.button(button.label()).clicked() {
                    events.push(UiEvent::Click {
                        group: id,
                        key: button.key().to_owned(),
                    });
                }
            }
        });

    if response.header_response.clicked() {
        events.push(UiEvent::Toggle {
            group: id,
            collapsed: !group.is_collapsed(),
        });
    }
}

/// Draw one binding's widget, returning the new raw value if it changed.
fn property_widget<O: 'static>(
    ui: &mut egui::Ui,
    binding: &PropertyBinding<O>,
) -> Option<PropertyValue> {
    let current = binding.current();

    match binding.kind() {
        ValueKind::Boolean => {
            let mut value = current.and_then(PropertyValue::as_bool).unwrap_or_default();
            if ui.checkbox(&mut value, "").changed() {
                Some(PropertyValue::Bool(value))
            } else {
                None
            }
        }
        ValueKind::Number => {
            let mut value = current.and_then(PropertyValue::as_number).unwrap_or_default();
            let constraints = binding.constraints();
            let min = constraints.min.unwrap_or(f64::NEG_INFINITY);
            let max = constraints.max.unwrap_or(f64::INFINITY);
            let drag = egui::DragValue::new(&mut value)
                .speed(constraints.step.unwrap_or(1.0))
                .range(min..=max);
            if ui.add(drag).changed() {
                Some(PropertyValue::Number(value))
            } else {
                None
            }
        }
        ValueKind::String => {
            let mut text = current
                .and_then(PropertyValue::as_text)
                .unwrap_or_default()
                .to_owned();
            if ui.add(egui::TextEdit::singleline(&mut text)).changed() {
                Some(PropertyValue::Text(text))
            } else {
                None
            }
        }
        ValueKind::Color => {
            // Named colors and other non-hex strings show as black until edited.
            let rgb = current
                .and_then(PropertyValue::as_text)
                .and_then(Rgb::from_hex)
                .unwrap_or(Rgb::new(0, 0, 0));
            let mut srgb = [rgb.r, rgb.g, rgb.b];
            if ui.color_edit_button_srgb(&mut srgb).changed() {
                let hex = Rgb::new(srgb[0], srgb[1], srgb[2]).to_hex();
                Some(PropertyValue::Text(format!("#{}", hex)))
            } else {
                None
            }
        }
    }
}
