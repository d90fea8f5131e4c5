//! List sections: one group per element of a `Vec` option plus an "add"
//! button that appends a default element.

use crate::lens::Lens;
use crate::section::{EditorCx, Header};
use crate::tree::GroupId;

/// How list elements and the add button are keyed and labeled.
///
/// Element `n` (1-based) gets key `{item_key}_{n}` and label
/// `{item_label} {n}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListSpec {
    pub item_key: String,
    pub item_label: String,
    pub add_key: String,
    pub add_label: String,
}

impl ListSpec {
    pub fn new(item_key: impl Into<String>, item_label: impl Into<String>) -> Self {
        Self {
            item_key: item_key.into(),
            item_label: item_label.into(),
            add_key: "add".into(),
            add_label: "Add".into(),
        }
    }

    pub fn add_button(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.add_key = key.into();
        self.add_label = label.into();
        self
    }

    pub fn element_header(&self, ordinal: usize) -> Header {
        Header::new(
            format!("{}_{}", self.item_key, ordinal),
            format!("{} {}", self.item_label, ordinal),
        )
    }
}

/// Build a list section under `parent`.
///
/// Existing elements are composed in array order with ordinals `1..=len`.
/// The add button pushes `default_element()` onto the live array, composes
/// the new element with ordinal = new length and requests a refresh. There
/// is no remove, so ordinals are never reused and sibling order always
/// matches the array.
pub fn build_list<O, E, C, F>(
    cx: &mut EditorCx<'_, O>,
    parent: GroupId,
    header: Header,
    lens: Lens<O, Vec<E>>,
    spec: ListSpec,
    element_composer: C,
    default_element: F,
) -> GroupId
where
    O: 'static,
    E: 'static,
    C: Fn(&mut EditorCx<'_, O>, GroupId, Header, Lens<O, E>) -> GroupId + 'static,
    F: Fn() -> E + 'static,
{
    let group = cx.add_group(parent, header);

    let len = lens.get(cx.options_mut()).len();
    for index in 0..len {
        element_composer(cx, group, spec.element_header(index + 1), lens.index(index));
    }

    let add_key = spec.add_key.clone();
    let add_label = spec.add_label.clone();
    cx.add_button(group, &add_key, &add_label, move |cx| {
        let items = lens.get(cx.options_mut());
        items.push(default_element());
        let ordinal = items.len();

        element_composer(cx, group, spec.element_header(ordinal), lens.index(ordinal - 1));
        log::debug!("appended {} {}", spec.item_label, ordinal);

        cx.request_refresh();
        Ok(())
    });

    group
}
