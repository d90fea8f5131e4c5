//! Section composers and the context they build with.
//!
//! A section is one struct of the options object. Its composer adds a group
//! under a parent, binds the struct's scalar fields, recurses into nested
//! sections and builds list sections for its `Vec` fields. Composers are
//! normally generated with `#[derive(Section)]`.

use crate::color::HslToRgb;
use crate::error::EditorError;
use crate::lens::Lens;
use crate::tree::{Button, EditorTree, GroupId};

/// Key, label and initial fold state of a group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub key: String,
    pub label: String,
    pub collapsed: bool,
}

impl Header {
    /// A header that starts collapsed.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            collapsed: true,
        }
    }

    pub fn expanded(mut self) -> Self {
        self.collapsed = false;
        self
    }
}

/// Everything a composer or a button action may touch: the tree, the live
/// options and the color converter.
///
/// The options are borrowed for the lifetime of the context, so composers
/// read current values directly and actions can mutate before composing.
pub struct EditorCx<'a, O> {
    tree: &'a mut EditorTree<O>,
    options: &'a mut O,
    hsl_to_rgb: HslToRgb,
    refresh_requested: bool,
}

impl<'a, O: 'static> EditorCx<'a, O> {
    pub fn new(tree: &'a mut EditorTree<O>, options: &'a mut O, hsl_to_rgb: HslToRgb) -> Self {
        Self {
            tree,
            options,
            hsl_to_rgb,
            refresh_requested: false,
        }
    }

    pub fn tree(&self) -> &EditorTree<O> {
        &*self.tree
    }

    pub fn tree_mut(&mut self) -> &mut EditorTree<O> {
        &mut *self.tree
    }

    pub fn options(&self) -> &O {
        &*self.options
    }

    pub fn options_mut(&mut self) -> &mut O {
        &mut *self.options
    }

    pub fn hsl_to_rgb(&self) -> HslToRgb {
        self.hsl_to_rgb
    }

    pub fn add_group(&mut self, parent: GroupId, header: Header) -> GroupId {
        self.tree
            .add_group(parent, header.key, header.label, header.collapsed)
    }

    pub fn add_button(
        &mut self,
        group: GroupId,
        key: &str,
        label: &str,
        action: impl Fn(&mut EditorCx<'_, O>) -> Result<(), EditorError> + 'static,
    ) -> &Button<O> {
        self.tree.add_button(group, key, label, action)
    }

    /// Ask for a refresh once the current action returns.
    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
    }

    pub fn refresh_requested(&self) -> bool {
        self.refresh_requested
    }
}

/// A struct of the options object that knows how to lay itself out.
pub trait Section: Sized + 'static {
    /// Add this section's group under `parent` and populate it.
    ///
    /// `lens` locates this section inside the options root `O`. Returns the
    /// new group.
    fn compose<O: 'static>(
        cx: &mut EditorCx<'_, O>,
        parent: GroupId,
        header: Header,
        lens: Lens<O, Self>,
    ) -> GroupId;
}
