//! The editor session: a composed tree over shared options.

use std::cell::RefCell;
use std::rc::Rc;

use crate::binder::EditOutcome;
use crate::color::{hsl_to_rgb, HslToRgb};
use crate::error::EditorError;
use crate::lens::Lens;
use crate::refresh::Refresh;
use crate::section::{EditorCx, Header, Section};
use crate::tree::{EditorTree, GroupId};
use crate::value::PropertyValue;

/// Options shared between the editor and the simulation that renders them.
///
/// The editor only ever writes fields; the `Rc` itself is never replaced, so
/// the simulation's handle stays valid for the whole session.
pub type SharedOptions<O> = Rc<RefCell<O>>;

/// An options editor: the tree, the options it edits and the refresh hook.
pub struct OptionsEditor<O> {
    options: SharedOptions<O>,
    tree: EditorTree<O>,
    root: GroupId,
    refresh: Box<dyn Refresh>,
    hsl_to_rgb: HslToRgb,
}

impl<O: Section> OptionsEditor<O> {
    /// Compose the whole tree under an expanded `options` group.
    pub fn new(
        options: SharedOptions<O>,
        refresh: impl Refresh + 'static,
    ) -> Result<Self, EditorError> {
        Self::with_converter(options, refresh, hsl_to_rgb)
    }

    /// Like [`new`](Self::new) with a custom HSL → RGB conversion for
    /// displaying HSL colors.
    pub fn with_converter(
        options: SharedOptions<O>,
        refresh: impl Refresh + 'static,
        hsl_to_rgb: HslToRgb,
    ) -> Result<Self, EditorError> {
        let mut tree = EditorTree::new();
        let parent = tree.root();

        let root = {
            let mut borrowed = options
                .try_borrow_mut()
                .map_err(|_| EditorError::OptionsBusy)?;
            let mut cx = EditorCx::new(&mut tree, &mut *borrowed, hsl_to_rgb);
            O::compose(
                &mut cx,
                parent,
                Header::new("options", "Options").expanded(),
                Lens::root(),
            )
        };

        log::debug!("options editor built with {} groups", tree.len());

        Ok(Self {
            options,
            tree,
            root,
            refresh: Box::new(refresh),
            hsl_to_rgb,
        })
    }
}

impl<O: 'static> OptionsEditor<O> {
    pub fn options(&self) -> &SharedOptions<O> {
        &self.options
    }

    pub fn tree(&self) -> &EditorTree<O> {
        &self.tree
    }

    #[cfg(feature = "egui")]
    pub(crate) fn tree_mut(&mut self) -> &mut EditorTree<O> {
        &mut self.tree
    }

    /// The top `options` group.
    pub fn root(&self) -> GroupId {
        self.root
    }

    /// Find a group by keys below the top group, e.g. `["particles", "links"]`.
    pub fn group(&self, path: &[&str]) -> Result<GroupId, EditorError> {
        path.iter()
            .try_fold(self.root, |group, key| self.tree.child(group, key))
            .ok_or_else(|| EditorError::UnknownPath(path.join(".")))
    }

    /// Deliver a widget value to the property `key` of `group`.
    ///
    /// A value of the wrong kind is dropped. A matching value is written and a
    /// refresh is requested without waiting for it.
    ///
    /// # Panics
    ///
    /// Panics if a list element bound by this tree was removed from the
    /// options behind the editor's back. Lists only grow during a session.
    pub fn edit(
        &mut self,
        group: GroupId,
        key: &str,
        value: PropertyValue,
    ) -> Result<EditOutcome, EditorError> {
        let path = self.tree.path_of(group);
        let node = self
            .tree
            .group_mut(group)
            .ok_or(EditorError::UnknownGroup(group))?;
        let binding = node
            .property_mut(key)
            .ok_or_else(|| EditorError::UnknownProperty {
                group: path.clone(),
                key: key.to_owned(),
            })?;

        let outcome = {
            let mut options = self
                .options
                .try_borrow_mut()
                .map_err(|_| EditorError::OptionsBusy)?;
            binding.apply(&mut options, value)
        };

        if outcome == EditOutcome::Applied {
            log::debug!("{}.{} edited", path, key);
            self.refresh.refresh();
        }

        Ok(outcome)
    }

    /// [`edit`](Self::edit) addressed by key path.
    pub fn edit_path(
        &mut self,
        path: &[&str],
        key: &str,
        value: impl Into<PropertyValue>,
    ) -> Result<EditOutcome, EditorError> {
        let group = self.group(path)?;
        self.edit(group, key, value.into())
    }

    /// Run the action of button `key` in `group`.
    pub fn click(&mut self, group: GroupId, key: &str) -> Result<(), EditorError> {
        let action = self
            .tree
            .group(group)
            .ok_or(EditorError::UnknownGroup(group))?
            .button(key)
            .map(|button| button.action())
            .ok_or_else(|| EditorError::UnknownButton {
                group: self.tree.path_of(group),
                key: key.to_owned(),
            })?;

        let refresh = {
            let mut options = self
                .options
                .try_borrow_mut()
                .map_err(|_| EditorError::OptionsBusy)?;
            let mut cx = EditorCx::new(&mut self.tree, &mut *options, self.hsl_to_rgb);
            action(&mut cx)?;
            cx.refresh_requested()
        };

        if refresh {
            self.refresh.refresh();
        }

        Ok(())
    }

    /// [`click`](Self::click) addressed by key path.
    pub fn click_path(&mut self, path: &[&str], key: &str) -> Result<(), EditorError> {
        let group = self.group(path)?;
        self.click(group, key)
    }
}
