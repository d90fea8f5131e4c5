//! The editor tree: groups, property bindings and buttons.
//!
//! Groups live in an arena owned by [`EditorTree`] and are addressed by
//! [`GroupId`]. Nothing is ever removed; the tree is dropped as a whole when
//! the editor session ends.

use std::fmt;
use std::rc::Rc;

use crate::binder::{PropertyBinding, WidgetHandle};
use crate::error::EditorError;
use crate::section::EditorCx;
use crate::value::{PropertyValue, ValueKind};

/// Handle to a group inside one [`EditorTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(usize);

impl GroupId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub(crate) type ButtonAction<O> = Rc<dyn Fn(&mut EditorCx<'_, O>) -> Result<(), EditorError>>;

/// A clickable action inside a group.
pub struct Button<O> {
    key: String,
    label: String,
    action: ButtonAction<O>,
}

impl<O> Button<O> {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn action(&self) -> ButtonAction<O> {
        Rc::clone(&self.action)
    }
}

impl<O> fmt::Debug for Button<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A named, collapsible container.
pub struct GroupNode<O> {
    key: String,
    label: String,
    collapsed: bool,
    parent: Option<GroupId>,
    children: Vec<GroupId>,
    properties: Vec<PropertyBinding<O>>,
    buttons: Vec<Button<O>>,
}

impl<O> GroupNode<O> {
    fn new(key: String, label: String, collapsed: bool, parent: Option<GroupId>) -> Self {
        Self {
            key,
            label,
            collapsed,
            parent,
            children: Vec::new(),
            properties: Vec::new(),
            buttons: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }

    /// Child groups in creation order.
    pub fn children(&self) -> &[GroupId] {
        &self.children
    }

    /// Bindings in creation order.
    pub fn properties(&self) -> &[PropertyBinding<O>] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&PropertyBinding<O>> {
        self.properties.iter().find(|p| p.key() == key)
    }

    pub fn property_mut(&mut self, key: &str) -> Option<&mut PropertyBinding<O>> {
        self.properties.iter_mut().find(|p| p.key() == key)
    }

    pub fn buttons(&self) -> &[Button<O>] {
        &self.buttons
    }

    pub fn button(&self, key: &str) -> Option<&Button<O>> {
        self.buttons.iter().find(|b| b.key() == key)
    }
}

impl<O> fmt::Debug for GroupNode<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupNode")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("collapsed", &self.collapsed)
            .field("children", &self.children)
            .field("properties", &self.properties)
            .field("buttons", &self.buttons)
            .finish()
    }
}

/// Arena of groups rooted at an unlabeled, expanded root.
pub struct EditorTree<O> {
    groups: Vec<GroupNode<O>>,
}

impl<O: 'static> EditorTree<O> {
    pub fn new() -> Self {
        Self {
            groups: vec![GroupNode::new(String::new(), String::new(), false, None)],
        }
    }

    pub fn root(&self) -> GroupId {
        GroupId(0)
    }

    /// Number of groups, root included.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.len() <= 1
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupNode<O>> {
        self.groups.get(id.0)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut GroupNode<O>> {
        self.groups.get_mut(id.0)
    }

    /// Add a child group. Keys are not deduplicated: adding the same key twice
    /// creates two siblings.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_group(
        &mut self,
        parent: GroupId,
        key: impl Into<String>,
        label: impl Into<String>,
        collapsed: bool,
    ) -> GroupId {
        let id = GroupId(self.groups.len());
        self.groups
            .push(GroupNode::new(key.into(), label.into(), collapsed, Some(parent)));
        self.groups[parent.0].children.push(id);
        id
    }

    /// Add a property widget to `group`.
    ///
    /// # Panics
    ///
    /// Panics if `group` does not belong to this tree.
    pub fn add_property(
        &mut self,
        group: GroupId,
        key: &str,
        label: &str,
        current: Option<PropertyValue>,
        kind: ValueKind,
        on_change: impl Fn(&mut O, PropertyValue) -> bool + 'static,
    ) -> WidgetHandle<'_, O> {
        let properties = &mut self.groups[group.0].properties;
        properties.push(PropertyBinding::new(key, label, current, kind, on_change));
        let last = properties.len() - 1;
        WidgetHandle::new(&mut properties[last])
    }

    /// Add a button to `group`.
    ///
    /// # Panics
    ///
    /// Panics if `group` does not belong to this tree.
    pub fn add_button(
        &mut self,
        group: GroupId,
        key: &str,
        label: &str,
        action: impl Fn(&mut EditorCx<'_, O>) -> Result<(), EditorError> + 'static,
    ) -> &Button<O> {
        let buttons = &mut self.groups[group.0].buttons;
        buttons.push(Button {
            key: key.to_owned(),
            label: label.to_owned(),
            action: Rc::new(action),
        });
        &buttons[buttons.len() - 1]
    }

    /// The first child of `parent` with this key.
    pub fn child(&self, parent: GroupId, key: &str) -> Option<GroupId> {
        self.group(parent)?
            .children
            .iter()
            .copied()
            .find(|&child| self.groups[child.0].key == key)
    }

    /// Follow a key path from the root.
    pub fn find(&self, path: &[&str]) -> Option<GroupId> {
        path.iter()
            .try_fold(self.root(), |group, key| self.child(group, key))
    }

    /// Keys from the root down to `id`, for messages and logs.
    pub fn path_of(&self, id: GroupId) -> String {
        let mut keys = Vec::new();
        let mut cursor = Some(id);
        while let Some(group) = cursor.and_then(|id| self.group(id)) {
            if group.parent.is_some() {
                keys.push(group.key.as_str());
            }
            cursor = group.parent;
        }
        keys.reverse();
        keys.join(".")
    }

    /// Depth-first walk in child order, root first.
    pub fn walk(&self) -> Vec<GroupId> {
        let mut order = Vec::with_capacity(self.groups.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.groups[id.0].children.iter().rev().copied());
        }
        order
    }
}

impl<O: 'static> Default for EditorTree<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> fmt::Debug for EditorTree<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.groups.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_keep_creation_order() {
        let mut tree = EditorTree::<()>::new();
        let root = tree.root();
        let a = tree.add_group(root, "a", "A", true);
        let b = tree.add_group(root, "b", "B", true);
        let a1 = tree.add_group(a, "a1", "A1", false);

        assert_eq!(tree.group(root).unwrap().children(), &[a, b]);
        assert_eq!(tree.group(a1).unwrap().parent(), Some(a));
        assert!(!tree.group(a1).unwrap().is_collapsed());
        assert_eq!(tree.walk(), vec![root, a, a1, b]);
    }

    #[test]
    fn test_duplicate_keys_create_siblings() {
        let mut tree = EditorTree::<()>::new();
        let root = tree.root();
        let first = tree.add_group(root, "dup", "Dup", true);
        let second = tree.add_group(root, "dup", "Dup", true);

        assert_ne!(first, second);
        assert_eq!(tree.group(root).unwrap().children().len(), 2);
        assert_eq!(tree.find(&["dup"]), Some(first));
    }

    #[test]
    fn test_find_and_path() {
        let mut tree = EditorTree::<()>::new();
        let options = tree.add_group(tree.root(), "options", "Options", false);
        let links = tree.add_group(options, "links", "Links", true);
        let shadow = tree.add_group(links, "shadow", "Shadow", true);

        assert_eq!(tree.find(&["options", "links", "shadow"]), Some(shadow));
        assert_eq!(tree.find(&["options", "missing"]), None);
        assert_eq!(tree.find(&[]), Some(tree.root()));
        assert_eq!(tree.path_of(shadow), "options.links.shadow");
    }

    #[test]
    fn test_widget_handle_sets_constraints() {
        let mut tree = EditorTree::<f64>::new();
        let root = tree.root();
        tree.add_property(
            root,
            "opacity",
            "Opacity",
            Some(PropertyValue::Number(1.0)),
            ValueKind::Number,
            |value: &mut f64, raw| {
                *value = raw.as_number().unwrap_or(*value);
                true
            },
        )
        .step(0.01)
        .min(0.0)
        .max(1.0);

        let binding = tree.group(root).unwrap().property("opacity").unwrap();
        let constraints = binding.constraints();
        assert_eq!(constraints.step, Some(0.01));
        assert_eq!(constraints.min, Some(0.0));
        assert_eq!(constraints.max, Some(1.0));
    }
}
