//! Field locations inside the options object.
//!
//! A [`Lens`] is the getter/setter pair a binding holds: given the whole
//! options object it yields a mutable reference to one field. Bindings keep
//! lenses, never copies of values, so every edit lands on the live object.

use std::fmt;
use std::rc::Rc;

type Focus<O, T> = dyn Fn(&mut O) -> &mut T;

/// A path from the options root `O` to a value of type `T`.
pub struct Lens<O, T> {
    focus: Rc<Focus<O, T>>,
}

impl<O: 'static, T: 'static> Lens<O, T> {
    pub fn new(focus: impl Fn(&mut O) -> &mut T + 'static) -> Self {
        Self {
            focus: Rc::new(focus),
        }
    }

    /// Resolve the lens against the options object.
    pub fn get<'a>(&self, options: &'a mut O) -> &'a mut T {
        (self.focus)(options)
    }

    /// Narrow the lens to a field of `T`.
    pub fn field<U: 'static>(&self, field: impl Fn(&mut T) -> &mut U + 'static) -> Lens<O, U> {
        let outer = Rc::clone(&self.focus);
        Lens::<O, U>::new(move |options| field(outer(options)))
    }
}

impl<O: 'static> Lens<O, O> {
    pub fn root() -> Self {
        Self::new(|options| options)
    }
}

impl<O: 'static, E: 'static> Lens<O, Vec<E>> {
    /// Narrow to the element at `index`.
    ///
    /// List elements are only ever appended, so an index stays valid for the
    /// whole editor session.
    ///
    /// # Panics
    ///
    /// [`get`](Lens::get) on the returned lens panics if the list no longer
    /// has an element at `index`.
    pub fn index(&self, index: usize) -> Lens<O, E> {
        self.field(move |items| &mut items[index])
    }
}

impl<O, T> Clone for Lens<O, T> {
    fn clone(&self) -> Self {
        Self {
            focus: Rc::clone(&self.focus),
        }
    }
}

impl<O, T> fmt::Debug for Lens<O, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lens")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}
