//! Scoped group contexts.

use super::RouteRegistrar;
use std::ops::{Deref, DerefMut};

/// An open group.
///
/// Dereferences to the registrar, so routes declared through the scope pick
/// up its modifier. Dropping the scope closes the group, whether the
/// declaring code returned normally, bailed out with `?`, or panicked.
///
/// # Example
///
/// ```rust
/// use waypost::{Modifier, RouteAction, RouteRegistrar, View};
///
/// let mut registrar = RouteRegistrar::new();
/// {
///     let mut admin = registrar.scope(Modifier::new().prefix("/admin"));
///     admin.add("/users", RouteAction::component(View::new("users"))).unwrap();
/// }
/// assert_eq!(registrar.build_routes()[0].path, "/admin/users");
/// ```
#[must_use = "the group closes as soon as the scope is dropped"]
pub struct RegistrationScope<'a> {
    registrar: &'a mut RouteRegistrar,
    target: bool,
}

impl<'a> RegistrationScope<'a> {
    /// Wrap a registrar whose modifier (and, with `target`, target) stack
    /// has just been pushed.
    pub(super) fn new(registrar: &'a mut RouteRegistrar, target: bool) -> Self {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(
                depth = registrar.modifiers.depth(),
                children = target,
                "entered route group"
            );
        }
        Self { registrar, target }
    }
}

impl Deref for RegistrationScope<'_> {
    type Target = RouteRegistrar;

    fn deref(&self) -> &RouteRegistrar {
        self.registrar
    }
}

impl DerefMut for RegistrationScope<'_> {
    fn deref_mut(&mut self) -> &mut RouteRegistrar {
        self.registrar
    }
}

impl Drop for RegistrationScope<'_> {
    fn drop(&mut self) {
        if self.target {
            self.registrar.targets.pop();
        }
        self.registrar.modifiers.pop();
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(depth = self.registrar.modifiers.depth(), "left route group");
        }
    }
}
