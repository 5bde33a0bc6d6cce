//! Group modifiers and the stack that accumulates them.
//!
//! Entering a group pushes a [`Modifier`] (a delta). The stack keeps, next to
//! each raw modifier, the [`NormalizedModifier`] obtained by folding it into
//! the state of the enclosing depth. Routes snapshot the top state when they
//! are declared.

use bitflags::bitflags;
use waypost_core::{IntoMiddlewareList, MiddlewareRef};

bitflags! {
    /// Fields a modifier replaces instead of extending.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Overwrite: u8 {
        /// Replace the accumulated path prefix.
        const PREFIX = 1 << 0;
        /// Replace the accumulated name prefix.
        const NAME = 1 << 1;
        /// Replace the accumulated middleware chain.
        const MIDDLEWARE = 1 << 2;
    }
}

/// Changes applied to every route declared inside a group.
#[derive(Debug, Clone, Default)]
pub struct Modifier {
    prefix: Option<String>,
    name: Option<String>,
    middleware: Option<Vec<MiddlewareRef>>,
}

impl Modifier {
    /// An empty modifier: the group changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path prefix. A leading `/` is added when missing.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Name prefix, concatenated as is.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Middleware prepended to every route's own chain.
    pub fn middleware(mut self, middleware: impl IntoMiddlewareList) -> Self {
        self.middleware = Some(middleware.into_middleware_list());
        self
    }
}

/// Accumulated modifier state at one nesting depth.
#[derive(Debug, Clone, Default)]
pub struct NormalizedModifier {
    /// Path prefix of every enclosing group, concatenated.
    pub prefix: String,
    /// Name prefix of every enclosing group, concatenated.
    pub name: String,
    /// Middleware of every enclosing group, in declaration order.
    pub middleware: Vec<MiddlewareRef>,
}

impl NormalizedModifier {
    fn from_modifier(modifier: Modifier) -> Self {
        Self {
            prefix: modifier.prefix.unwrap_or_default(),
            name: modifier.name.unwrap_or_default(),
            middleware: modifier.middleware.unwrap_or_default(),
        }
    }

    fn merge(&self, modifier: &Modifier, overwrite: Overwrite) -> Self {
        let mut state = self.clone();
        if let Some(prefix) = &modifier.prefix {
            if overwrite.contains(Overwrite::PREFIX) {
                state.prefix = prefix.clone();
            } else {
                state.prefix.push_str(prefix);
            }
        }
        if let Some(name) = &modifier.name {
            if overwrite.contains(Overwrite::NAME) {
                state.name = name.clone();
            } else {
                state.name.push_str(name);
            }
        }
        if let Some(middleware) = &modifier.middleware {
            if overwrite.contains(Overwrite::MIDDLEWARE) {
                state.middleware = middleware.clone();
            } else {
                state.middleware.extend(middleware.iter().cloned());
            }
        }
        state
    }
}

/// Stack of open group modifiers.
#[derive(Debug, Default)]
pub struct ModifierStack {
    modifiers: Vec<Modifier>,
    states: Vec<NormalizedModifier>,
}

impl ModifierStack {
    /// An empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a group.
    pub fn push(&mut self, mut modifier: Modifier, overwrite: Overwrite) {
        if let Some(prefix) = modifier.prefix.as_mut() {
            normalize_leading_slash(prefix);
        }
        let state = match self.states.last() {
            Some(top) => top.merge(&modifier, overwrite),
            None => NormalizedModifier::from_modifier(modifier.clone()),
        };
        self.modifiers.push(modifier);
        self.states.push(state);
    }

    /// Leave the innermost group.
    pub fn pop(&mut self) {
        self.modifiers.pop();
        self.states.pop();
    }

    /// Accumulated state of the innermost group.
    pub fn top(&self) -> Option<&NormalizedModifier> {
        self.states.last()
    }

    /// Raw modifier of the innermost group.
    pub fn top_modifier(&self) -> Option<&Modifier> {
        self.modifiers.last()
    }

    /// Number of open groups.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Whether no group is open.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

/// Prefix `value` with `/` unless it is empty or already starts with one.
pub(crate) fn normalize_leading_slash(value: &mut String) {
    if !value.is_empty() && !value.starts_with('/') {
        value.insert(0, '/');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypost_core::Outcome;

    fn noop(label: &'static str) -> MiddlewareRef {
        MiddlewareRef::function(|_| async { Outcome::Proceed }).named(label)
    }

    fn labels(state: &NormalizedModifier) -> Vec<&'static str> {
        state.middleware.iter().map(MiddlewareRef::label).collect()
    }

    #[test]
    fn test_first_push_fills_defaults() {
        let mut stack = ModifierStack::new();
        stack.push(Modifier::new(), Overwrite::empty());

        let top = stack.top().unwrap();
        assert_eq!(top.prefix, "");
        assert_eq!(top.name, "");
        assert!(top.middleware.is_empty());
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_nested_pushes_concatenate() {
        let mut stack = ModifierStack::new();
        stack.push(
            Modifier::new().prefix("admin").name("admin.").middleware(noop("auth")),
            Overwrite::empty(),
        );
        stack.push(
            Modifier::new()
                .prefix("/users")
                .name("users.")
                .middleware([noop("audit"), noop("rate")]),
            Overwrite::empty(),
        );

        let top = stack.top().unwrap();
        assert_eq!(top.prefix, "/admin/users");
        assert_eq!(top.name, "admin.users.");
        assert_eq!(labels(top), vec!["auth", "audit", "rate"]);
    }

    #[test]
    fn test_overwrite_replaces_only_named_fields() {
        let mut stack = ModifierStack::new();
        stack.push(
            Modifier::new().prefix("/admin").name("admin.").middleware(noop("auth")),
            Overwrite::empty(),
        );
        stack.push(
            Modifier::new().prefix("").name(".x").middleware(noop("audit")),
            Overwrite::PREFIX | Overwrite::MIDDLEWARE,
        );

        let top = stack.top().unwrap();
        assert_eq!(top.prefix, "");
        assert_eq!(top.name, "admin..x");
        assert_eq!(labels(top), vec!["audit"]);
    }

    #[test]
    fn test_absent_fields_keep_enclosing_state() {
        let mut stack = ModifierStack::new();
        stack.push(Modifier::new().prefix("/a").name("a."), Overwrite::empty());
        stack.push(Modifier::new(), Overwrite::all());

        let top = stack.top().unwrap();
        assert_eq!(top.prefix, "/a");
        assert_eq!(top.name, "a.");
    }

    #[test]
    fn test_pop_restores_previous_state() {
        let mut stack = ModifierStack::new();
        stack.push(Modifier::new().prefix("/a"), Overwrite::empty());
        stack.push(Modifier::new().prefix("/b"), Overwrite::empty());
        assert_eq!(stack.top().unwrap().prefix, "/a/b");

        stack.pop();
        assert_eq!(stack.top().unwrap().prefix, "/a");
        assert_eq!(stack.top_modifier().unwrap().prefix.as_deref(), Some("/a"));

        stack.pop();
        assert!(stack.is_empty());
        assert!(stack.top().is_none());
    }
}
