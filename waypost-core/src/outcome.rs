//! Middleware outcomes and conversion into them.

use crate::{error::BoxError, location::RouteLocationRaw};

/// What a middleware (or a whole chain) decided about a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No opinion. The host proceeds as if nothing intercepted the navigation.
    Pass,
    /// Explicitly allow the navigation.
    Proceed,
    /// Cancel the navigation.
    Block,
    /// Send the navigation somewhere else.
    Redirect(RouteLocationRaw),
}

impl Outcome {
    /// Redirect to `target`.
    pub fn redirect(target: impl Into<RouteLocationRaw>) -> Self {
        Self::Redirect(target.into())
    }

    /// Whether the navigation may continue (`Pass` or `Proceed`).
    pub fn is_proceeding(&self) -> bool {
        matches!(self, Self::Pass | Self::Proceed)
    }

    /// The redirect target, if any.
    pub fn redirect_target(&self) -> Option<&RouteLocationRaw> {
        match self {
            Self::Redirect(target) => Some(target),
            _ => None,
        }
    }
}

impl From<bool> for Outcome {
    fn from(allow: bool) -> Self {
        if allow { Self::Proceed } else { Self::Block }
    }
}

impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Self::Pass
    }
}

impl From<RouteLocationRaw> for Outcome {
    fn from(target: RouteLocationRaw) -> Self {
        Self::Redirect(target)
    }
}

/// Trait for converting a middleware function's output into an [`Outcome`].
///
/// # Default Implementations
///
/// - `()` → `Pass`
/// - `bool` → `true` = `Proceed`, `false` = `Block`
/// - `String` / `&'static str` / [`RouteLocationRaw`] → `Redirect`
/// - `Option<T>` → `None` = `Pass`, otherwise delegates
/// - `Result<T, E>` → delegates to `T` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a navigation `Outcome`",
    label = "missing `IntoOutcome` implementation",
    note = "Middleware functions must return `()`, `bool`, a location, `Outcome`, or a `Result` of those."
)]
pub trait IntoOutcome {
    /// Convert into an outcome or an error.
    fn into_outcome(self) -> Result<Outcome, BoxError>;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(self)
    }
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(Outcome::Pass)
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(self.into())
    }
}

impl IntoOutcome for RouteLocationRaw {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(Outcome::Redirect(self))
    }
}

impl IntoOutcome for String {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(Outcome::Redirect(RouteLocationRaw::Path(self)))
    }
}

impl IntoOutcome for &'static str {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        Ok(Outcome::Redirect(self.into()))
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(Outcome::Pass),
        }
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<Outcome, BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}
