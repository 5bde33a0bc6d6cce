//! Standard middleware implementations.

pub mod conditional;
pub mod logging;
#[cfg(feature = "timeout")]
pub mod timeout;

pub use conditional::When;
pub use logging::LoggingMiddleware;
#[cfg(feature = "timeout")]
pub use timeout::{TimeoutError, TimeoutMiddleware};
