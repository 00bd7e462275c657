//! HTTP middleware.

mod logging;
mod session;

pub use logging::*;
pub use session::*;
