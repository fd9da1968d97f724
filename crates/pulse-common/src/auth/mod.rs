//! Authentication state

mod session;

pub use session::Session;
