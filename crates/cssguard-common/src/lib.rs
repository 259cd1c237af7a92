pub mod errors;

pub use errors::{ConfigError, CssGuardError, Rejection};

pub type Result<T> = std::result::Result<T, CssGuardError>;
