pub mod config;
pub mod logging;

pub mod error;
pub mod relative;
pub mod resolve;
pub mod url_model;

pub use error::RelativeError;
pub use relative::relative;
pub use resolve::resolve;
pub use url_model::{classify, UrlParts, UrlShape};
