//! Pure helpers for request parsing.
//!
//! - [`add_request`] - Validation of `{protocol}/{shortname}/{target}` add paths
//! - [`path_resolver`] - Splitting redirect paths into shortname and remainder

pub mod add_request;
pub mod path_resolver;
