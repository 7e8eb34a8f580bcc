//! HTML handlers: redirects and the management pages.

mod links;
mod redirect;
pub mod templates;

pub use links::{
    add_link_handler, add_usage_handler, delete_empty_handler, delete_link_handler, list_handler,
};
pub use redirect::redirect_handler;
