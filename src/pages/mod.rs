//! Server-rendered screens. Each page owns its own transient state for the
//! duration of one request.

pub mod home;
pub mod layout;
pub mod random_string;
pub mod translate;

pub use home::home;
pub use random_string::random_page;
pub use translate::{translate_page, translate_submit};
