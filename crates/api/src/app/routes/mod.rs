//! One router per resource; `app::build_app_with_services` nests them and
//! attaches the auth layers.

pub mod comments;
pub mod items;
pub mod stats;
pub mod system;
