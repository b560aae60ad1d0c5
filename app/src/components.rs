//! Reusable UI components: the site header and the small primitives it is
//! built from, plus the error page used as the router fallback.

pub mod button;
pub mod error_template;
pub mod icons;
pub mod nav_link;
pub mod navbar;
