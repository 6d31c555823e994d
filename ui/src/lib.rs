//! This crate contains the site shell shared by every page.

mod navbar;
pub use navbar::Navbar;

mod layout;
pub use layout::Layout;

mod components;
pub use components::*;

#[cfg(test)]
mod test_utils;
