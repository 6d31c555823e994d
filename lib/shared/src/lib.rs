//! Models and pure logic shared by the site shell.

pub mod error;
pub mod mobile_nav;
pub mod navigation;
pub mod site;
pub mod transition;

pub use error::{Error, Result};
