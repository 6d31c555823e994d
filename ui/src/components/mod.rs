pub mod fonts;
pub mod footer;
pub mod menu_toggle;
pub mod modal;
pub mod navigation_list;

pub use fonts::*;
pub use footer::*;
pub use menu_toggle::*;
pub use modal::*;
pub use navigation_list::*;
