mod about;
mod blog;
mod home;
mod not_found;

pub use about::AboutPage;
pub use blog::BlogPage;
pub use home::HomePage;
pub use not_found::NotFound;
