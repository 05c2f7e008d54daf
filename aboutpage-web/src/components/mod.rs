pub mod about_page;
pub mod nav_bar;
pub mod scroll_nav;
pub mod section;

pub use about_page::AboutPage;
