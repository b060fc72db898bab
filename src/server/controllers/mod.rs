pub mod actions;
pub mod api;
pub mod assets;
pub mod page;
