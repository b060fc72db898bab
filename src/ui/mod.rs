//! Server-side rendering of the page and the DOM patches sent after each action.

mod app_layout;
mod diff_view;
mod file_list;
mod history_panel;
mod html;
mod patches;
mod status_bar;
mod status_panel;
mod styles;

pub use app_layout::render_page;
pub use patches::{DomPatch, render_patches};
