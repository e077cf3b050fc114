//! egui painting: the navigation bar and the page blocks.

pub mod page;
pub mod panels;
