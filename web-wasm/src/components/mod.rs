pub mod drop_zone;
pub mod error_panel;
pub mod header;
pub mod loading_panel;
pub mod result_panel;
