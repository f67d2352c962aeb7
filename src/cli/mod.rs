pub mod render;
pub mod setup;
pub mod theme;
pub mod ui;
