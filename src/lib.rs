pub mod app;
pub mod brush;
pub mod canvas;
pub mod color;
pub mod export;
pub mod icons;
pub mod logging;
pub mod palette;
pub mod render;
pub mod settings;
pub mod toolbar;
