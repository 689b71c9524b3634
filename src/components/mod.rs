pub mod bfs_canvas;
pub mod controls;
pub mod log_panel;

pub use controls::ControlsPanel;
pub use log_panel::LogPanel;
