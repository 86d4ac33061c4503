pub mod platform;
pub mod ui;

// Re-export the embedding surface
pub use ui::components::BlockList;
pub use ui::registry::{BlockRegistry, BlockView, BlockViewProps};
