pub mod blocks;
pub mod exec;
pub mod markup;

// Re-export key types for easier usage
pub use blocks::*;
pub use exec::*;
