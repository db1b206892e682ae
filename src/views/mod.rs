pub mod components;
pub mod homepage;
pub mod layout;
pub mod quiz;
pub mod report;

// Re-export commonly used functions from layout
pub use layout::{page, render, titled};
