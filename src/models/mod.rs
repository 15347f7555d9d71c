//! Data models and types used throughout pumpdash

pub mod confirm;
pub mod events;
pub mod notification;
pub mod pipeline;
pub mod responses;

// Re-export commonly used types
pub use confirm::*;
pub use events::*;
pub use notification::*;
pub use pipeline::*;
pub use responses::*;
