pub mod config;
pub mod element;
pub mod error;
pub mod handle;
pub mod list;
pub mod queue;
mod sort;

pub use config::QueueConfig;
pub use element::Element;
pub use error::QueueError;
pub use queue::Queue;
