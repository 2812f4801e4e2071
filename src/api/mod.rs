//! Lambda handler and request processing

pub mod handler;

// Re-export the main handler for convenience
pub use handler::handler;
