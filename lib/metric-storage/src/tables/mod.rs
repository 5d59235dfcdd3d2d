//! Concrete entity kinds.

pub mod instance_performance;

pub use instance_performance::InstancePerformance;
