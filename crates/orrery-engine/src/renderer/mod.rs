pub mod instance;
pub mod camera;

// Re-export key types for convenient access
pub use camera::{Camera3D, CameraUniform};
pub use instance::{BodyBuffer, BodyInstance};
