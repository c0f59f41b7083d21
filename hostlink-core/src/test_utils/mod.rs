//! Test doubles for the environment capabilities.
//!
//! Available behind the `test-utils` feature flag. These are minimal
//! implementations that prove the trait APIs are usable.

mod null_environment;
mod recording_wire;
mod stub_environment;

pub use null_environment::NullEnvironment;
pub use recording_wire::RecordingWire;
pub use stub_environment::StubEnvironment;
