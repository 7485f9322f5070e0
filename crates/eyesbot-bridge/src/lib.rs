//! Request bridging between capability calls and the robot's HTTP API.
//!
//! [`UrlResolver`] turns a relative path into an upstream URL using the
//! configured host and transport-security flag. [`Fetcher`] performs one GET
//! and either returns the body or degrades to an empty payload.
//! [`RobotBridge`] combines the two for the capability layer.

mod bridge;
mod error;
mod fetcher;
mod resolver;

pub use bridge::{CameraIndex, RobotBridge, ROBOT_NAME_PATH, SURROUNDINGS_PATH};
pub use error::BridgeError;
pub use fetcher::{BodyMode, FetchError, FetchErrorKind, Fetcher, Payload, UpstreamRequest};
pub use resolver::{INSECURE_FLAG, Scheme, UrlResolver};
