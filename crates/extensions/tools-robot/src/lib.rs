//! Robot capabilities for EyesBot.
//!
//! Provides the `robot_name` and `describe_surroundings` tools, the latest
//! camera image resource and the `get_robot_info` prompt.

mod extension;
mod prompts;
mod resources;
mod tools;

pub use extension::RobotToolsExtension;
pub use prompts::RobotInfoPrompt;
pub use resources::LatestImageResource;
pub use tools::{DescribeSurroundingsTool, RobotNameTool};
