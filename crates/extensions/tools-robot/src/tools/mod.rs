//! Robot tool implementations.

mod describe_surroundings;
mod robot_name;

pub use describe_surroundings::DescribeSurroundingsTool;
pub use robot_name::RobotNameTool;
