//! Robot prompt templates.

mod robot_info;

pub use robot_info::RobotInfoPrompt;
