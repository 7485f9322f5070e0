//! Robot resource implementations.

mod latest_image;

pub use latest_image::{LATEST_IMAGE_URI, LatestImageResource};
