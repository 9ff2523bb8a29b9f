//! Page components.

mod landing;

pub use landing::Landing;
