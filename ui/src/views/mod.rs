//! Page views.

mod landing;
pub use landing::Landing;
