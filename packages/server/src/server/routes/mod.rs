// HTTP routes
pub mod extract;
pub mod status;

pub use extract::*;
pub use status::*;
