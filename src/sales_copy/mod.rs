pub mod dtos;
pub mod errors;
pub mod handlers;

pub use errors::CopyError;
pub use handlers::extract_and_copy;
