pub mod errors;
pub mod format;
pub mod timezone;

pub use errors::extract_clean_error;
