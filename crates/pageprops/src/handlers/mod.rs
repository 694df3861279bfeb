pub mod error;
pub mod health;
pub mod pages;
pub mod paths;
pub mod preview;

pub use error::AppError;
