//! Preview-mode authorization.
//!
//! Preview requests carry a key derived from the instance security key. The
//! derivation is fixed by the CMS so the front-end and the CMS agree on it.

mod error;
mod key;
mod validation;

pub use error::{PreviewError, Result};
pub use key::generate_preview_key;
pub use validation::{sanitize_preview_key, validate_preview_key, PreviewValidation};
