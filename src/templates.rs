//! Response templates
//!
//! Templates are pre-authored message bodies the composer offers while typing
//! and through the template picker. They are loaded once per session and never
//! modified by the composer.

mod template;
pub mod template_storage;

pub use template::Template;
