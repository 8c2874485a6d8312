//! Built-in provider presets.
//!
//! Each preset is a pure factory: it takes the caller's [`OidcUserConfig`] and returns a fully
//! populated [`ProviderDescriptor`] without I/O, logging, or validation.
//!
//! [`OidcUserConfig`]: crate::provider::OidcUserConfig
//! [`ProviderDescriptor`]: crate::provider::ProviderDescriptor

pub mod huggingface;

pub use huggingface::{HuggingFaceProfile, huggingface};
