//! Provider-facing descriptors consumed by external OIDC engines.
//!
//! `descriptor` exposes [`ProviderDescriptor`], the immutable record describing one identity
//! provider: routing id, protocol kind, issuer, authorization parameters, the pure profile
//! mapper, presentation metadata, and the caller's overrides. Descriptors are assembled by
//! [`ProviderDescriptorBuilder`], which performs the field-by-field override merge.

pub mod descriptor;

pub use descriptor::*;
