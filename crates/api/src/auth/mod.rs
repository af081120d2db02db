//! Bearer-token validation.
//!
//! Token issuance belongs to the external identity provider; this module
//! only validates HS256-signed access tokens and exposes a generator for
//! tests and tooling.

pub mod jwt;
