// ABOUTME: JWT claim names used in issued identity tokens
// ABOUTME: Registered claim names from RFC 7519 and OpenID Connect standard claims

/// Subject
pub const SUB: &str = "sub";
/// Expiration time (integer Unix timestamp)
pub const EXP: &str = "exp";
/// Email address
pub const EMAIL: &str = "email";
/// Given name
pub const GIVEN_NAME: &str = "given_name";
/// Family name
pub const FAMILY_NAME: &str = "family_name";
/// Full display name
pub const NAME: &str = "name";
