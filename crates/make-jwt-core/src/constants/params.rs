// ABOUTME: Parameter names recognised on the command line and in parameter files
// ABOUTME: Also holds the default token lifetime and the parameter file name

/// Default token lifetime in seconds
pub const DEFAULT_LIFETIME_SECS: u64 = 300;

/// Parameter file name, looked up in the home directory and the working directory
pub const PARAMETER_FILE_NAME: &str = ".make-jwt";

/// Token lifetime in seconds
pub const LIFETIME: &str = "lifetime";
/// Path to the PEM private key
pub const KEY_PATH: &str = "key-path";
/// Password for an encrypted private key
pub const KEY_PASS: &str = "key-pass";
/// Username, emitted as `sub`
pub const USERNAME: &str = "username";
/// Email address
pub const EMAIL: &str = "email";
/// Given name
pub const GIVEN_NAME: &str = "given-name";
/// Family name
pub const FAMILY_NAME: &str = "family-name";
/// Display name
pub const NAME: &str = "name";

/// Every recognised parameter name
pub const ALL: [&str; 8] = [
    LIFETIME,
    KEY_PATH,
    KEY_PASS,
    USERNAME,
    EMAIL,
    GIVEN_NAME,
    FAMILY_NAME,
    NAME,
];
