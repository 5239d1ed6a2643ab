pub mod env {
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const SETTINGS_ENV_PREFIX: &str = "FLAGBOARD";
    pub const SETTINGS_ENV_SEPARATOR: &str = "__";
}

pub const DEFAULT_ENVIRONMENT: &str = "local";
pub const SETTINGS_DIR: &str = "config";

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const SESSION_COOKIE_NAME: &str = "FBCTF";
}
