pub mod env {
    pub const SECRET_KEY_ENV_VAR: &str = "SECRET_KEY";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
    pub const TOKEN_COOKIE_NAME_ENV_VAR: &str = "TOKEN_COOKIE_NAME";
}

pub const TOKEN_COOKIE_NAME: &str = "token";

// 24h sliding session window
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86400;
