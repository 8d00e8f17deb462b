use crate::shared::config::JwtSettings;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub expiry_seconds: i64, // Access token lifetime
}

impl JwtConfig {
    pub fn from_settings(settings: &JwtSettings) -> Self {
        Self {
            secret_key: settings.secret_key.clone(),
            expiry_seconds: i64::try_from(settings.expire_time.as_secs()).unwrap_or(i64::MAX),
        }
    }
}
