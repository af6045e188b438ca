use dotenv::dotenv;
use std::env;

/// Runtime settings, loaded once in `main` and handed to the collaborators
/// that need them. The JWT secret is passed into the service explicitly
/// rather than read from the environment at call sites.
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    pub admin_email: String,
    pub upload_dir: String,
    pub checkout_base_url: String,
    pub log_level: String,
}

impl core::fmt::Debug for Config {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("jwt_secret", &"<redacted>")
            .field("admin_email", &self.admin_email)
            .field("upload_dir", &self.upload_dir)
            .field("checkout_base_url", &self.checkout_base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(4000),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()), // Use a secure secret in production
            admin_email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@example.com".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            checkout_base_url: env::var("CHECKOUT_BASE_URL")
                .unwrap_or_else(|_| "https://checkout.example.com".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
