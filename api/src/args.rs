use clap::{Parser, ValueEnum};
use scantry_core::domain::common::{
    LLMConfig, ObjectStorageConfig, ScantryConfig, StorageBackend,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "scantry-api", version, about = "Household meal-planning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`
    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendKind {
    S3,
    Memory,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StorageArgs {
    /// Cloud project the data bucket belongs to
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT")]
    pub project_id: String,

    #[arg(long, env = "BUCKET_PREFIX", default_value = "diet-app-data")]
    pub bucket_prefix: String,

    #[arg(long, env = "BUCKET_LOCATION", default_value = "US-CENTRAL1")]
    pub bucket_location: String,

    #[arg(long, env = "STORAGE_BACKEND", value_enum, default_value_t = StorageBackendKind::S3)]
    pub storage_backend: StorageBackendKind,

    /// S3-compatible endpoint, e.g. `https://storage.googleapis.com`
    #[arg(long, env = "S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    #[arg(long, env = "S3_REGION", default_value = "auto")]
    pub s3_region: String,

    #[arg(long, env = "S3_ACCESS_KEY", hide_env_values = true)]
    pub s3_access_key: Option<String>,

    #[arg(long, env = "S3_SECRET_KEY", hide_env_values = true)]
    pub s3_secret_key: Option<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AuthMode {
    /// Verify Google ID tokens sent as `Authorization: Bearer`
    Google,
    /// Trust an e-mail header set by an authenticating reverse proxy
    TrustedHeader,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AuthArgs {
    #[arg(long, env = "AUTH_MODE", value_enum, default_value_t = AuthMode::Google)]
    pub auth_mode: AuthMode,

    /// OAuth client id ID tokens must be issued for
    #[arg(long, env = "GOOGLE_CLIENT_ID")]
    pub google_client_id: Option<String>,

    #[arg(long, env = "TRUSTED_EMAIL_HEADER", default_value = "x-auth-request-email")]
    pub trusted_email_header: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[arg(
        long,
        env = "LOG_FILTER",
        default_value = "scantry_api=info,scantry_core=info,tower_http=info"
    )]
    pub log_filter: String,
}

impl From<StorageBackendKind> for StorageBackend {
    fn from(kind: StorageBackendKind) -> Self {
        match kind {
            StorageBackendKind::S3 => StorageBackend::S3,
            StorageBackendKind::Memory => StorageBackend::Memory,
        }
    }
}

impl From<Args> for ScantryConfig {
    fn from(args: Args) -> Self {
        Self {
            object_storage: ObjectStorageConfig {
                backend: args.storage.storage_backend.into(),
                project_id: args.storage.project_id,
                bucket_prefix: args.storage.bucket_prefix,
                bucket_location: args.storage.bucket_location,
                endpoint: args.storage.s3_endpoint,
                region: args.storage.s3_region,
                access_key: args.storage.s3_access_key,
                secret_key: args.storage.s3_secret_key,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_storage_and_model_settings() {
        let args = Args::try_parse_from([
            "scantry-api",
            "--project-id",
            "platinum-banner",
            "--storage-backend",
            "memory",
            "--auth-mode",
            "trusted-header",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(args.auth.auth_mode, AuthMode::TrustedHeader);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = ScantryConfig::from(args);
        assert_eq!(config.object_storage.backend, StorageBackend::Memory);
        assert_eq!(
            config.object_storage.bucket_name(),
            "diet-app-data-platinum-banner"
        );
        assert_eq!(config.llm.gemini_model, "gemini-1.5-flash");
    }
}
