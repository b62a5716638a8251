use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub swagger: SwaggerConfig,
    pub hydrator: HydratorConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub title: String,
    pub version: String,
    pub description: String,
}

/// Settings for the page hydrator binary
#[derive(Debug, Clone)]
pub struct HydratorConfig {
    /// Base URL of the catalog API, e.g. "http://localhost:3000/api"
    pub api_base_url: String,
    /// Delay before the second hydration pass, in milliseconds
    pub repass_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            swagger: SwaggerConfig::from_env(),
            hydrator: HydratorConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(AppConfig {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .map_err(|e| format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e))?;

        let min_connections = env::var("DATABASE_MIN_CONNECTIONS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .map_err(|e| format!("Invalid DATABASE_MIN_CONNECTIONS: {}", e))?;

        Ok(DatabaseConfig {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Self {
        SwaggerConfig {
            title: env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Kalium Catalog API".to_string()),
            version: env::var("SWAGGER_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            description: env::var("SWAGGER_DESCRIPTION")
                .unwrap_or_else(|_| "REST API for the Kalium furniture catalog".to_string()),
        }
    }
}

impl HydratorConfig {
    pub fn from_env() -> Result<Self, String> {
        let api_base_url = env::var("CATALOG_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000/api".to_string());

        let repass_delay_ms = env::var("HYDRATOR_REPASS_DELAY_MS")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .map_err(|e| format!("Invalid HYDRATOR_REPASS_DELAY_MS: {}", e))?;

        Ok(HydratorConfig {
            api_base_url,
            repass_delay_ms,
        })
    }
}
