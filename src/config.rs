use std::env;
use std::path::Path;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            database_url: env::var("DATABASE_URL").ok().filter(|v| !v.is_empty()),
            database_name: env::var("DATABASE_NAME").ok().filter(|v| !v.is_empty()),
        }
    }

    pub fn store_name(&self) -> Option<String> {
        if let Some(name) = &self.database_name {
            return Some(name.clone());
        }
        let url = self.database_url.as_deref()?;
        if url == ":memory:" {
            return Some("memory".to_string());
        }
        Path::new(url)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
    }
}
