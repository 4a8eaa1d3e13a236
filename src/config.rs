use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Load the default catalog into an empty store at startup.
    pub seed_catalog: bool,
    /// Where `GET /` redirects to.
    pub docs_path: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            seed_catalog: std::env::var("SEED_CATALOG")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("SEED_CATALOG must be true or false")?,
            docs_path: std::env::var("DOCS_PATH").unwrap_or_else(|_| "/swagger-ui/".to_string()),
        })
    }
}
