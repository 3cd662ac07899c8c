// Connection settings for the compute API. Resolution is environment
// driven (variables first, then a token file in the home directory),
// but the resolved value is handed explicitly to `HttpDirectory::new`
// so nothing else in the library touches the environment.

use std::path::PathBuf;

/// Where to reach the compute API and how to authenticate.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    /// Resolve configuration from the ambient environment: base URL from
    /// `COMPUTE_API_URL` (fallback `http://localhost:8000`), bearer token
    /// from `COMPUTE_API_TOKEN` or, failing that, the contents of
    /// `~/.secgrp_token`. No token means requests go out unauthenticated.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("COMPUTE_API_URL").unwrap_or_else(|_| "http://localhost:8000".into());
        let token = std::env::var("COMPUTE_API_TOKEN").ok().or_else(load_token_file);
        ApiConfig { base_url, token }
    }
}

/// Read a previously saved token from the user's home directory.
fn load_token_file() -> Option<String> {
    let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(".secgrp_token");
    let data = std::fs::read_to_string(path).ok()?;
    let token = data.trim().to_string();
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}
