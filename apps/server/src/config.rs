use std::{net::SocketAddr, str::FromStr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    /// Reads `UL_*` variables, loading `.env` first. Values that fail to
    /// parse fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr = env_or("UL_LISTEN_ADDR", SocketAddr::from(([0, 0, 0, 0], 5000)));
        let db_path = std::env::var("UL_DB_PATH").unwrap_or_else(|_| "./db/unilife.db".into());
        let cors_allow = std::env::var("UL_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("UL_REQUEST_TIMEOUT_MS", 30_000);
        Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!("Ignoring invalid {}='{}', using default", key, raw);
        default
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparseable_values_fall_back() {
        std::env::set_var("UL_TEST_BAD_NUMBER", "soon");
        assert_eq!(env_or("UL_TEST_BAD_NUMBER", 30_000u64), 30_000);
        std::env::set_var("UL_TEST_GOOD_NUMBER", " 1500 ");
        assert_eq!(env_or("UL_TEST_GOOD_NUMBER", 30_000u64), 1500);
        assert_eq!(env_or("UL_TEST_UNSET_NUMBER", 7u64), 7);
    }
}
