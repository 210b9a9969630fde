pub mod domain;
pub mod error;
pub mod forecast;
pub mod recommend;
pub mod time;

pub mod config {
    use anyhow::Context;

    use crate::domain::recommendation::ProductId;
    use crate::recommend::pool::DEFAULT_CANDIDATE_POOL;

    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8000;
    const DEFAULT_FORECAST_MAX_DAYS: u32 = 3650;

    #[derive(Debug, Clone)]
    pub struct Settings {
        pub host: String,
        pub port: u16,
        pub sentry_dsn: Option<String>,
        pub candidate_pool: Vec<ProductId>,
        pub forecast_max_days: u32,
    }

    impl Default for Settings {
        fn default() -> Self {
            Self {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                sentry_dsn: None,
                candidate_pool: DEFAULT_CANDIDATE_POOL.to_vec(),
                forecast_max_days: DEFAULT_FORECAST_MAX_DAYS,
            }
        }
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Builds settings from an arbitrary key lookup so tests don't touch the process env.
        pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
        where
            F: Fn(&str) -> Option<String>,
        {
            let mut out = Self::default();

            if let Some(host) = non_empty(lookup("HOST")) {
                out.host = host;
            }

            if let Some(port) = non_empty(lookup("PORT")) {
                out.port = port
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number (got {port:?})"))?;
            }

            out.sentry_dsn = non_empty(lookup("SENTRY_DSN"));

            if let Some(pool) = non_empty(lookup("CANDIDATE_POOL")) {
                out.candidate_pool = parse_candidate_pool(&pool)?;
            }

            if let Some(max_days) = non_empty(lookup("FORECAST_MAX_DAYS")) {
                out.forecast_max_days = max_days.parse().with_context(|| {
                    format!("FORECAST_MAX_DAYS must be a non-negative integer (got {max_days:?})")
                })?;
            }

            Ok(out)
        }

        pub fn bind_addr(&self) -> String {
            format!("{}:{}", self.host, self.port)
        }
    }

    fn non_empty(v: Option<String>) -> Option<String> {
        v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
    }

    /// Parses `CANDIDATE_POOL="1,2,3"`, keeping the configured order.
    pub fn parse_candidate_pool(s: &str) -> anyhow::Result<Vec<ProductId>> {
        let mut out = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let id: ProductId = part
                .parse()
                .with_context(|| format!("invalid CANDIDATE_POOL entry {part:?}"))?;
            out.push(id);
        }
        anyhow::ensure!(!out.is_empty(), "CANDIDATE_POOL must contain at least one id");
        Ok(out)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::collections::HashMap;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn defaults_serve_on_port_8000_with_pool_1_to_10() {
            let s = Settings::from_lookup(lookup(&[])).unwrap();
            assert_eq!(s.bind_addr(), "0.0.0.0:8000");
            assert_eq!(s.candidate_pool, (1..=10).collect::<Vec<_>>());
            assert_eq!(s.forecast_max_days, 3650);
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn reads_overrides() {
            let s = Settings::from_lookup(lookup(&[
                ("HOST", "127.0.0.1"),
                ("PORT", "9100"),
                ("CANDIDATE_POOL", " 7, 3 ,9,"),
                ("FORECAST_MAX_DAYS", "30"),
                ("SENTRY_DSN", "  "),
            ]))
            .unwrap();
            assert_eq!(s.bind_addr(), "127.0.0.1:9100");
            assert_eq!(s.candidate_pool, vec![7, 3, 9]);
            assert_eq!(s.forecast_max_days, 30);
            assert!(s.sentry_dsn.is_none());
        }

        #[test]
        fn rejects_invalid_values() {
            assert!(Settings::from_lookup(lookup(&[("PORT", "http")])).is_err());
            assert!(Settings::from_lookup(lookup(&[("CANDIDATE_POOL", "1,two")])).is_err());
            assert!(Settings::from_lookup(lookup(&[("CANDIDATE_POOL", ",,")])).is_err());
            assert!(Settings::from_lookup(lookup(&[("FORECAST_MAX_DAYS", "-1")])).is_err());
        }
    }
}
