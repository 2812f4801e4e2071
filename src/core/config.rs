use std::env;
use std::time::Duration;

/// Public endpoint reporting who is currently in space.
pub const DEFAULT_ASTROS_API_URL: &str = "http://api.open-notify.org/astros.json";

/// Blind wait between submitting the filler speech and composing the answer.
/// Fixed per deployment; only tests construct an `AppConfig` with another value.
pub const PROGRESSIVE_DELAY: Duration = Duration::from_millis(5000);

pub const DEFAULT_DIRECTIVE_TIMEOUT_MS: u64 = 1500;
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;

/// End-to-end response budget of the voice platform.
pub const PLATFORM_RESPONSE_BUDGET_MS: u64 = 8000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub astros_api_url: String,
    pub progressive_delay: Duration,
    pub directive_timeout: Duration,
    pub fetch_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            astros_api_url: DEFAULT_ASTROS_API_URL.to_string(),
            progressive_delay: PROGRESSIVE_DELAY,
            directive_timeout: Duration::from_millis(DEFAULT_DIRECTIVE_TIMEOUT_MS),
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    ///
    /// Unset variables fall back to the defaults; set but unparsable ones
    /// are rejected. The delay gate is not read from the environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            astros_api_url: lookup("ASTROS_API_URL")
                .unwrap_or_else(|| DEFAULT_ASTROS_API_URL.to_string()),
            progressive_delay: PROGRESSIVE_DELAY,
            directive_timeout: millis(&lookup, "DIRECTIVE_TIMEOUT_MS", DEFAULT_DIRECTIVE_TIMEOUT_MS)?,
            fetch_timeout: millis(&lookup, "FETCH_TIMEOUT_MS", DEFAULT_FETCH_TIMEOUT_MS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns an error if the filler hand-off plus the delay gate would not
    /// fit inside the platform response budget.
    pub fn validate(&self) -> Result<(), String> {
        if url::Url::parse(&self.astros_api_url).is_err() {
            return Err(format!("ASTROS_API_URL: invalid URL '{}'", self.astros_api_url));
        }

        let worst_case = self.progressive_delay + self.directive_timeout;
        if worst_case >= Duration::from_millis(PLATFORM_RESPONSE_BUDGET_MS) {
            return Err(format!(
                "progressive delay + DIRECTIVE_TIMEOUT_MS = {}ms exceeds the {}ms response budget",
                worst_case.as_millis(),
                PLATFORM_RESPONSE_BUDGET_MS
            ));
        }
        Ok(())
    }
}

fn millis<F>(lookup: &F, key: &str, default: u64) -> Result<Duration, String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|e| format!("{key}: {e}")),
        None => Ok(Duration::from_millis(default)),
    }
}
