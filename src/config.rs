use std::time::Duration;

pub const ENDPOINT: &str = "https://b12.io/apply/submission";
pub const SIGNING_SECRET: &str = "hello-there-from-b12";
pub const APPLICANT_NAME: &str = "Luciano Almenares";
pub const RESUME_LINK: &str = "https://www.linkedin.com/in/luciano-almenares/";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const DEFAULT_GITHUB_SERVER: &str = "https://github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub email: String,
    pub name: String,
    pub resume_link: String,
    pub repository_link: String,
    pub action_run_link: String,
    pub endpoint: String,
    pub signing_secret: String,
    pub timeout: Duration,
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(key) => {
                write!(f, "Missing required environment variable: {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key/value source.
    /// Values are trimmed; blank counts as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let email = env.required("B12_EMAIL")?;

        let repository_link = match env.get("B12_REPOSITORY_LINK") {
            Some(link) => link,
            None => env.github_repo_link()?,
        };

        let action_run_link = match env.get("B12_ACTION_RUN_LINK") {
            Some(link) => link,
            None => env.github_action_run_link()?,
        };

        let log_level = env.get("B12_LOG_LEVEL").unwrap_or_else(|| "warn".to_string());

        Ok(Config {
            email,
            name: APPLICANT_NAME.to_string(),
            resume_link: RESUME_LINK.to_string(),
            repository_link,
            action_run_link,
            endpoint: ENDPOINT.to_string(),
            signing_secret: SIGNING_SECRET.to_string(),
            timeout: REQUEST_TIMEOUT,
            log_level,
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key).ok_or(ConfigError::MissingVar(key))
    }

    fn github_server(&self) -> String {
        self.get("GITHUB_SERVER_URL")
            .unwrap_or_else(|| DEFAULT_GITHUB_SERVER.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    fn github_repo_link(&self) -> Result<String, ConfigError> {
        match self.get("GITHUB_REPOSITORY") {
            Some(repo) => Ok(format!("{}/{repo}", self.github_server())),
            // Not running under GitHub Actions
            None => self.required("REPOSITORY_LINK"),
        }
    }

    fn github_action_run_link(&self) -> Result<String, ConfigError> {
        match (self.get("GITHUB_REPOSITORY"), self.get("GITHUB_RUN_ID")) {
            (Some(repo), Some(run_id)) => Ok(format!(
                "{}/{repo}/actions/runs/{run_id}",
                self.github_server()
            )),
            _ => self.required("ACTION_RUN_LINK"),
        }
    }
}
