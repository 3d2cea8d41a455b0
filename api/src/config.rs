use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const LOCAL_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
    #[default]
    Local,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Production => "production",
            Environment::Development => "development",
            Environment::Local => "local",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "development" => Ok(Environment::Development),
            "local" => Ok(Environment::Local),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

/// Base URL for each named environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointTable {
    pub production: String,
    pub development: String,
    pub local: String,
}

impl Default for EndpointTable {
    fn default() -> Self {
        Self {
            production: String::new(),
            development: String::new(),
            local: LOCAL_BASE_URL.to_string(),
        }
    }
}

impl EndpointTable {
    pub fn get(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production,
            Environment::Development => &self.development,
            Environment::Local => &self.local,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub environment: Environment,
    pub endpoints: EndpointTable,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            endpoints: EndpointTable::default(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_endpoints(mut self, endpoints: EndpointTable) -> Self {
        self.endpoints = endpoints;
        self
    }

    pub fn with_local_url(mut self, url: impl Into<String>) -> Self {
        self.endpoints.local = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The endpoint of the selected environment.
    pub fn base_url(&self) -> &str {
        self.endpoints.get(self.environment)
    }

    pub fn validate(&self) -> Result<(), String> {
        let base_url = self.base_url();

        if base_url.is_empty() {
            return Err(format!(
                "Base URL for environment '{}' cannot be empty",
                self.environment
            ));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err("Base URL must start with http:// or https://".to_string());
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
