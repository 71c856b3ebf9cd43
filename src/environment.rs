use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments available for the CLI.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Production environment serving real subscribers.
    #[default]
    Production,
    /// Custom environment, e.g. a local or staging deployment.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the academy API base URL associated with the environment.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Production => "https://api.academy-assist.com".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "production" => Ok(Environment::Production),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Environment::Custom {
                    api_url: other.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "Production"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_production() {
        assert_eq!(
            "production".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert_eq!("".parse::<Environment>(), Ok(Environment::Production));
    }

    #[test]
    fn test_parse_custom_url() {
        let env = "http://localhost:8080".parse::<Environment>().unwrap();
        assert_eq!(env.api_url(), "http://localhost:8080");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("nonsense".parse::<Environment>().is_err());
    }
}
