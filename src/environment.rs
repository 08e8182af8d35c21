use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the analysis backends the dashboard can talk to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine with its default port.
    #[default]
    Local,
    /// Any other deployment, addressed by its base URL.
    Custom { api_url: String },
}

impl Environment {
    /// Returns the base URL of the analysis API.
    pub fn api_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
            Environment::Custom { api_url } => api_url.clone(),
        }
    }

    /// Picks the environment from the first URL that is set, falling back to `fallback`.
    /// `local` selects the built-in local backend.
    pub fn resolve(cli_url: Option<&str>, config_url: Option<&str>, fallback: Environment) -> Self {
        cli_url
            .or(config_url)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| {
                url.parse().unwrap_or_else(|_| Environment::Custom {
                    api_url: url.to_string(),
                })
            })
            .unwrap_or(fallback)
    }
}

impl FromStr for Environment {
    type Err = ();

    /// Accepts `local` or an absolute http(s) URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                api_url: trimmed.to_string(),
            });
        }
        Err(())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
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
    fn parses_local_and_urls() {
        assert_eq!("LOCAL".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!(
            "https://api.example.com".parse::<Environment>(),
            Ok(Environment::Custom {
                api_url: "https://api.example.com".to_string()
            })
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn cli_url_beats_config_url() {
        let env = Environment::resolve(
            Some("http://cli:1"),
            Some("http://config:2"),
            Environment::Local,
        );
        assert_eq!(env.api_url(), "http://cli:1");

        let env = Environment::resolve(None, Some("http://config:2"), Environment::Local);
        assert_eq!(env.api_url(), "http://config:2");

        let env = Environment::resolve(Some("  "), None, Environment::Local);
        assert_eq!(env, Environment::Local);
    }

    #[test]
    fn local_keyword_resolves_to_local_backend() {
        let env = Environment::resolve(
            None,
            Some("local"),
            Environment::Custom {
                api_url: "http://fallback:1".to_string(),
            },
        );
        assert_eq!(env, Environment::Local);
        assert_eq!(env.api_url(), "http://localhost:5000");
    }
}
