//! Process-wide settings, read once at startup.
//!
//! | Variable                   | Required | Default                      |
//! |----------------------------|----------|------------------------------|
//! | `OPENAI_API_KEY`           | yes      |                              |
//! | `OPENAI_BASE_URL`          | no       | `https://api.openai.com/v1`  |
//! | `EXPERT_CHAT_BIND`         | no       | `127.0.0.1:8501`             |
//! | `EXPERT_CHAT_TIMEOUT_SECS` | no       | `30`                         |
//!
//! Variables missing from the environment are also looked up in a `.env`
//! file in the working directory or one of its parents. The environment
//! wins when both define a variable.

use std::{collections::HashMap, env, fmt, net::SocketAddr, time::Duration};

use expert_chat_openai::{API_KEY_ENV, BASE_URL_ENV, DEFAULT_TIMEOUT, Url};

use crate::error::ExpertChatError;

pub const BIND_ENV: &str = "EXPERT_CHAT_BIND";
pub const TIMEOUT_ENV: &str = "EXPERT_CHAT_TIMEOUT_SECS";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";
pub const DOTENV_FILE: &str = ".env";

#[derive(Clone)]
pub struct Settings {
    pub api_key: String,
    pub base_url: Option<String>,
    pub bind: SocketAddr,
    pub timeout: Duration,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("bind", &self.bind)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Settings {
    /// Read the settings from the process environment, falling back to the
    /// nearest `.env` file.
    pub fn from_env() -> Result<Self, ExpertChatError> {
        let file = match dotenvy::from_filename_iter(DOTENV_FILE) {
            Ok(iter) => collect_dotenv(iter)?,
            Err(err) if err.not_found() => HashMap::new(),
            Err(err) => {
                return Err(ExpertChatError::Configuration(format!(
                    "reading `{DOTENV_FILE}`: {err}"
                )));
            }
        };
        if !file.is_empty() {
            tracing::info!(variables = file.len(), "loaded .env file");
        }
        Self::from_env_and(file)
    }

    /// Environment first, then `file`.
    fn from_env_and(file: HashMap<String, String>) -> Result<Self, ExpertChatError> {
        Self::from_lookup(|name| env::var(name).ok().or_else(|| file.get(name).cloned()))
    }

    /// Read the settings through `lookup`, which returns the raw value of a
    /// variable if it is set.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ExpertChatError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_key = get(API_KEY_ENV).ok_or_else(|| {
            ExpertChatError::Configuration(format!(
                "`{API_KEY_ENV}` is not set. Export your OpenAI API key and restart."
            ))
        })?;

        let bind = match get(BIND_ENV) {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|err| {
                ExpertChatError::Configuration(format!(
                    "`{BIND_ENV}`={raw:?} is not a socket address: {err}"
                ))
            })?,
            None => DEFAULT_BIND.parse::<SocketAddr>().map_err(|err| {
                ExpertChatError::Configuration(format!("default bind address: {err}"))
            })?,
        };

        let timeout = match get(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ExpertChatError::Configuration(format!(
                        "`{TIMEOUT_ENV}`={raw:?} must be a positive number of seconds"
                    )));
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let base_url = match get(BASE_URL_ENV) {
            Some(raw) => {
                let raw = raw.trim().to_owned();
                match Url::parse(&raw) {
                    Ok(url) if matches!(url.scheme(), "http" | "https") => Some(raw),
                    Ok(url) => {
                        return Err(ExpertChatError::Configuration(format!(
                            "`{BASE_URL_ENV}`={raw:?} must use http or https, not `{}`",
                            url.scheme()
                        )));
                    }
                    Err(err) => {
                        return Err(ExpertChatError::Configuration(format!(
                            "`{BASE_URL_ENV}`={raw:?} is not a URL: {err}"
                        )));
                    }
                }
            }
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            bind,
            timeout,
        })
    }
}

fn collect_dotenv<R: std::io::Read>(
    iter: dotenvy::Iter<R>,
) -> Result<HashMap<String, String>, ExpertChatError> {
    iter.collect::<Result<HashMap<String, String>, dotenvy::Error>>()
        .map_err(|err| {
            ExpertChatError::Configuration(format!("malformed `{DOTENV_FILE}`: {err}"))
        })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ExpertChatError::Configuration(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let err = Settings::from_lookup(lookup(&[(API_KEY_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, ExpertChatError::Configuration(_)));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let settings = Settings::from_lookup(lookup(&[(API_KEY_ENV, "sk-test")])).unwrap();
        assert_eq!(settings.api_key, "sk-test");
        assert_eq!(settings.bind, "127.0.0.1:8501".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.base_url, None);
    }

    #[test]
    fn overrides_are_read() {
        let settings = Settings::from_lookup(lookup(&[
            (API_KEY_ENV, "sk-test"),
            (BASE_URL_ENV, "http://localhost:4000/v1"),
            (BIND_ENV, "0.0.0.0:9000"),
            (TIMEOUT_ENV, " 5 "),
        ]))
        .unwrap();
        assert_eq!(settings.base_url.as_deref(), Some("http://localhost:4000/v1"));
        assert_eq!(settings.bind.port(), 9000);
        assert_eq!(settings.timeout, Duration::from_secs(5));
    }

    #[test]
    fn malformed_optional_values_are_rejected() {
        for (name, value) in [
            (BIND_ENV, "nowhere"),
            (TIMEOUT_ENV, "0"),
            (TIMEOUT_ENV, "ten"),
            (BASE_URL_ENV, "not a url at all"),
            (BASE_URL_ENV, "ftp://example.com/v1"),
        ] {
            let err =
                Settings::from_lookup(lookup(&[(API_KEY_ENV, "sk-test"), (name, value)]))
                    .unwrap_err();
            assert!(err.to_string().contains(name), "{name}={value}: {err}");
        }
    }

    #[test]
    fn debug_output_hides_the_key() {
        let settings = Settings::from_lookup(lookup(&[(API_KEY_ENV, "sk-secret")])).unwrap();
        assert!(!format!("{settings:?}").contains("sk-secret"));
    }

    #[test]
    fn dotenv_file_supplies_missing_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# local secrets").unwrap();
        writeln!(file, "{API_KEY_ENV}=sk-from-dotenv").unwrap();
        writeln!(file, "{TIMEOUT_ENV}=7").unwrap();

        let vars = collect_dotenv(dotenvy::from_path_iter(file.path()).unwrap()).unwrap();
        let settings = Settings::from_env_and(vars).unwrap();
        assert_eq!(settings.timeout, Duration::from_secs(7));
        if env::var(API_KEY_ENV).is_err() {
            assert_eq!(settings.api_key, "sk-from-dotenv");
        }
    }

    #[test]
    fn dotenv_lines_are_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{API_KEY_ENV}=\"sk-quoted\"").unwrap();
        writeln!(file, "{BIND_ENV}=0.0.0.0:9000").unwrap();

        let vars = collect_dotenv(dotenvy::from_path_iter(file.path()).unwrap()).unwrap();
        let settings = Settings::from_lookup(|name: &str| vars.get(name).cloned()).unwrap();
        assert_eq!(settings.api_key, "sk-quoted");
        assert_eq!(settings.bind.port(), 9000);
    }
}
