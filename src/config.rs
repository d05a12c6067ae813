use ::envconfig::Envconfig;
use ::std::collections::HashMap;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "5001";

/// Prefix of the service-discovery variable Kubernetes injects for a
/// container named `dockge`, which shadows `DOCKGE_PORT`.
const KUBERNETES_PORT_PREFIX: &str = "tcp://";

/// Raw `DOCKGE_*` variables as found in the environment.
#[derive(::envconfig::Envconfig, Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeEnvironment {
    #[envconfig(from = "DOCKGE_PORT")]
    pub port: Option<String>,

    #[envconfig(from = "DOCKGE_HOST")]
    pub host: Option<String>,

    #[envconfig(from = "DOCKGE_SSL_KEY")]
    pub ssl_key: Option<String>,

    #[envconfig(from = "DOCKGE_SSL_CERT")]
    pub ssl_cert: Option<String>,
}

impl ProbeEnvironment {
    pub const VARIABLES: [&'static str; 4] = [
        "DOCKGE_PORT",
        "DOCKGE_HOST",
        "DOCKGE_SSL_KEY",
        "DOCKGE_SSL_CERT",
    ];

    pub fn from_env() -> Result<Self, ::envconfig::Error> {
        Self::init_from_env()
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ::envconfig::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars: HashMap<String, String> = Self::VARIABLES
            .iter()
            .filter_map(|name| lookup(name).map(|value| (name.to_string(), value)))
            .collect();

        Self::init_from_hashmap(&vars)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub is_kubernetes: bool,
    pub host: String,
    pub port: String,
    pub use_tls: bool,
    pub url: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl ProbeConfig {
    /// Derives the probe target. Never fails: anything missing or unusable
    /// falls back to the defaults.
    pub fn resolve(env: &ProbeEnvironment) -> Self {
        let is_kubernetes = env
            .port
            .as_deref()
            .is_some_and(|port| port.starts_with(KUBERNETES_PORT_PREFIX));

        let host = non_empty(&env.host).unwrap_or(DEFAULT_HOST).to_string();

        let port = if is_kubernetes {
            DEFAULT_PORT.to_string()
        } else {
            non_empty(&env.port).unwrap_or(DEFAULT_PORT).to_string()
        };

        let use_tls =
            non_empty(&env.ssl_key).is_some() && non_empty(&env.ssl_cert).is_some();

        let scheme = if use_tls { "https" } else { "http" };
        let url = format!("{scheme}://{host}:{port}");

        Self {
            is_kubernetes,
            host,
            port,
            use_tls,
            url,
        }
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Every field is an optional String, so loading cannot fail; a
        // non-unicode value only leaves its own field unset.
        Self::resolve(&ProbeEnvironment::from_lookup(lookup).unwrap_or_default())
    }

    pub fn from_env() -> Self {
        Self::resolve(&ProbeEnvironment::from_env().unwrap_or_default())
    }
}
