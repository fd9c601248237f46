//! Process configuration.
//!
//! All remote-API settings are read once at startup into an explicit
//! [`Config`] that is passed into every component; nothing reads the
//! environment after construction. A local `.env` file is honored the
//! same way the standalone scripts honor one.

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::error::ApiError;

/// Default base URL of the Autodesk Platform Services API.
pub const DEFAULT_BASE_URL: &str = "https://developer.api.autodesk.com";

/// Path sentinel for the traversal root.
pub const ROOT_PATH: &str = "Root";

/// Remote API configuration, read once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer access token. Absence is fatal at startup.
    pub access_token: String,
    /// OAuth app id, kept for operators who mint tokens out of band.
    pub client_id: Option<String>,
    /// OAuth app secret.
    pub client_secret: Option<String>,
    /// OAuth redirect URI.
    pub callback_url: Option<String>,
    /// BIM 360 account id.
    pub account_id: Option<String>,
    /// Data Management hub id.
    pub hub_id: Option<String>,
    /// Project whose folder tree is walked (`b.`-prefixed GUID).
    pub project_id: String,
    /// URN of the folder the walk starts from.
    pub root_folder_urn: String,
    /// API base URL; overridable so tests can point at a local server.
    pub base_url: String,
}

impl Config {
    /// Build a `Config` from the environment, loading `.env` first.
    ///
    /// `ACCESS_TOKEN`, `PROJECT_ID` and `ROOT_FOLDER_URN` are required;
    /// the remaining variables are optional context.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let access_token = optional_env("ACCESS_TOKEN").ok_or(ApiError::MissingToken)?;
        let project_id =
            optional_env("PROJECT_ID").ok_or_else(|| eyre!("PROJECT_ID is not set"))?;
        let root_folder_urn =
            optional_env("ROOT_FOLDER_URN").ok_or_else(|| eyre!("ROOT_FOLDER_URN is not set"))?;

        Ok(Self {
            access_token,
            client_id: optional_env("CLIENT_ID"),
            client_secret: optional_env("CLIENT_SECRET"),
            callback_url: optional_env("CALLBACK_URL"),
            account_id: optional_env("ACCOUNT_ID"),
            hub_id: optional_env("HUB_ID"),
            project_id,
            root_folder_urn,
            base_url: optional_env("APS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Construct a config directly; used by tests and the server state.
    pub fn new(
        access_token: impl Into<String>,
        project_id: impl Into<String>,
        root_folder_urn: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            client_id: None,
            client_secret: None,
            callback_url: None,
            account_id: None,
            hub_id: None,
            project_id: project_id.into(),
            root_folder_urn: root_folder_urn.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
