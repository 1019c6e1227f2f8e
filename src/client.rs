use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::errors::{Result, UptimeRobotError};
use crate::types::{ApiResponse, MonitorSpec, MonitorUpdate};

/// Default address of the UptimeRobot HTTP API
const DEFAULT_API_URL: &str = "http://api.uptimerobot.com";

/// Connection-establishment timeout applied to every request
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the UptimeRobot monitor-management API
///
/// The client is immutable once built: `with_api_key`, `with_format` and
/// `with_api_url` consume it and return a reconfigured value, so a shared
/// client can never have its configuration changed under an in-flight call.
///
/// # Example
///
/// ```rust,no_run
/// use uptime_robot_api::{MonitorSpec, UptimeRobotClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = UptimeRobotClient::new()?.with_api_key("u12345-0123456789abcdef")?;
///
///     let monitors = client.get_monitors(&[], false, false).await?;
///     println!("{:?}", monitors.as_json());
///
///     let spec = MonitorSpec::new("My Web Page", "http://mywebpage.com", "1")
///         .with_alert_contacts("4321");
///     client.new_monitor(&spec).await?;
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct UptimeRobotClient {
    client: ClientWithMiddleware,
    api_url: Url,
    api_key: Option<String>,
    format: String,
}

impl std::fmt::Debug for UptimeRobotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UptimeRobotClient")
            .field("api_url", &self.api_url.as_str())
            .field("format", &self.format)
            .finish()
    }
}

impl UptimeRobotClient {
    /// Create a new client with no API key configured
    ///
    /// The response format defaults to `json`. Configure the key with
    /// [`with_api_key`](Self::with_api_key) before calling any operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(UptimeRobotError::BuildHttpClient)?;

        let client = ClientBuilder::new(client).build();

        Ok(Self {
            client,
            api_url: Url::parse(DEFAULT_API_URL).expect("Valid default URL"),
            api_key: None,
            format: "json".to_string(),
        })
    }

    /// Create a new client with a custom reqwest middleware client
    ///
    /// This allows you to add custom middleware (retry, logging, etc.)
    pub fn with_client(client: ClientWithMiddleware, api_url: Url) -> Self {
        Self {
            client,
            api_url,
            api_key: None,
            format: "json".to_string(),
        }
    }

    /// Return a client configured with the given API key
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::InvalidArgument`] when `api_key` is empty.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(UptimeRobotError::InvalidArgument { name: "api_key" });
        }
        self.api_key = Some(api_key);
        Ok(self)
    }

    /// Return a client configured with the given response format
    ///
    /// The API supports `json` (recommended) and `xml`. Any non-empty value is
    /// accepted here; an unsupported one fails with
    /// [`UptimeRobotError::InvalidFormat`] when a response is decoded.
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::InvalidArgument`] when `format` is empty.
    pub fn with_format(mut self, format: impl Into<String>) -> Result<Self> {
        let format = format.into();
        if format.is_empty() {
            return Err(UptimeRobotError::InvalidArgument { name: "format" });
        }
        self.format = format;
        Ok(self)
    }

    /// Return a client pointed at a different base address
    ///
    /// Useful for proxies and for tests against a local mock server.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Get the configured API key, if any
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the configured response format
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Get the base API URL
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// List monitors on the account
    ///
    /// With an empty `monitors` slice every monitor is returned; otherwise only
    /// the given ids. `logs` includes each monitor's event log in the response,
    /// and `alert_contacts` the notified contacts per event (the API only
    /// honors it when `logs` is set).
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::MissingApiKey`] when no API key is
    /// configured, and with the usual transport/decode errors otherwise.
    #[instrument(
        name = "UptimeRobotClient::get_monitors",
        skip_all,
        fields(monitor_count = monitors.len())
    )]
    pub async fn get_monitors(
        &self,
        monitors: &[&str],
        logs: bool,
        alert_contacts: bool,
    ) -> Result<ApiResponse> {
        let api_key = self.require_api_key()?;

        let mut url = self.endpoint("/getMonitors");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", api_key);
            if !monitors.is_empty() {
                query.append_pair("monitors", &monitors.join("-"));
            }
            query.append_pair("logs", bool_flag(logs));
            query.append_pair("alertContacts", bool_flag(alert_contacts));
        }
        self.append_format(&mut url);

        self.fetch(url).await
    }

    /// Create a monitor
    ///
    /// The monitor type cannot be changed later; to switch a monitor to a
    /// different type, delete it and create a new one.
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::InvalidArgument`] when a required spec
    /// field is empty, and with [`UptimeRobotError::MissingApiKey`] when no API
    /// key is configured.
    #[instrument(
        name = "UptimeRobotClient::new_monitor",
        skip_all,
        fields(friendly_name = %spec.friendly_name)
    )]
    pub async fn new_monitor(&self, spec: &MonitorSpec) -> Result<ApiResponse> {
        if spec.friendly_name.is_empty() {
            return Err(UptimeRobotError::InvalidArgument {
                name: "friendly_name",
            });
        }
        if spec.url.is_empty() {
            return Err(UptimeRobotError::InvalidArgument { name: "url" });
        }
        if spec.monitor_type.is_empty() {
            return Err(UptimeRobotError::InvalidArgument {
                name: "monitor_type",
            });
        }
        let api_key = self.require_api_key()?;

        let mut url = self.endpoint("/newMonitor");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", api_key);
            for (name, value) in spec.query_pairs() {
                query.append_pair(name, &value);
            }
        }
        self.append_format(&mut url);

        self.fetch(url).await
    }

    /// Edit an existing monitor
    ///
    /// Only the fields set on `update` are sent.
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::InvalidArgument`] when `monitor_id` is
    /// empty or `update` has no field set, and with
    /// [`UptimeRobotError::MissingApiKey`] when no API key is configured.
    #[instrument(
        name = "UptimeRobotClient::edit_monitor",
        skip_all,
        fields(monitor_id = %monitor_id)
    )]
    pub async fn edit_monitor(
        &self,
        monitor_id: &str,
        update: &MonitorUpdate,
    ) -> Result<ApiResponse> {
        if monitor_id.is_empty() {
            return Err(UptimeRobotError::InvalidArgument { name: "monitor_id" });
        }
        if update.is_empty() {
            return Err(UptimeRobotError::InvalidArgument { name: "update" });
        }
        let api_key = self.require_api_key()?;

        let mut url = self.endpoint("/editMonitor");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", api_key);
            query.append_pair("monitorID", monitor_id);
            for (name, value) in update.query_pairs() {
                query.append_pair(name, &value);
            }
        }
        self.append_format(&mut url);

        self.fetch(url).await
    }

    /// Delete a monitor
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::InvalidArgument`] when `monitor_id` is
    /// empty, and with [`UptimeRobotError::MissingApiKey`] when no API key is
    /// configured.
    #[instrument(
        name = "UptimeRobotClient::delete_monitor",
        skip_all,
        fields(monitor_id = %monitor_id)
    )]
    pub async fn delete_monitor(&self, monitor_id: &str) -> Result<ApiResponse> {
        if monitor_id.is_empty() {
            return Err(UptimeRobotError::InvalidArgument { name: "monitor_id" });
        }
        let api_key = self.require_api_key()?;

        let mut url = self.endpoint("/deleteMonitor");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", api_key);
            query.append_pair("monitorID", monitor_id);
        }
        self.append_format(&mut url);

        self.fetch(url).await
    }

    /// List the alert contacts configured on the account
    ///
    /// # Errors
    ///
    /// Fails with [`UptimeRobotError::MissingApiKey`] when no API key is
    /// configured.
    #[instrument(name = "UptimeRobotClient::get_alert_contacts", skip_all)]
    pub async fn get_alert_contacts(&self) -> Result<ApiResponse> {
        let api_key = self.require_api_key()?;

        let mut url = self.endpoint("/getAlertContacts");
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("apiKey", api_key);
        }
        self.append_format(&mut url);

        self.fetch(url).await
    }

    fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or(UptimeRobotError::MissingApiKey)
    }

    fn endpoint(&self, path: &str) -> Url {
        self.api_url.join(path).expect("Valid URL path")
    }

    /// Append the `format` trailer, last on every URL
    fn append_format(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();
        query.append_pair("format", &self.format);
        if self.format == "json" {
            query.append_pair("noJsonCallback", "1");
        }
    }

    /// Perform the request and decode the body per the configured format
    ///
    /// Single chokepoint for all operations. The HTTP status is not inspected;
    /// the API reports errors inside the response body.
    async fn fetch(&self, url: Url) -> Result<ApiResponse> {
        debug!(endpoint = url.path(), format = %self.format, "Sending API request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(UptimeRobotError::Transport)?;

        let body = response
            .text()
            .await
            .map_err(|err| UptimeRobotError::Transport(err.into()))?;

        debug!(bytes = body.len(), "Received API response");

        match self.format.as_str() {
            // A body that does not parse decodes to Null, not an error.
            "json" => Ok(ApiResponse::Json(
                serde_json::from_str(&body).unwrap_or(Value::Null),
            )),
            "xml" => Ok(ApiResponse::Xml(body)),
            _ => Err(UptimeRobotError::InvalidFormat {
                format: self.format.clone(),
            }),
        }
    }
}

/// The API expects boolean flags as `1`/`0`
fn bool_flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}
