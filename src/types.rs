use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters for creating a monitor
///
/// The three constructor arguments are required by the API; everything else is
/// optional and depends on the monitor type. Monitor types are numeric codes on
/// the wire: `1` HTTP(s), `2` keyword, `3` ping, `4` port.
///
/// # Example
///
/// ```rust
/// use uptime_robot_api::MonitorSpec;
///
/// let spec = MonitorSpec::new("My Web Page", "http://mywebpage.com", "1")
///     .with_alert_contacts("4321");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSpec {
    /// Display name for the monitor
    pub friendly_name: String,

    /// Address the monitor watches
    pub url: String,

    /// Monitor type code (`1` HTTP(s), `2` keyword, `3` ping, `4` port)
    pub monitor_type: String,

    /// Sub type, required for port monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,

    /// Port to watch, required for port monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Keyword match mode (`1` exists, `2` not exists), required for keyword monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_type: Option<String>,

    /// Keyword to search the page for, required for keyword monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_value: Option<String>,

    /// Username for password-protected pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_username: Option<String>,

    /// Password for password-protected pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<String>,

    /// Alert contact ids to notify, `-`-separated on the wire
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_contacts: Option<String>,
}

impl MonitorSpec {
    /// Create a spec with the required fields
    pub fn new(friendly_name: &str, url: &str, monitor_type: &str) -> Self {
        Self {
            friendly_name: friendly_name.to_string(),
            url: url.to_string(),
            monitor_type: monitor_type.to_string(),
            sub_type: None,
            port: None,
            keyword_type: None,
            keyword_value: None,
            http_username: None,
            http_password: None,
            alert_contacts: None,
        }
    }

    /// Set the sub type (port monitoring)
    pub fn with_sub_type(mut self, sub_type: &str) -> Self {
        self.sub_type = Some(sub_type.to_string());
        self
    }

    /// Set the port to watch (port monitoring)
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the keyword match mode (keyword monitoring)
    pub fn with_keyword_type(mut self, keyword_type: &str) -> Self {
        self.keyword_type = Some(keyword_type.to_string());
        self
    }

    /// Set the keyword to search for (keyword monitoring)
    pub fn with_keyword_value(mut self, keyword_value: &str) -> Self {
        self.keyword_value = Some(keyword_value.to_string());
        self
    }

    /// Set credentials for password-protected pages
    pub fn with_http_auth(mut self, username: &str, password: &str) -> Self {
        self.http_username = Some(username.to_string());
        self.http_password = Some(password.to_string());
        self
    }

    /// Set the alert contacts to notify
    pub fn with_alert_contacts(mut self, alert_contacts: &str) -> Self {
        self.alert_contacts = Some(alert_contacts.to_string());
        self
    }

    /// Query parameters for the create call, wire names included
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("monitorFriendlyName", self.friendly_name.clone()),
            ("monitorURL", self.url.clone()),
            ("monitorType", self.monitor_type.clone()),
        ];
        if let Some(sub_type) = &self.sub_type {
            pairs.push(("monitorSubType", sub_type.clone()));
        }
        if let Some(port) = self.port {
            pairs.push(("monitorPort", port.to_string()));
        }
        if let Some(keyword_type) = &self.keyword_type {
            pairs.push(("monitorKeywordType", keyword_type.clone()));
        }
        if let Some(keyword_value) = &self.keyword_value {
            pairs.push(("monitorKeywordValue", keyword_value.clone()));
        }
        if let Some(username) = &self.http_username {
            pairs.push(("monitorHTTPUsername", username.clone()));
        }
        if let Some(password) = &self.http_password {
            pairs.push(("monitorHTTPPassword", password.clone()));
        }
        if let Some(alert_contacts) = &self.alert_contacts {
            pairs.push(("monitorAlertContacts", alert_contacts.clone()));
        }
        pairs
    }
}

/// Parameters for editing an existing monitor
///
/// Every field is optional; only fields that are set are sent. The monitor
/// type cannot be changed after creation — the API rejects it, delete and
/// recreate the monitor instead.
///
/// # Example
///
/// ```rust
/// use uptime_robot_api::MonitorUpdate;
///
/// let update = MonitorUpdate::new().with_friendly_name("Renamed Monitor");
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly_name: Option<String>,

    /// New address to watch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Monitor type code (sent as-is; the API refuses type changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor_type: Option<String>,

    /// Sub type, for port monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,

    /// Port to watch, for port monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// Keyword match mode, for keyword monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_type: Option<String>,

    /// Keyword to search for, for keyword monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_value: Option<String>,

    /// Username for password-protected pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_username: Option<String>,

    /// Password for password-protected pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_password: Option<String>,

    /// Alert contact ids to notify
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_contacts: Option<String>,
}

impl MonitorUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a new display name
    pub fn with_friendly_name(mut self, friendly_name: &str) -> Self {
        self.friendly_name = Some(friendly_name.to_string());
        self
    }

    /// Set a new address to watch
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Set the monitor type code
    pub fn with_monitor_type(mut self, monitor_type: &str) -> Self {
        self.monitor_type = Some(monitor_type.to_string());
        self
    }

    /// Set the sub type
    pub fn with_sub_type(mut self, sub_type: &str) -> Self {
        self.sub_type = Some(sub_type.to_string());
        self
    }

    /// Set the port to watch
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the keyword match mode
    pub fn with_keyword_type(mut self, keyword_type: &str) -> Self {
        self.keyword_type = Some(keyword_type.to_string());
        self
    }

    /// Set the keyword to search for
    pub fn with_keyword_value(mut self, keyword_value: &str) -> Self {
        self.keyword_value = Some(keyword_value.to_string());
        self
    }

    /// Set credentials for password-protected pages
    pub fn with_http_auth(mut self, username: &str, password: &str) -> Self {
        self.http_username = Some(username.to_string());
        self.http_password = Some(password.to_string());
        self
    }

    /// Set the alert contacts to notify
    pub fn with_alert_contacts(mut self, alert_contacts: &str) -> Self {
        self.alert_contacts = Some(alert_contacts.to_string());
        self
    }

    /// `true` when no field is set
    pub fn is_empty(&self) -> bool {
        self.friendly_name.is_none()
            && self.url.is_none()
            && self.monitor_type.is_none()
            && self.sub_type.is_none()
            && self.port.is_none()
            && self.keyword_type.is_none()
            && self.keyword_value.is_none()
            && self.http_username.is_none()
            && self.http_password.is_none()
            && self.alert_contacts.is_none()
    }

    /// Query parameters for the edit call, set fields only
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(friendly_name) = &self.friendly_name {
            pairs.push(("monitorFriendlyName", friendly_name.clone()));
        }
        if let Some(url) = &self.url {
            pairs.push(("monitorURL", url.clone()));
        }
        if let Some(monitor_type) = &self.monitor_type {
            pairs.push(("monitorType", monitor_type.clone()));
        }
        if let Some(sub_type) = &self.sub_type {
            pairs.push(("monitorSubType", sub_type.clone()));
        }
        if let Some(port) = self.port {
            pairs.push(("monitorPort", port.to_string()));
        }
        if let Some(keyword_type) = &self.keyword_type {
            pairs.push(("monitorKeywordType", keyword_type.clone()));
        }
        if let Some(keyword_value) = &self.keyword_value {
            pairs.push(("monitorKeywordValue", keyword_value.clone()));
        }
        if let Some(username) = &self.http_username {
            pairs.push(("monitorHTTPUsername", username.clone()));
        }
        if let Some(password) = &self.http_password {
            pairs.push(("monitorHTTPPassword", password.clone()));
        }
        if let Some(alert_contacts) = &self.alert_contacts {
            pairs.push(("monitorAlertContacts", alert_contacts.clone()));
        }
        pairs
    }
}

/// Decoded API response payload
///
/// The shape follows the configured response format: `json` responses are
/// parsed into a [`serde_json::Value`], `xml` responses are passed through as
/// the raw body without parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Parsed body of a `json` response
    ///
    /// A body that does not parse decodes to [`Value::Null`].
    Json(Value),

    /// Raw body of an `xml` response, unparsed
    Xml(String),
}

impl ApiResponse {
    /// Parsed payload, when the response format was `json`
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Xml(_) => None,
        }
    }

    /// Raw body, when the response format was `xml`
    pub fn as_xml(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Xml(body) => Some(body.as_str()),
        }
    }
}
