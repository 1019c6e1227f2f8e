//! # Uptime Robot API
//!
//! A Rust client library for the [UptimeRobot](https://uptimerobot.com) monitor-management HTTP API.
//!
//! ## Features
//!
//! - List, create, edit and delete monitors
//! - List the alert contacts configured on the account
//! - Builder pattern for monitor parameters
//! - `json` (parsed) and `xml` (raw passthrough) response formats
//!
//! ## Example
//!
//! ```rust,no_run
//! use uptime_robot_api::{MonitorSpec, MonitorUpdate, UptimeRobotClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = UptimeRobotClient::new()?.with_api_key("u12345-0123456789abcdef")?;
//!
//!     // All monitors on the account, without logs
//!     let monitors = client.get_monitors(&[], false, false).await?;
//!     println!("{:?}", monitors.as_json());
//!
//!     // A keyword monitor that alerts contact 4321
//!     let spec = MonitorSpec::new("My Web Page", "http://mywebpage.com", "2")
//!         .with_keyword_type("2")
//!         .with_keyword_value("Welcome")
//!         .with_alert_contacts("4321");
//!     client.new_monitor(&spec).await?;
//!
//!     // Rename an existing monitor
//!     let update = MonitorUpdate::new().with_friendly_name("Renamed Monitor");
//!     client.edit_monitor("128798", &update).await?;
//!     Ok(())
//! }
//! ```

mod client;
mod errors;
mod types;

pub use client::UptimeRobotClient;
pub use errors::{Result, UptimeRobotError};
pub use types::{ApiResponse, MonitorSpec, MonitorUpdate};
