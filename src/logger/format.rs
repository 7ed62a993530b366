//! Access log formatting module
//!
//! Renders one access log line per completed request, in common log
//! format or as a JSON object.

use chrono::{DateTime, Local};
use std::net::SocketAddr;

/// One completed request, ready to be formatted
pub struct AccessLogEntry {
    pub remote_addr: SocketAddr,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub bytes: u64,
    pub time: DateTime<Local>,
}

impl AccessLogEntry {
    pub fn new(remote_addr: SocketAddr, method: &str, path: &str, status: u16, bytes: u64) -> Self {
        Self {
            remote_addr,
            method: method.to_string(),
            path: path.to_string(),
            status,
            bytes,
            time: Local::now(),
        }
    }

    /// Format the entry according to the configured format name
    pub fn format(&self, format: &str) -> String {
        match format {
            "json" => self.format_json(),
            // "common" and anything unrecognized fall back to common log format
            _ => self.format_common(),
        }
    }

    fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {}\" {} {}",
            self.remote_addr.ip(),
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.bytes
        )
    }

    fn format_json(&self) -> String {
        serde_json::json!({
            "time": self.time.to_rfc3339(),
            "remote": self.remote_addr.ip().to_string(),
            "method": self.method,
            "path": self.path,
            "status": self.status,
            "bytes": self.bytes,
        })
        .to_string()
    }
}
