//! Stand-in for RTSP playback.
//!
//! Terminals and browsers alike cannot decode raw RTSP without a relay, so
//! the panel only offers a simulated connect and a hand-off of the URL to
//! whatever the OS has registered for `rtsp://`.

use serde::Serialize;

pub const RTSP_IDLE_MESSAGE: &str =
    "RTSP streams can't be played inline. Connect to preview, or open in an external player.";

pub const RTSP_CONNECTED_MESSAGE: &str =
    "Connected (simulated). Live playback needs a media relay; open the stream in an external player to watch it.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RtspPlaceholder {
    url: String,
    connected: bool,
}

impl RtspPlaceholder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connected: false,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Flips the local flag. Nothing is dialled.
    pub fn connect(&mut self) {
        self.connected = true;
    }

    pub fn status_message(&self) -> &'static str {
        if self.connected {
            RTSP_CONNECTED_MESSAGE
        } else {
            RTSP_IDLE_MESSAGE
        }
    }

    /// URL to pass to the operating system's registered handler.
    pub fn external_url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_placeholder_is_idle() {
        let panel = RtspPlaceholder::new("rtsp://10.0.0.2/stream1");
        assert!(!panel.is_connected());
        assert_eq!(panel.status_message(), RTSP_IDLE_MESSAGE);
        assert_eq!(panel.url(), "rtsp://10.0.0.2/stream1");
    }

    #[test]
    fn test_connect_only_flips_flag() {
        let mut panel = RtspPlaceholder::new("rtsp://10.0.0.2/stream1");
        panel.connect();
        assert!(panel.is_connected());
        assert_eq!(panel.status_message(), RTSP_CONNECTED_MESSAGE);

        panel.connect();
        assert!(panel.is_connected());
        assert_eq!(panel.external_url(), "rtsp://10.0.0.2/stream1");
    }
}
