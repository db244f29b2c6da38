use crate::infrastructure::transport::SPP_SERVICE_UUID;
use serde::{Deserialize, Serialize};

/// Slider-to-speed conversion settings.
///
/// The vehicle-side motor driver takes inputs between -255 < 0 < 255.
/// The default step of 17 gives 255 / 17 = 15 discrete notches on each
/// side of center, so a slider running 0..=30 with its midpoint at 15
/// lands exactly on [-255, 255] at the extremes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderSettings {
    /// Raw slider value that maps to speed 0.
    #[serde(default = "default_midpoint")]
    pub midpoint: i32,
    /// Speed units per slider notch.
    #[serde(default = "default_step")]
    pub step: i32,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self {
            midpoint: default_midpoint(),
            step: default_step(),
        }
    }
}

fn default_step() -> i32 {
    17
}
fn default_midpoint() -> i32 {
    255 / default_step()
}

/// Connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSettings {
    /// Service identifier for the connection-oriented channel. Must be a
    /// well-known serial-service identifier to stay interoperable with
    /// the vehicle firmware.
    #[serde(default = "default_service_uuid")]
    pub service_uuid: String,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            service_uuid: default_service_uuid(),
        }
    }
}

fn default_service_uuid() -> String {
    SPP_SERVICE_UUID.to_string()
}

/// Logging settings consumed by [`crate::infrastructure::logging`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String, // "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_true")]
    pub console_logging_enabled: bool,
    #[serde(default = "default_false")]
    pub file_logging_enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_prefix")]
    pub file_name_prefix: String,
    #[serde(default = "default_true")]
    pub ansi_colors: bool,
    #[serde(default = "default_rotation")]
    pub rotation: String, // "daily", "hourly", "minutely", "never"
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_logging_enabled: default_true(),
            file_logging_enabled: default_false(),
            log_dir: default_log_dir(),
            file_name_prefix: default_prefix(),
            ansi_colors: default_true(),
            rotation: default_rotation(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}
fn default_true() -> bool {
    true
}
fn default_false() -> bool {
    false
}
fn default_log_dir() -> String {
    "logs".to_string()
}
fn default_prefix() -> String {
    "motor_link".to_string()
}
fn default_rotation() -> String {
    "daily".to_string()
}
