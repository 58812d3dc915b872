use std::{fmt, str::FromStr};

use thiserror::Error;

/// Target the logger believes it runs on. Only used to answer capability
/// queries; `AutoDetect` resolves from the compilation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    #[default]
    AutoDetect,
    Desktop,
    Windows,
    Linux,
    MacOs,
    Arduino,
    Esp32,
    Esp8266,
    Rp2040Arduino,
    Rp2040Sdk,
    EspIdf,
    Unknown,
}

impl Platform {
    pub const ALL: [Platform; 12] = [
        Platform::AutoDetect,
        Platform::Desktop,
        Platform::Windows,
        Platform::Linux,
        Platform::MacOs,
        Platform::Arduino,
        Platform::Esp32,
        Platform::Esp8266,
        Platform::Rp2040Arduino,
        Platform::Rp2040Sdk,
        Platform::EspIdf,
        Platform::Unknown,
    ];

    /// Platform of the compilation target.
    pub const fn detect() -> Platform {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else if cfg!(target_os = "espidf") {
            Platform::EspIdf
        } else {
            Platform::Unknown
        }
    }

    pub const fn resolve(self) -> Platform {
        match self {
            Platform::AutoDetect => Platform::detect(),
            other => other,
        }
    }

    pub const fn name(self) -> &'static str {
        match self.resolve() {
            Platform::Desktop => "Desktop",
            Platform::Windows => "Windows",
            Platform::Linux => "Linux",
            Platform::MacOs => "macOS",
            Platform::Arduino => "Arduino-AVR",
            Platform::Esp32 => "ESP32",
            Platform::Esp8266 => "ESP8266",
            Platform::Rp2040Arduino => "RP2040-Arduino",
            Platform::Rp2040Sdk => "RP2040-SDK",
            Platform::EspIdf => "ESP-IDF",
            Platform::AutoDetect | Platform::Unknown => "Unknown",
        }
    }

    pub const fn is_desktop(self) -> bool {
        matches!(
            self.resolve(),
            Platform::Desktop | Platform::Windows | Platform::Linux | Platform::MacOs
        )
    }

    pub const fn is_arduino(self) -> bool {
        matches!(
            self.resolve(),
            Platform::Arduino | Platform::Esp32 | Platform::Esp8266 | Platform::Rp2040Arduino
        )
    }

    pub const fn is_embedded(self) -> bool {
        self.is_arduino() || matches!(self.resolve(), Platform::Rp2040Sdk | Platform::EspIdf)
    }

    pub const fn has_color_support(self) -> bool {
        self.is_desktop() || matches!(self.resolve(), Platform::EspIdf)
    }

    pub const fn has_printf_support(self) -> bool {
        self.is_arduino() || matches!(self.resolve(), Platform::EspIdf)
    }

    pub const fn default_buffer_size(self) -> usize {
        if self.is_embedded() { 256 } else { 1024 }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform `{0}`")]
pub struct ParsePlatformError(pub String);

impl FromStr for Platform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let platform = match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "AUTO" | "AUTO_DETECT" => Platform::AutoDetect,
            "DESKTOP" => Platform::Desktop,
            "WINDOWS" => Platform::Windows,
            "LINUX" => Platform::Linux,
            "MACOS" => Platform::MacOs,
            "ARDUINO" | "ARDUINO_AVR" => Platform::Arduino,
            "ESP32" => Platform::Esp32,
            "ESP8266" => Platform::Esp8266,
            "RP2040_ARDUINO" => Platform::Rp2040Arduino,
            "RP2040_SDK" => Platform::Rp2040Sdk,
            "ESP_IDF" => Platform::EspIdf,
            "UNKNOWN" => Platform::Unknown,
            _ => return Err(ParsePlatformError(s.to_string())),
        };
        Ok(platform)
    }
}
