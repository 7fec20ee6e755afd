//! OS detection.

use crate::error::{CasmCiError, Result};

/// Reports the OS identifier the build scripts expect.
pub trait OsDetector {
    fn detect(&self) -> Result<String>;
}

/// Map a Rust target OS name onto the build scripts' identifier.
///
/// Only `linux` and `osx` builds exist.
pub fn os_name_for(target_os: &str) -> Result<String> {
    match target_os {
        "linux" => Ok("linux".to_string()),
        "macos" => Ok("osx".to_string()),
        other => Err(CasmCiError::UnsupportedOs {
            os: other.to_string(),
        }),
    }
}

/// Detects the OS this binary was compiled for.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostOs;

impl OsDetector for HostOs {
    fn detect(&self) -> Result<String> {
        os_name_for(std::env::consts::OS)
    }
}

/// Always reports the same OS. Used in tests.
#[derive(Debug, Clone)]
pub struct FixedOs(String);

impl FixedOs {
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl OsDetector for FixedOs {
    fn detect(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_maps_to_linux() {
        assert_eq!(os_name_for("linux").unwrap(), "linux");
    }

    #[test]
    fn macos_maps_to_osx() {
        assert_eq!(os_name_for("macos").unwrap(), "osx");
    }

    #[test]
    fn windows_is_unsupported() {
        let err = os_name_for("windows").unwrap_err();
        assert!(matches!(err, CasmCiError::UnsupportedOs { ref os } if os == "windows"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn host_os_on_linux() {
        assert_eq!(HostOs.detect().unwrap(), "linux");
    }

    #[test]
    fn fixed_os_reports_its_name() {
        assert_eq!(FixedOs::new("osx").detect().unwrap(), "osx");
    }
}
