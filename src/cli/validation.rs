//! CLI argument validation functions
//!
//! Value parsers for clap arguments whose rules go beyond a plain type
//! conversion.

use std::fs;
use std::net::IpAddr;
use std::path::PathBuf;

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a configuration file exists, is readable and is TOML
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    if path.extension().and_then(|e| e.to_str()) != Some("toml") {
        return Err(format!("Configuration file must be a .toml file: '{}'", path_str));
    }

    fs::File::open(&path)
        .map(|_| path)
        .map_err(|e| format!("Cannot read configuration file '{}': {}", path_str, e))
}

/// Validate a bind address: an IP literal, `localhost` or a hostname
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.parse::<IpAddr>().is_ok() || host == "localhost" {
        return Ok(host.to_string());
    }

    // dotted digits that failed IP parsing, e.g. 999.1.1.1
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(format!("Invalid IPv4 address format: '{}'", host_str));
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    let valid_label = |label: &str| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    };
    if !host.split('.').all(valid_label) {
        return Err(format!("Invalid hostname: '{}'", host_str));
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation_valid_ports() {
        for port_str in ["1", "80", "5000", "8080", "65535"] {
            assert!(validate_port(port_str).is_ok(), "Port {} should be valid", port_str);
        }
    }

    #[test]
    fn test_port_validation_invalid_ports() {
        for port_str in ["0", "65536", "abc", "-1", ""] {
            assert!(validate_port(port_str).is_err(), "Port {} should be invalid", port_str);
        }
    }

    #[test]
    fn test_host_validation_valid_hosts() {
        for host in ["localhost", "127.0.0.1", "0.0.0.0", "::1", "api.example.com", "my-server"] {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }
    }

    #[test]
    fn test_host_validation_invalid_hosts() {
        let long = "x".repeat(300);
        for host in ["", "   ", "host with spaces", "999.999.999.999", "-bad.example", long.as_str()] {
            assert!(validate_host_address(host).is_err(), "Host '{}' should be invalid", host);
        }
    }

    #[test]
    fn test_config_file_path_requires_toml() {
        let dir = tempfile::tempdir().unwrap();

        let toml = dir.path().join("aso.toml");
        fs::write(&toml, "[server]\nport = 5000\n").unwrap();
        assert!(validate_config_file_path(toml.to_str().unwrap()).is_ok());

        let yaml = dir.path().join("aso.yaml");
        fs::write(&yaml, "server: {}").unwrap();
        assert!(validate_config_file_path(yaml.to_str().unwrap()).is_err());

        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_config_file_path("/definitely/missing.toml").is_err());
    }
}
