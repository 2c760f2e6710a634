use jiff::Timestamp;

/// Current time as an RFC 3339 UTC string.
pub fn now_rfc3339() -> String {
    Timestamp::now().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_rfc3339_parses_back() {
        let now = now_rfc3339();
        assert!(now.ends_with('Z'));
        assert!(now.parse::<Timestamp>().is_ok());
    }
}
