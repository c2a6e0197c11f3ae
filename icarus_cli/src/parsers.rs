use std::time::Duration;

use jiff::SpanRelativeTo;

/// Parses human timeouts like "30s", "5m" or "PT1H30M" into a positive
/// duration. A bare number is taken as seconds.
pub fn parse_timeout(input: &str) -> Result<Duration, String> {
    let signed = parse_signed(input)?;

    Duration::try_from(signed).map_err(|_| String::from("Timeout must be positive"))
}

fn parse_signed(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout_friendly() {
        assert_eq!(parse_timeout("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_timeout("1h30m").unwrap(), Duration::from_secs(5400));
    }

    #[test]
    fn test_parse_timeout_iso() {
        assert_eq!(parse_timeout("PT90S").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_parse_timeout_bare_seconds() {
        assert_eq!(parse_timeout("45").unwrap(), Duration::from_secs(45));
    }

    #[test]
    fn test_parse_timeout_rejects_garbage() {
        assert!(parse_timeout("soon").is_err());
        assert!(parse_timeout("-30s").is_err());
    }
}
