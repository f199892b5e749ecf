use std::fmt;

use async_trait::async_trait;

use super::types::Country;

/// Errors that can occur while looking up a country.
/// Variants keep the underlying detail for logging; `Display` produces the
/// exact message shown to the user.
#[derive(Debug)]
pub enum LookupError {
    /// The input could not form a valid request URL, or was empty. Caught
    /// before any network call.
    InvalidInput,
    /// The endpoint answered with a non-200 status — the name has no match.
    /// 404 is not distinguished from other non-200 codes.
    InvalidName { status: u16 },
    /// Network-level failure (DNS, connection refused, TLS, interrupted body).
    Network(String),
    /// The response body was not a non-empty JSON array of countries.
    Decode(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::InvalidInput => {
                write!(f, "Country names cannot contain special characters")
            }
            LookupError::InvalidName { .. } => write!(f, "Error: invalid country name"),
            LookupError::Network(detail) | LookupError::Decode(detail) => write!(
                f,
                "Error. Please make sure that you are connected to the internet \
                 and have entered a valid country name. Details: {detail}"
            ),
        }
    }
}

impl std::error::Error for LookupError {}

/// A backend that resolves a country name to its full record.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source (for the title bar and logs).
    fn name(&self) -> &str;

    /// Resolves `country_name` to a single country record, or fails with a
    /// terminal, non-retried error.
    async fn lookup(&self, country_name: &str) -> Result<Country, LookupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        assert_eq!(
            LookupError::InvalidInput.to_string(),
            "Country names cannot contain special characters"
        );
    }

    #[test]
    fn test_invalid_name_message_ignores_status() {
        assert_eq!(
            LookupError::InvalidName { status: 404 }.to_string(),
            "Error: invalid country name"
        );
        assert_eq!(
            LookupError::InvalidName { status: 503 }.to_string(),
            "Error: invalid country name"
        );
    }

    #[test]
    fn test_network_and_decode_share_the_conflated_message() {
        let network = LookupError::Network("dns error".to_string()).to_string();
        let decode = LookupError::Decode("expected value".to_string()).to_string();
        for msg in [&network, &decode] {
            assert!(msg.starts_with(
                "Error. Please make sure that you are connected to the internet"
            ));
        }
        assert!(network.ends_with("Details: dns error"));
        assert!(decode.ends_with("Details: expected value"));
    }
}
