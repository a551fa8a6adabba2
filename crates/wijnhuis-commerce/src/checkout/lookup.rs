//! Postcode-to-address lookup collaborator.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;

/// A resolved address for a postcode + house number pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressMatch {
    pub street: String,
    pub city: String,
    pub municipality: String,
    pub province: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// External postcode lookup service.
///
/// Any non-success is treated by the session as "switch to manual
/// entry" rather than a blocking failure.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve a normalized postcode and house number to an address.
    async fn lookup(
        &self,
        postcode: &str,
        house_number: &str,
    ) -> Result<AddressMatch, StorefrontError>;
}

/// In-repo mock with a handful of known postcodes.
#[derive(Debug, Clone, Default)]
pub struct MockAddressLookup;

#[async_trait]
impl AddressLookup for MockAddressLookup {
    async fn lookup(
        &self,
        postcode: &str,
        house_number: &str,
    ) -> Result<AddressMatch, StorefrontError> {
        tokio::time::sleep(Duration::from_millis(150)).await;

        let normalized: String = postcode
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        match normalized.as_str() {
            "1012JS" => Ok(AddressMatch {
                street: "Dam".to_string(),
                city: "Amsterdam".to_string(),
                municipality: "Amsterdam".to_string(),
                province: "Noord-Holland".to_string(),
                latitude: 52.3731,
                longitude: 4.8926,
            }),
            "3511KC" => Ok(AddressMatch {
                street: "Domplein".to_string(),
                city: "Utrecht".to_string(),
                municipality: "Utrecht".to_string(),
                province: "Utrecht".to_string(),
                latitude: 52.0907,
                longitude: 5.1214,
            }),
            "9712CP" => Ok(AddressMatch {
                street: "Grote Markt".to_string(),
                city: "Groningen".to_string(),
                municipality: "Groningen".to_string(),
                province: "Groningen".to_string(),
                latitude: 53.2194,
                longitude: 6.5665,
            }),
            _ => Err(StorefrontError::AddressNotFound {
                postcode: postcode.to_string(),
                house_number: house_number.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_postcode_resolves() {
        let lookup = MockAddressLookup;
        let found = lookup.lookup("1012 JS", "1").await.unwrap();
        assert_eq!(found.street, "Dam");
        assert_eq!(found.city, "Amsterdam");
    }

    #[tokio::test]
    async fn test_lookup_normalizes_spacing_and_case() {
        let lookup = MockAddressLookup;
        assert!(lookup.lookup("1012js", "1").await.is_ok());
        assert!(lookup.lookup(" 1012 js ", "1").await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_postcode_is_not_found() {
        let lookup = MockAddressLookup;
        let err = lookup.lookup("9999 ZZ", "12").await.unwrap_err();
        assert!(matches!(err, StorefrontError::AddressNotFound { .. }));
    }
}
