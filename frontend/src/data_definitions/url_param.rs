//! Route segments that carry a whole serializable value.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};

/// Wraps a value so the router can place it in a path segment.
/// The value is CBOR encoded, then base64url, so selections keep their order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        if ciborium::into_writer(&self.0, &mut encoded).is_ok() {
            write!(f, "{}", URL_SAFE.encode(encoded))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamError {
    Base64(base64::DecodeError),
    Cbor(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64(err) => write!(f, "invalid url segment: {}", err),
            Self::Cbor(err) => write!(f, "invalid url state: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE.decode(s.as_bytes()).map_err(UrlParamError::Base64)?;
        let value = ciborium::from_reader(std::io::Cursor::new(bytes)).map_err(UrlParamError::Cbor)?;
        Ok(UrlParam(value))
    }
}


#[cfg(test)]
mod tests {
    use common::{facet::FacetKey, search_query::CatalogSearch};

    use super::*;

    #[test]
    fn search_state_survives_the_url() {
        let mut search = CatalogSearch { keyword: "決済".to_string(), ..Default::default() };
        search.selection.toggle(FacetKey::Skill, "Rust");
        search.selection.toggle(FacetKey::Skill, "Go");
        search.selection.toggle(FacetKey::Area, "フルリモート");

        let segment = UrlParam(search.clone()).to_string();
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric() || "-_=".contains(c)));

        let parsed: UrlParam<CatalogSearch> = segment.parse().unwrap();
        assert_eq!(parsed.0, search);
        let skills: Vec<&str> = parsed.0.selection.get(FacetKey::Skill).iter().collect();
        assert_eq!(skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn garbage_segments_are_rejected() {
        assert!(matches!("not base64!".parse::<UrlParam<CatalogSearch>>(), Err(UrlParamError::Base64(_))));
        let not_cbor = URL_SAFE.encode([0xff_u8, 0x00]);
        assert!(not_cbor.parse::<UrlParam<CatalogSearch>>().is_err());
    }
}
