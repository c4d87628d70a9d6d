//! `ResponseFormat` - JSON or XML body selection.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Body format requested from the WMATA API.
///
/// Chosen once per service instance. Decides both the endpoint path
/// (`/json/...` or the bare XML path) and how the body is decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `application/json` bodies.
    #[default]
    Json,
    /// `text/xml` bodies rooted in the `http://www.wmata.com` namespace.
    Xml,
}

impl ResponseFormat {
    /// Picks the path matching this format.
    #[must_use]
    pub const fn path<'a>(self, json: &'a str, xml: &'a str) -> &'a str {
        match self {
            Self::Json => json,
            Self::Xml => xml,
        }
    }

    /// Value for the `contentType` query parameter used by the train
    /// positions API.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else if s.eq_ignore_ascii_case("xml") {
            Ok(Self::Xml)
        } else {
            Err(format!("unknown response format: {s} (expected json or xml)"))
        }
    }
}
