//! SOAP protocol versions

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::fault::{Fault, Soap11Fault, Soap12Fault};

/// SOAP protocol version.
///
/// The version selects the envelope namespace and the shape of the fault
/// structure. It must be chosen before the body or fault is configured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SoapVersion {
    /// SOAP 1.1: unprefixed `faultcode`, `faultstring`, `faultactor`, `detail`
    #[cfg_attr(feature = "serde", serde(rename = "1.1"))]
    V1_1,
    /// SOAP 1.2: prefixed `Code`, `Reason`, `Node`, `Role`, `Detail`
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "1.2"))]
    V1_2,
}

impl SoapVersion {
    /// Envelope namespace URI
    pub const fn namespace_uri(self) -> &'static str {
        match self {
            Self::V1_1 => "http://schemas.xmlsoap.org/soap/envelope/",
            Self::V1_2 => "http://www.w3.org/2003/05/soap-envelope",
        }
    }

    /// HTTP `Content-Type` used when the envelope travels over HTTP
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::V1_1 => "text/xml; charset=utf-8",
            Self::V1_2 => "application/soap+xml; charset=utf-8",
        }
    }

    /// Empty fault of the shape this version requires
    pub fn fault_builder(self) -> Fault {
        tracing::trace!(version = %self, "creating fault builder");
        match self {
            Self::V1_1 => Fault::V1_1(Soap11Fault::default()),
            Self::V1_2 => Fault::V1_2(Soap12Fault::default()),
        }
    }
}

impl fmt::Display for SoapVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1_1 => write!(f, "1.1"),
            Self::V1_2 => write!(f, "1.2"),
        }
    }
}

impl FromStr for SoapVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        let normalized = normalized.strip_prefix('v').unwrap_or(&normalized);
        match normalized {
            "1.1" | "11" | "1_1" => Ok(Self::V1_1),
            "1.2" | "12" | "1_2" => Ok(Self::V1_2),
            _ => Err(Error::unknown_version(s)),
        }
    }
}
