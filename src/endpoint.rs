use std::fmt;

use uuid::Uuid;

use crate::common::characteristics::{BRIGHTNESS, LIGHT, TEMPERATURE};

/// Attribute exposed by the light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Power,
    Brightness,
    Temperature,
}

impl Endpoint {
    /// Characteristic UUID of the endpoint
    #[inline]
    pub fn uuid(self) -> Uuid {
        match self {
            Endpoint::Power => LIGHT,
            Endpoint::Brightness => BRIGHTNESS,
            Endpoint::Temperature => TEMPERATURE,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Power => "power",
            Endpoint::Brightness => "brightness",
            Endpoint::Temperature => "temperature",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn endpoints_map_to_distinct_characteristics() {
        assert_eq!(
            Endpoint::Power.uuid(),
            Uuid::from_str("932c32bd-0002-47a2-835a-a8d455b859dd").unwrap()
        );
        assert_eq!(
            Endpoint::Brightness.uuid(),
            Uuid::from_str("932c32bd-0003-47a2-835a-a8d455b859dd").unwrap()
        );
        assert_eq!(
            Endpoint::Temperature.uuid(),
            Uuid::from_str("932c32bd-0004-47a2-835a-a8d455b859dd").unwrap()
        );
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Endpoint::Power.to_string(), "power");
        assert_eq!(Endpoint::Brightness.to_string(), "brightness");
        assert_eq!(Endpoint::Temperature.to_string(), "temperature");
    }
}
