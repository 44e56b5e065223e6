//! Marketplace regions

/// Order book region
///
/// The marketplace runs two books; the numeric code is what travels in
/// query parameters. Operations that accept an optional region treat an
/// omitted value as "both regions combined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// European order book
    Europe = 0,
    /// USA order book
    Usa = 1,
}

impl Location {
    /// Returns the numeric region code
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Region for a numeric code
    pub fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Europe),
            1 => Some(Self::Usa),
            _ => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Europe => write!(f, "Europe"),
            Self::Usa => write!(f, "USA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_codes() {
        assert_eq!(Location::Europe.as_u8(), 0);
        assert_eq!(Location::Usa.as_u8(), 1);
        assert_eq!(Location::from_u8(0), Some(Location::Europe));
        assert_eq!(Location::from_u8(1), Some(Location::Usa));
        assert_eq!(Location::from_u8(2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::Europe.to_string(), "Europe");
        assert_eq!(Location::Usa.to_string(), "USA");
    }
}
