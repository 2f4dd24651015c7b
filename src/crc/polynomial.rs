use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{error::CrcError, CASTAGNOLI_POLYNOMIAL, GZIP_POLYNOMIAL};

/// Generator polynomial selection for a checksum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CrcPolynomial {
    #[default]
    Gzip,
    Castagnoli,
    /// Any other reflected 32-bit modulus.
    Custom(u32),
}

impl CrcPolynomial {
    pub fn modulus(self) -> u32 {
        match self {
            CrcPolynomial::Gzip => GZIP_POLYNOMIAL,
            CrcPolynomial::Castagnoli => CASTAGNOLI_POLYNOMIAL,
            CrcPolynomial::Custom(modulus) => modulus,
        }
    }

    /// Maps a raw modulus back to a named polynomial where one exists.
    pub fn from_modulus(modulus: u32) -> Self {
        match modulus {
            GZIP_POLYNOMIAL => CrcPolynomial::Gzip,
            CASTAGNOLI_POLYNOMIAL => CrcPolynomial::Castagnoli,
            other => CrcPolynomial::Custom(other),
        }
    }
}

impl FromStr for CrcPolynomial {
    type Err = CrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "gzip" | "crc32" | "ieee" => Ok(CrcPolynomial::Gzip),
            "castagnoli" | "crc32c" | "iscsi" => Ok(CrcPolynomial::Castagnoli),
            lower => lower
                .strip_prefix("0x")
                .and_then(|digits| u32::from_str_radix(digits, 16).ok())
                .map(CrcPolynomial::from_modulus)
                .ok_or_else(|| CrcError::InvalidPolynomial(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for CrcPolynomial {
    type Error = CrcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CrcPolynomial> for String {
    fn from(polynomial: CrcPolynomial) -> Self {
        polynomial.to_string()
    }
}

impl fmt::Display for CrcPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrcPolynomial::Gzip => write!(f, "crc32"),
            CrcPolynomial::Castagnoli => write!(f, "crc32c"),
            CrcPolynomial::Custom(modulus) => write!(f, "0x{modulus:08x}"),
        }
    }
}
