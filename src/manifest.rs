use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    crc::{format::parse_crc, CrcComposer, CrcError, CrcPolynomial},
    error::{AppError, Result},
};

/// CRC of one block together with the block's length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockChecksum {
    #[serde(with = "crc_hex")]
    pub crc: u32,
    pub length: u64,
}

/// Parses `<crc>:<length>`, e.g. `0x3610a686:5`.
impl FromStr for BlockChecksum {
    type Err = CrcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (crc, length) = s
            .split_once(':')
            .ok_or_else(|| CrcError::InvalidBlock(s.to_string()))?;

        let length: i64 = length
            .trim()
            .parse()
            .map_err(|_| CrcError::InvalidBlock(s.to_string()))?;
        let length = u64::try_from(length).map_err(|_| CrcError::NegativeLength(length))?;

        Ok(Self {
            crc: parse_crc(crc)?,
            length,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polynomial: Option<CrcPolynomial>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stripe_length: Option<u64>,
    pub blocks: Vec<BlockChecksum>,
}

impl BlockManifest {
    pub fn new(blocks: Vec<BlockChecksum>) -> Self {
        Self {
            blocks,
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let manifest: Self = serde_json::from_reader(BufReader::new(file))?;

        info!(
            "Loaded {} blocks from {}",
            manifest.blocks.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Composes every block in order, returning the serialized CRC of each stripe.
    pub fn compose(&self, default_polynomial: CrcPolynomial) -> Result<Vec<u8>> {
        let polynomial = self.polynomial.unwrap_or(default_polynomial);
        let first = self.blocks.first().ok_or(AppError::EmptyManifest)?;

        let mut composer = match self.stripe_length {
            Some(stripe_length) => CrcComposer::striped(polynomial, first.length, stripe_length),
            None => CrcComposer::new(polynomial, first.length),
        };

        debug!(
            "Composing {} blocks with {} (stripe length {:?})",
            self.blocks.len(),
            polynomial,
            self.stripe_length
        );

        for block in &self.blocks {
            composer.update(block.crc, block.length)?;
        }

        Ok(composer.digest())
    }
}

mod crc_hex {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::crc::format::parse_crc;

    pub fn serialize<S: Serializer>(crc: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{crc:08x}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_crc(&value).map_err(de::Error::custom)
    }
}
