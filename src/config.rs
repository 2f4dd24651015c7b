use crate::{crc::CrcPolynomial, error::AppError};

pub const POLYNOMIAL_VAR: &str = "CRC_COMPOSE_POLYNOMIAL";
pub const STRIPE_LENGTH_VAR: &str = "CRC_COMPOSE_STRIPE_LENGTH";

/// Defaults for the command line, read from the environment (and `.env`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeConfig {
    pub polynomial: CrcPolynomial,
    pub stripe_length: Option<u64>,
}

impl ComposeConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let polynomial = match lookup(POLYNOMIAL_VAR) {
            Some(value) => value
                .parse()
                .map_err(|e| AppError::Config(format!("{POLYNOMIAL_VAR}: {e}")))?,
            None => CrcPolynomial::default(),
        };

        let stripe_length = lookup(STRIPE_LENGTH_VAR)
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| AppError::Config(format!("{STRIPE_LENGTH_VAR}: {e}")))
                    .and_then(|length| match length {
                        0 => Err(AppError::Config(format!(
                            "{STRIPE_LENGTH_VAR}: stripe length must be positive"
                        ))),
                        length => Ok(length),
                    })
            })
            .transpose()?;

        Ok(Self {
            polynomial,
            stripe_length,
        })
    }
}
