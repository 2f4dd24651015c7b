pub mod config;
pub mod crc;
pub mod error;
pub mod manifest;

pub use crc::{
    compose, compose_with_monomial, get_monomial, multiply, try_compose, try_get_monomial,
    CrcComposer, CrcError, CrcPolynomial, CASTAGNOLI_POLYNOMIAL, GZIP_POLYNOMIAL,
};
pub use error::{AppError, Result};
