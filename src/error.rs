// This file is part of standard_atmosphere.
//
// standard_atmosphere is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// standard_atmosphere is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with standard_atmosphere.  If not, see <http://www.gnu.org/licenses/>.
use thiserror::Error;

/// Broad classification of an input failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// The input is not a number or a flat sequence of numbers.
    Type,
    /// The input has the right shape but an unusable value.
    Value,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AtmosphereError {
    #[error("invalid height input: {0}")]
    InvalidType(String),

    #[error("height input must contain at least one value")]
    Empty,

    #[error("height {height} m is outside of the valid range [{min}, {max}] m")]
    OutOfBounds { height: f64, min: f64, max: f64 },

    #[error("{quantity} {value} is outside of the valid range [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl AtmosphereError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidType(_) => ErrorKind::Type,
            Self::Empty | Self::OutOfBounds { .. } | Self::OutOfRange { .. } => ErrorKind::Value,
        }
    }

    pub(crate) fn invalid_type(what: impl Into<String>) -> Self {
        Self::InvalidType(what.into())
    }
}

pub type Result<T, E = AtmosphereError> = std::result::Result<T, E>;
