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
use crate::{
    error::{AtmosphereError, Result},
    values::Values,
};
use json::JsonValue;
use physical_constants::{MAX_HEIGHT_M, MIN_HEIGHT_M};

/// Validated geometric heights, in meters.
///
/// Construction fails unless every height lies within the inclusive
/// tabulation bounds, so anything holding a `Heights` can evaluate the model
/// without further checks. Whether the caller supplied a scalar is retained
/// so that results can be shaped the same way.
#[derive(Clone, Debug, PartialEq)]
pub struct Heights {
    h: Vec<f64>,
    scalar: bool,
}

impl Heights {
    pub fn new(heights: impl Into<Values>) -> Result<Self> {
        let heights = heights.into();
        if heights.is_empty() {
            return Err(AtmosphereError::Empty);
        }
        for &height in heights.iter() {
            check_bounds(height)?;
        }
        let scalar = heights.is_scalar();
        Ok(Self {
            h: heights.into_vec(),
            scalar,
        })
    }

    /// Accept a number or a flat array of numbers from untyped input.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        if value.is_number() {
            return Self::new(json_number(value)?);
        }
        if !value.is_array() {
            return Err(AtmosphereError::invalid_type(json_kind(value)));
        }
        if is_hollow(value) {
            return Err(AtmosphereError::Empty);
        }
        let heights = value
            .members()
            .map(|member| {
                if member.is_array() {
                    Err(AtmosphereError::invalid_type("nested array"))
                } else if member.is_number() {
                    json_number(member)
                } else {
                    Err(AtmosphereError::invalid_type(json_kind(member)))
                }
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::new(heights)
    }

    /// Parse heights from JSON text, e.g. `"1000"` or `"[0, 11000]"`.
    pub fn parse(text: &str) -> Result<Self> {
        let value = json::parse(text).map_err(|e| {
            AtmosphereError::invalid_type(format!("unparsable heights {:?}: {}", text, e))
        })?;
        Self::from_json(&value)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.h
    }

    pub fn is_scalar(&self) -> bool {
        self.scalar
    }

    pub fn len(&self) -> usize {
        self.h.len()
    }

    pub fn is_empty(&self) -> bool {
        self.h.is_empty()
    }

    /// The lowest and highest height.
    pub fn range(&self) -> (f64, f64) {
        self.h
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &h| {
                (lo.min(h), hi.max(h))
            })
    }

    /// Wrap per-height results in the shape of the original input.
    pub fn shape<T>(&self, values: Vec<T>) -> Values<T> {
        Values::shaped(self.scalar, values)
    }
}

fn check_bounds(height: f64) -> Result<()> {
    // NaN fails the range check as well.
    if (MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&height) {
        Ok(())
    } else {
        Err(AtmosphereError::OutOfBounds {
            height,
            min: MIN_HEIGHT_M,
            max: MAX_HEIGHT_M,
        })
    }
}

fn json_number(value: &JsonValue) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| AtmosphereError::invalid_type(format!("not a number: {}", value)))
}

// An array holding nothing but (possibly nested) empty arrays.
fn is_hollow(value: &JsonValue) -> bool {
    value.is_array() && value.members().all(is_hollow)
}

fn json_kind(value: &JsonValue) -> String {
    if value.is_null() {
        "null".to_owned()
    } else if value.is_string() {
        format!("string {}", value.dump())
    } else if value.is_boolean() {
        format!("boolean {}", value)
    } else if value.is_object() {
        format!("object {}", value.dump())
    } else {
        format!("unsupported value {}", value.dump())
    }
}
