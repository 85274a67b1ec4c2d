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
    atmosphere::Atmosphere,
    error::{AtmosphereError, Result},
    geopotential::geopotential_height,
    heights::Heights,
    layer::LayerState,
    map_elements,
    properties::density,
    values::Values,
};
use log::trace;
use physical_constants::{MAX_HEIGHT_M, MIN_HEIGHT_M};

const MAX_ITERATIONS: usize = 200;
const HEIGHT_TOLERANCE_M: f64 = 1e-9;

fn pressure_at(h: f64) -> f64 {
    LayerState::at(geopotential_height(h)).pressure
}

fn density_at(h: f64) -> f64 {
    let state = LayerState::at(geopotential_height(h));
    density(state.pressure, state.temperature)
}

/// Bisect for the geometric height where a quantity that strictly falls with
/// height takes the given value. The value must already be in range.
fn solve_height(target: f64, quantity_at: fn(f64) -> f64) -> f64 {
    let (mut lo, mut hi) = (MIN_HEIGHT_M, MAX_HEIGHT_M);
    let mut iterations = 0;
    while hi - lo > HEIGHT_TOLERANCE_M && iterations < MAX_ITERATIONS {
        let mid = 0.5 * (lo + hi);
        if quantity_at(mid) > target {
            lo = mid;
        } else {
            hi = mid;
        }
        iterations += 1;
    }
    let h = 0.5 * (lo + hi);
    trace!("solved {} at h = {} m in {} iterations", target, h, iterations);
    h
}

fn solve_heights(
    values: Values,
    quantity: &'static str,
    quantity_at: fn(f64) -> f64,
) -> Result<Heights> {
    if values.is_empty() {
        return Err(AtmosphereError::Empty);
    }
    let (min, max) = (quantity_at(MAX_HEIGHT_M), quantity_at(MIN_HEIGHT_M));
    if let Some(&value) = values.iter().find(|v| !(min..=max).contains(*v)) {
        return Err(AtmosphereError::OutOfRange {
            quantity,
            value,
            min,
            max,
        });
    }
    let h = map_elements(values.as_slice(), |v| {
        solve_height(v, quantity_at).clamp(MIN_HEIGHT_M, MAX_HEIGHT_M)
    });
    Heights::new(Values::shaped(values.is_scalar(), h))
}

impl Atmosphere {
    /// The atmosphere at the heights where the pressure (Pa) takes the given values.
    pub fn from_pressure(pressure: impl Into<Values>) -> Result<Self> {
        let heights = solve_heights(pressure.into(), "pressure", pressure_at)?;
        Ok(Self::from_heights(heights))
    }

    /// The atmosphere at the heights where the density (kg/m^3) takes the given values.
    pub fn from_density(density: impl Into<Values>) -> Result<Self> {
        let heights = solve_heights(density.into(), "density", density_at)?;
        Ok(Self::from_heights(heights))
    }
}
