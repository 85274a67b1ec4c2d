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
use crate::map_elements;
use physical_constants::EARTH_RADIUS_M;

/// Geopotential height for a geometric height, both in meters.
pub fn geopotential_height(h: f64) -> f64 {
    EARTH_RADIUS_M * h / (EARTH_RADIUS_M + h)
}

/// Geometric height for a geopotential height, both in meters.
pub fn geometric_height(geopotential: f64) -> f64 {
    EARTH_RADIUS_M * geopotential / (EARTH_RADIUS_M - geopotential)
}

pub fn geopotential_heights(h: &[f64]) -> Vec<f64> {
    map_elements(h, geopotential_height)
}
