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
use crate::TemperatureUnit;

/// Offset from kelvin at the ice point.
pub const ICE_POINT_KELVIN: f64 = 273.15;

#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Celsius;
impl TemperatureUnit for Celsius {
    fn convert_to_kelvin(degrees_in: f64) -> f64 {
        degrees_in + ICE_POINT_KELVIN
    }
    fn convert_from_kelvin(degrees_k: f64) -> f64 {
        degrees_k - ICE_POINT_KELVIN
    }
}

#[macro_export]
macro_rules! celsius {
    ($num:expr) => {
        $crate::Temperature::<$crate::Celsius>::from(&$num)
    };
}
