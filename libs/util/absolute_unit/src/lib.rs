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

pub(crate) mod temperature;
pub(crate) mod unit;

pub use crate::{
    temperature::{Temperature, TemperatureUnit},
    unit::{celsius::Celsius, kelvin::Kelvin},
};

#[macro_export]
macro_rules! supports_value_type_conversion {
    ($it:tt) => {
        $it!(f64);
        $it!(f32);
        $it!(isize);
        $it!(i64);
        $it!(i32);
        $it!(i16);
        $it!(i8);
    };
}
