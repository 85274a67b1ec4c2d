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
use crate::supports_value_type_conversion;
use ordered_float::OrderedFloat;
use std::{fmt::Debug, marker::PhantomData};

pub trait TemperatureUnit: Copy + Debug + Eq + PartialEq + 'static {
    fn convert_to_kelvin(degrees_in: f64) -> f64;
    fn convert_from_kelvin(degrees_k: f64) -> f64;
}

/// A temperature stored on the absolute scale and read back in `Unit`.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Temperature<Unit: TemperatureUnit> {
    kelvin: OrderedFloat<f64>, // in kelvin
    phantom: PhantomData<Unit>,
}

impl<Unit: TemperatureUnit> Temperature<Unit> {
    pub fn f64(self) -> f64 {
        f64::from(self)
    }
}

impl<'a, UnitA, UnitB> From<&'a Temperature<UnitA>> for Temperature<UnitB>
where
    UnitA: TemperatureUnit,
    UnitB: TemperatureUnit,
{
    fn from(v: &'a Temperature<UnitA>) -> Self {
        Self {
            kelvin: v.kelvin,
            phantom: PhantomData,
        }
    }
}

// Note: we need to convert to kelvin, so cannot use the default value conversions.
macro_rules! impl_temperature_unit_for_numeric_type {
    ($Num:ty) => {
        impl<Unit> From<$Num> for Temperature<Unit>
        where
            Unit: TemperatureUnit,
        {
            fn from(v: $Num) -> Self {
                Self {
                    kelvin: OrderedFloat(Unit::convert_to_kelvin(v as f64)),
                    phantom: PhantomData,
                }
            }
        }

        impl<Unit> From<&$Num> for Temperature<Unit>
        where
            Unit: TemperatureUnit,
        {
            fn from(v: &$Num) -> Self {
                Self {
                    kelvin: OrderedFloat(Unit::convert_to_kelvin(*v as f64)),
                    phantom: PhantomData,
                }
            }
        }

        impl<Unit> From<Temperature<Unit>> for $Num
        where
            Unit: TemperatureUnit,
        {
            fn from(v: Temperature<Unit>) -> $Num {
                Unit::convert_from_kelvin(v.kelvin.0) as $Num
            }
        }
    };
}
supports_value_type_conversion!(impl_temperature_unit_for_numeric_type);
