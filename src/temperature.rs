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
use crate::values::Values;
use absolute_unit::{celsius, kelvin};

/// Degrees Celsius to kelvin, elementwise.
pub fn celsius_to_kelvin(celsius: impl Into<Values>) -> Values {
    celsius.into().map(|t| kelvin!(celsius!(t)).f64())
}

/// Kelvin to degrees Celsius, elementwise.
pub fn kelvin_to_celsius(kelvin: impl Into<Values>) -> Values {
    kelvin.into().map(|t| celsius!(kelvin!(t)).f64())
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    const CELSIUS: [f64; 3] = [-30.00, 236.00, 555.24];
    const KELVIN: [f64; 3] = [243.15, 509.15, 828.39];

    #[test]
    fn test_scalar_conversion() {
        for (c, k) in CELSIUS.iter().zip(KELVIN.iter()) {
            assert_relative_eq!(celsius_to_kelvin(*c)[0], *k, max_relative = 1e-12);
            assert_relative_eq!(kelvin_to_celsius(*k)[0], *c, max_relative = 1e-12);
            assert!(celsius_to_kelvin(*c).is_scalar());
        }
    }

    #[test]
    fn test_sequence_conversion_keeps_order() {
        let mut celsius = CELSIUS.to_vec();
        let mut kelvin = KELVIN.to_vec();
        for _ in 0..2 {
            let k = celsius_to_kelvin(&celsius);
            let c = kelvin_to_celsius(&kelvin);
            for i in 0..3 {
                assert_relative_eq!(k[i], kelvin[i], max_relative = 1e-12);
                assert_relative_eq!(c[i], celsius[i], max_relative = 1e-12);
            }
            celsius.reverse();
            kelvin.reverse();
        }
    }

    #[test]
    fn test_round_trip() {
        for t in (-200..1000).step_by(30) {
            let t = f64::from(t);
            assert_relative_eq!(kelvin_to_celsius(celsius_to_kelvin(t)[0])[0], t, epsilon = 1e-9);
        }
        for t in (0..1000).step_by(30) {
            let t = f64::from(t);
            assert_relative_eq!(celsius_to_kelvin(kelvin_to_celsius(t)[0])[0], t, epsilon = 1e-9);
        }
    }
}
