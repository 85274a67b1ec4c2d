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

//! Physical constants of the ICAO Standard Atmosphere (Doc 7488/3).
mod atmosphere;

pub use atmosphere::{AtmosphereLayer, LayerName, STANDARD_ATMOSPHERE_LAYERS};

use once_cell::sync::Lazy;

/// Standard acceleration of free fall, m/s^2.
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Nominal earth radius used to convert to geopotential height, m.
pub const EARTH_RADIUS_M: f64 = 6_356_766.;

/// Molar mass of dry air, kg/mol.
pub const AIR_MOLAR_MASS: f64 = 28.964_420e-3;

/// Avogadro constant, 1/mol.
pub const AVOGADRO: f64 = 602.257e21;

/// Universal gas constant, J/(K mol).
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8_314.32e-3;

/// Specific gas constant of dry air, J/(K kg).
pub const AIR_GAS_CONSTANT: f64 = 287.052_87;

/// Adiabatic index (ratio of specific heats) of air.
pub const ADIABATIC_INDEX: f64 = 1.4;

/// Sutherland's empirical coefficient, kg/(m s K^0.5).
pub const SUTHERLAND_COEFFICIENT: f64 = 1.458e-6;

/// Sutherland's constant, K.
pub const SUTHERLAND_TEMPERATURE: f64 = 110.4;

/// Effective collision diameter of an air molecule, m.
pub const MOLECULE_COLLISION_DIAMETER: f64 = 0.365e-9;

pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.;
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Geometric height bounds of the tabulation, m (inclusive).
pub const MIN_HEIGHT_M: f64 = -5_004.;
pub const MAX_HEIGHT_M: f64 = 81_020.;

/// Boltzmann constant, J/K. The ICAO tables derive it from R* and N_A rather
/// than using the CODATA value.
pub static BOLTZMANN: Lazy<f64> = Lazy::new(|| UNIVERSAL_GAS_CONSTANT / AVOGADRO);

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gas_constants_agree() {
        // R_s = R* / M
        assert_relative_eq!(
            UNIVERSAL_GAS_CONSTANT / AIR_MOLAR_MASS,
            AIR_GAS_CONSTANT,
            max_relative = 1e-6
        );
        assert_relative_eq!(*BOLTZMANN, 1.380_545e-23, max_relative = 1e-6);
    }

    #[test]
    fn test_sea_level_state() {
        assert_relative_eq!(
            SEA_LEVEL_PRESSURE_PA / (AIR_GAS_CONSTANT * SEA_LEVEL_TEMPERATURE_K),
            SEA_LEVEL_DENSITY,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_height_bounds() {
        // Both bounds sit just outside the first and last layer bases once
        // converted to geopotential height.
        let geopotential = |h: f64| EARTH_RADIUS_M * h / (EARTH_RADIUS_M + h);
        assert!(geopotential(MIN_HEIGHT_M) < STANDARD_ATMOSPHERE_LAYERS[0].base_height);
        assert!(geopotential(MAX_HEIGHT_M) > STANDARD_ATMOSPHERE_LAYERS[8].base_height);
    }
}
