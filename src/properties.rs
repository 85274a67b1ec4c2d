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

//! Quantities derived from the state of the air at a height.
//!
//! Everything here is a pure function of the geometric height, geopotential
//! height, temperature, and pressure; the formulas and coefficients are
//! those used to produce the ICAO tabulation.
use crate::layer::LayerState;
use physical_constants::{
    LayerName, ADIABATIC_INDEX, AIR_GAS_CONSTANT, BOLTZMANN, EARTH_RADIUS_M,
    MOLECULE_COLLISION_DIAMETER, STANDARD_GRAVITY, SUTHERLAND_COEFFICIENT,
    SUTHERLAND_TEMPERATURE,
};
use std::f64::consts::{PI, SQRT_2};

/// kg/m^3
pub fn density(pressure: f64, temperature: f64) -> f64 {
    pressure / (AIR_GAS_CONSTANT * temperature)
}

/// Acceleration of gravity at a geometric height, m/s^2.
pub fn gravitational_acceleration(h: f64) -> f64 {
    let ratio = EARTH_RADIUS_M / (EARTH_RADIUS_M + h);
    STANDARD_GRAVITY * ratio * ratio
}

/// m/s
pub fn speed_of_sound(temperature: f64) -> f64 {
    (ADIABATIC_INDEX * AIR_GAS_CONSTANT * temperature).sqrt()
}

/// Sutherland's law, Pa s.
pub fn dynamic_viscosity(temperature: f64) -> f64 {
    SUTHERLAND_COEFFICIENT * temperature.powf(1.5) / (temperature + SUTHERLAND_TEMPERATURE)
}

/// m^2/s
pub fn kinematic_viscosity(dynamic_viscosity: f64, density: f64) -> f64 {
    dynamic_viscosity / density
}

/// W/(m K)
pub fn thermal_conductivity(temperature: f64) -> f64 {
    2.648_151e-3 * temperature.powf(1.5)
        / (temperature + 245.4 * 10f64.powf(-12. / temperature))
}

/// m
pub fn pressure_scale_height(temperature: f64, gravitational_acceleration: f64) -> f64 {
    AIR_GAS_CONSTANT * temperature / gravitational_acceleration
}

/// N/m^3
pub fn specific_weight(density: f64, gravitational_acceleration: f64) -> f64 {
    density * gravitational_acceleration
}

/// Molecules per m^3.
pub fn number_density(pressure: f64, temperature: f64) -> f64 {
    pressure / (*BOLTZMANN * temperature)
}

/// m/s
pub fn mean_particle_speed(temperature: f64) -> f64 {
    (8. / PI * AIR_GAS_CONSTANT * temperature).sqrt()
}

/// m
pub fn mean_free_path(number_density: f64) -> f64 {
    1. / (SQRT_2 * PI * MOLECULE_COLLISION_DIAMETER.powi(2) * number_density)
}

/// 1/s
pub fn collision_frequency(number_density: f64, mean_particle_speed: f64) -> f64 {
    mean_particle_speed / mean_free_path(number_density)
}

/// The full state of the air at a single height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AirState {
    pub geometric_height: f64,
    pub geopotential_height: f64,
    pub layer: LayerName,
    pub temperature: f64,
    pub pressure: f64,
    pub density: f64,
    pub grav_accel: f64,
    pub speed_of_sound: f64,
    pub dynamic_viscosity: f64,
    pub kinematic_viscosity: f64,
    pub thermal_conductivity: f64,
    pub pressure_scale_height: f64,
    pub specific_weight: f64,
    pub number_density: f64,
    pub mean_particle_speed: f64,
    pub collision_frequency: f64,
    pub mean_free_path: f64,
}

impl AirState {
    pub fn new(geometric_height: f64, geopotential_height: f64, state: &LayerState) -> Self {
        let LayerState {
            layer,
            temperature,
            pressure,
        } = *state;
        let density = density(pressure, temperature);
        let grav_accel = gravitational_acceleration(geometric_height);
        let dynamic_viscosity = dynamic_viscosity(temperature);
        let number_density = number_density(pressure, temperature);
        let mean_particle_speed = mean_particle_speed(temperature);
        Self {
            geometric_height,
            geopotential_height,
            layer: layer.name,
            temperature,
            pressure,
            density,
            grav_accel,
            speed_of_sound: speed_of_sound(temperature),
            dynamic_viscosity,
            kinematic_viscosity: kinematic_viscosity(dynamic_viscosity, density),
            thermal_conductivity: thermal_conductivity(temperature),
            pressure_scale_height: pressure_scale_height(temperature, grav_accel),
            specific_weight: specific_weight(density, grav_accel),
            number_density,
            mean_particle_speed,
            collision_frequency: collision_frequency(number_density, mean_particle_speed),
            mean_free_path: mean_free_path(number_density),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use physical_constants::{
        AVOGADRO, SEA_LEVEL_DENSITY, SEA_LEVEL_PRESSURE_PA, SEA_LEVEL_TEMPERATURE_K,
        UNIVERSAL_GAS_CONSTANT,
    };

    const T0: f64 = SEA_LEVEL_TEMPERATURE_K;
    const P0: f64 = SEA_LEVEL_PRESSURE_PA;

    #[test]
    fn test_sea_level_properties() {
        assert_relative_eq!(density(P0, T0), SEA_LEVEL_DENSITY, max_relative = 1e-5);
        assert_eq!(gravitational_acceleration(0.), STANDARD_GRAVITY);
        assert_relative_eq!(speed_of_sound(T0), 340.294, max_relative = 1e-5);
        assert_relative_eq!(dynamic_viscosity(T0), 1.7894e-5, max_relative = 1e-4);
        assert_relative_eq!(thermal_conductivity(T0), 2.5343e-2, max_relative = 1e-4);
        assert_relative_eq!(number_density(P0, T0), 2.5471e25, max_relative = 1e-4);
        assert_relative_eq!(mean_particle_speed(T0), 458.94, max_relative = 1e-4);
        assert_relative_eq!(mean_free_path(2.5471e25), 6.6328e-8, max_relative = 1e-4);
    }

    #[test]
    fn test_number_density_matches_molar_form() {
        // n = N_A P / (R* T)
        let n = AVOGADRO * P0 / (UNIVERSAL_GAS_CONSTANT * T0);
        assert_relative_eq!(number_density(P0, T0), n, max_relative = 1e-12);
    }

    #[test]
    fn test_gravity_falls_off_with_height() {
        assert!(gravitational_acceleration(-5_004.) > STANDARD_GRAVITY);
        assert_relative_eq!(gravitational_acceleration(81_020.), 9.561_37, max_relative = 1e-5);
    }

    #[test]
    fn test_air_state_is_consistent() {
        let state = AirState::new(0., 0., &LayerState::at(0.));
        assert_eq!(state.layer, LayerName::Troposphere);
        assert_relative_eq!(state.kinematic_viscosity, 1.4607e-5, max_relative = 1e-4);
        assert_relative_eq!(state.pressure_scale_height, 8_434.5, max_relative = 1e-4);
        assert_relative_eq!(state.specific_weight, 12.013, max_relative = 1e-4);
        assert_relative_eq!(state.collision_frequency, 6.9193e9, max_relative = 1e-4);
        assert_relative_eq!(
            state.collision_frequency * state.mean_free_path,
            state.mean_particle_speed,
            max_relative = 1e-12
        );
    }
}
