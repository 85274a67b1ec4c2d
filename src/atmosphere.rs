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
    error::Result,
    geopotential::geopotential_heights,
    heights::Heights,
    layer::layer_states,
    map_elements,
    properties::AirState,
    temperature::kelvin_to_celsius,
    values::Values,
};
use json::JsonValue;
use log::debug;
use physical_constants::LayerName;

/// The ICAO Standard Atmosphere evaluated at one or more geometric heights.
///
/// Every property is computed when the atmosphere is built; accessors hand
/// back a scalar for scalar input and a sequence, in input order, otherwise.
#[derive(Clone, Debug)]
pub struct Atmosphere {
    heights: Heights,
    states: Vec<AirState>,
}

impl Atmosphere {
    pub fn new(height: impl Into<Values>) -> Result<Self> {
        Ok(Self::from_heights(Heights::new(height)?))
    }

    pub fn from_json(height: &JsonValue) -> Result<Self> {
        Ok(Self::from_heights(Heights::from_json(height)?))
    }

    pub fn parse(height: &str) -> Result<Self> {
        Ok(Self::from_heights(Heights::parse(height)?))
    }

    pub fn from_heights(heights: Heights) -> Self {
        let geometric = heights.as_slice();
        let geopotential = geopotential_heights(geometric);
        let layers = layer_states(&geopotential);
        let states = geometric
            .iter()
            .zip(geopotential.iter())
            .zip(layers.iter())
            .map(|((&h, &hh), layer)| AirState::new(h, hh, layer))
            .collect::<Vec<_>>();
        let (lo, hi) = heights.range();
        debug!(
            "evaluated standard atmosphere at {} heights in [{}, {}] m",
            states.len(),
            lo,
            hi
        );
        Self { heights, states }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        self.heights.is_scalar()
    }

    pub fn heights(&self) -> &Heights {
        &self.heights
    }

    pub fn states(&self) -> &[AirState] {
        &self.states
    }

    fn column<T: Send>(&self, f: impl Fn(AirState) -> T + Sync + Send) -> Values<T> {
        self.heights.shape(map_elements(&self.states, f))
    }

    /// Geopotential height H, m.
    pub fn geopotential_height(&self) -> Values {
        self.column(|s| s.geopotential_height)
    }

    /// Geometric height h, m.
    pub fn geometric_height(&self) -> Values {
        self.column(|s| s.geometric_height)
    }

    pub fn layer_name(&self) -> Values<LayerName> {
        self.column(|s| s.layer)
    }

    /// K
    pub fn temperature(&self) -> Values {
        self.column(|s| s.temperature)
    }

    /// °C
    pub fn temperature_in_celsius(&self) -> Values {
        kelvin_to_celsius(self.temperature())
    }

    /// Pa
    pub fn pressure(&self) -> Values {
        self.column(|s| s.pressure)
    }

    /// kg/m^3
    pub fn density(&self) -> Values {
        self.column(|s| s.density)
    }

    /// m/s^2
    pub fn grav_accel(&self) -> Values {
        self.column(|s| s.grav_accel)
    }

    /// m/s
    pub fn speed_of_sound(&self) -> Values {
        self.column(|s| s.speed_of_sound)
    }

    /// Pa s
    pub fn dynamic_viscosity(&self) -> Values {
        self.column(|s| s.dynamic_viscosity)
    }

    /// m^2/s
    pub fn kinematic_viscosity(&self) -> Values {
        self.column(|s| s.kinematic_viscosity)
    }

    /// W/(m K)
    pub fn thermal_conductivity(&self) -> Values {
        self.column(|s| s.thermal_conductivity)
    }

    /// m
    pub fn pressure_scale_height(&self) -> Values {
        self.column(|s| s.pressure_scale_height)
    }

    /// N/m^3
    pub fn specific_weight(&self) -> Values {
        self.column(|s| s.specific_weight)
    }

    /// 1/m^3
    pub fn number_density(&self) -> Values {
        self.column(|s| s.number_density)
    }

    /// m/s
    pub fn mean_particle_speed(&self) -> Values {
        self.column(|s| s.mean_particle_speed)
    }

    /// 1/s
    pub fn collision_frequency(&self) -> Values {
        self.column(|s| s.collision_frequency)
    }

    /// m
    pub fn mean_free_path(&self) -> Values {
        self.column(|s| s.mean_free_path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::{AtmosphereError, ErrorKind};
    use approx::assert_relative_eq;

    #[test]
    fn test_sea_level() -> Result<()> {
        let sea_level = Atmosphere::new(0.)?;
        assert!(sea_level.is_scalar());
        assert_eq!(sea_level.geopotential_height(), 0.);
        assert_eq!(sea_level.geometric_height(), 0.);
        assert_eq!(sea_level.temperature(), 288.15);
        assert_eq!(sea_level.pressure(), 101_325.);
        assert_eq!(sea_level.grav_accel(), 9.806_65);
        assert_relative_eq!(sea_level.temperature_in_celsius()[0], 15., epsilon = 1e-9);
        assert_eq!(sea_level.layer_name(), Values::Scalar(LayerName::Troposphere));
        Ok(())
    }

    #[test]
    fn test_shape_follows_input() -> Result<()> {
        let single = Atmosphere::new(vec![1_000.])?;
        assert!(!single.is_scalar());
        assert_eq!(single.density().len(), 1);
        assert!(single.density().scalar().is_none());

        let many = Atmosphere::new([47_000., 0., -5_000.])?;
        assert_eq!(many.len(), 3);
        assert_eq!(many.temperature()[1], 288.15);
        assert_eq!(
            many.layer_name().to_vec(),
            vec![
                LayerName::Stratosphere,
                LayerName::Troposphere,
                LayerName::Troposphere
            ]
        );
        Ok(())
    }

    #[test]
    fn test_failed_construction() {
        let err = Atmosphere::new(81_021.).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(Atmosphere::parse("null").unwrap_err().kind(), ErrorKind::Type);
        assert_eq!(
            Atmosphere::from_json(&JsonValue::new_array()).unwrap_err(),
            AtmosphereError::Empty
        );
    }

    #[test]
    fn test_is_send_and_sync() {
        fn check<T: Send + Sync>() {}
        check::<Atmosphere>();
    }
}
