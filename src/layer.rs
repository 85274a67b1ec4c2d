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
use once_cell::sync::Lazy;
use physical_constants::{
    AtmosphereLayer, AIR_GAS_CONSTANT, STANDARD_ATMOSPHERE_LAYERS, STANDARD_GRAVITY,
};

/// The standard layers with base pressures chained outward from the sea level
/// layer, so that pressure is continuous to rounding at every breakpoint. The
/// tabulated base pressures are rounded to six figures and would otherwise
/// leave steps of a few parts per million.
pub static LAYERS: Lazy<Vec<AtmosphereLayer>> = Lazy::new(|| {
    let mut layers = STANDARD_ATMOSPHERE_LAYERS.to_vec();
    let anchor = layers
        .iter()
        .position(|layer| layer.base_height == 0.)
        .unwrap_or(0);
    for i in anchor + 1..layers.len() {
        let lower = layers[i - 1];
        let base = layers[i].base_height;
        layers[i].base_pressure = pressure(&lower, base, temperature(&lower, base));
    }
    for i in (0..anchor).rev() {
        let top = layers[i + 1].base_height;
        let unit = AtmosphereLayer {
            base_pressure: 1.,
            ..layers[i]
        };
        layers[i].base_pressure =
            layers[i + 1].base_pressure / pressure(&unit, top, temperature(&unit, top));
    }
    layers
});

/// Find the layer holding a geopotential height.
///
/// Layers are closed at their base and open at their top, so a breakpoint
/// belongs to the layer that starts there. Heights under the first base fall
/// into the first layer and heights over the last base into the last one.
pub fn classify(geopotential: f64) -> &'static AtmosphereLayer {
    let layers: &'static [AtmosphereLayer] = &LAYERS;
    let above = layers.partition_point(|layer| layer.base_height <= geopotential);
    &layers[above.saturating_sub(1)]
}

pub fn temperature(layer: &AtmosphereLayer, geopotential: f64) -> f64 {
    if layer.is_isothermal() {
        layer.base_temperature
    } else {
        layer.base_temperature + layer.lapse_rate * (geopotential - layer.base_height)
    }
}

pub fn pressure(layer: &AtmosphereLayer, geopotential: f64, temperature: f64) -> f64 {
    if layer.is_isothermal() {
        layer.base_pressure
            * (-STANDARD_GRAVITY * (geopotential - layer.base_height)
                / (AIR_GAS_CONSTANT * layer.base_temperature))
                .exp()
    } else {
        layer.base_pressure
            * (layer.base_temperature / temperature)
                .powf(STANDARD_GRAVITY / (AIR_GAS_CONSTANT * layer.lapse_rate))
    }
}

/// Temperature and pressure at one geopotential height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerState {
    pub layer: &'static AtmosphereLayer,
    pub temperature: f64,
    pub pressure: f64,
}

impl LayerState {
    pub fn at(geopotential: f64) -> Self {
        let layer = classify(geopotential);
        let temperature = temperature(layer, geopotential);
        Self {
            layer,
            temperature,
            pressure: pressure(layer, geopotential, temperature),
        }
    }
}

pub fn layer_states(geopotential: &[f64]) -> Vec<LayerState> {
    map_elements(geopotential, LayerState::at)
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;
    use physical_constants::LayerName;

    #[test]
    fn test_breakpoints_belong_to_the_upper_layer() {
        for layer in LAYERS.iter() {
            assert_eq!(classify(layer.base_height), layer);
        }
        assert_eq!(classify(10_999.999).base_height, 0.);
        assert_eq!(classify(-5_007.94).base_height, -5_000.);
        assert_eq!(classify(80_000.36).base_height, 80_000.);
    }

    #[test]
    fn test_pressure_is_continuous() {
        for pair in LAYERS.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            let t = temperature(lower, upper.base_height);
            let p = pressure(lower, upper.base_height, t);
            assert_relative_eq!(t, upper.base_temperature, epsilon = 1e-9);
            assert_relative_eq!(p, upper.base_pressure, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_chained_pressures_match_table() {
        assert_eq!(LAYERS.len(), STANDARD_ATMOSPHERE_LAYERS.len());
        for (chained, table) in LAYERS.iter().zip(STANDARD_ATMOSPHERE_LAYERS.iter()) {
            assert_eq!(chained.base_height, table.base_height);
            assert_relative_eq!(chained.base_pressure, table.base_pressure, max_relative = 1e-5);
        }
        assert_eq!(classify(0.).base_pressure, 101_325.);
    }

    #[test]
    fn test_sea_level() {
        let state = LayerState::at(0.);
        assert_eq!(state.temperature, 288.15);
        assert_eq!(state.pressure, 101_325.);
        assert_eq!(state.layer.name, LayerName::Troposphere);
    }

    #[test]
    fn test_tropopause() {
        let state = LayerState::at(15_000.);
        assert_eq!(state.layer.name, LayerName::Tropopause);
        assert_eq!(state.temperature, 216.65);
        assert_relative_eq!(state.pressure, 12_044.6, max_relative = 1e-4);
    }

    #[test]
    fn test_states_keep_order() {
        let states = layer_states(&[50_000., 0., 25_000.]);
        let names = states.iter().map(|s| s.layer.name).collect::<Vec<_>>();
        assert_eq!(
            names,
            vec![
                LayerName::Stratopause,
                LayerName::Troposphere,
                LayerName::Stratosphere
            ]
        );
    }
}
