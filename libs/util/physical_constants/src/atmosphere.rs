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
use std::fmt;

/// Conventional name of the band a layer belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LayerName {
    Troposphere,
    Tropopause,
    Stratosphere,
    Stratopause,
    Mesosphere,
    Mesopause,
}

impl LayerName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Troposphere => "troposphere",
            Self::Tropopause => "tropopause",
            Self::Stratosphere => "stratosphere",
            Self::Stratopause => "stratopause",
            Self::Mesosphere => "mesosphere",
            Self::Mesopause => "mesopause",
        }
    }
}

impl fmt::Display for LayerName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A band of constant lapse rate, described at its lower edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphereLayer {
    /// Geopotential height of the layer base, m.
    pub base_height: f64,
    /// Temperature at the layer base, K.
    pub base_temperature: f64,
    /// Temperature gradient, K/m. Zero for isothermal layers.
    pub lapse_rate: f64,
    /// Pressure at the layer base, Pa.
    pub base_pressure: f64,
    pub name: LayerName,
}

impl AtmosphereLayer {
    const fn new(
        base_height: f64,
        base_temperature: f64,
        lapse_rate: f64,
        base_pressure: f64,
        name: LayerName,
    ) -> Self {
        Self {
            base_height,
            base_temperature,
            lapse_rate,
            base_pressure,
            name,
        }
    }

    pub fn is_isothermal(&self) -> bool {
        self.lapse_rate == 0.
    }
}

/// ICAO Doc 7488/3 layers, ordered by base height; each layer extends to the
/// base of the next and the last one is closed at the maximum height.
pub static STANDARD_ATMOSPHERE_LAYERS: [AtmosphereLayer; 9] = [
    AtmosphereLayer::new(-5_000., 320.65, -6.5e-3, 1.776_87e5, LayerName::Troposphere),
    AtmosphereLayer::new(0., 288.15, -6.5e-3, 1.013_25e5, LayerName::Troposphere),
    AtmosphereLayer::new(11_000., 216.65, 0., 2.263_20e4, LayerName::Tropopause),
    AtmosphereLayer::new(20_000., 216.65, 1.0e-3, 5.474_87e3, LayerName::Stratosphere),
    AtmosphereLayer::new(32_000., 228.65, 2.8e-3, 8.680_14e2, LayerName::Stratosphere),
    AtmosphereLayer::new(47_000., 270.65, 0., 1.109_06e2, LayerName::Stratopause),
    AtmosphereLayer::new(51_000., 270.65, -2.8e-3, 6.693_84e1, LayerName::Mesosphere),
    AtmosphereLayer::new(71_000., 214.65, -2.0e-3, 3.956_39e0, LayerName::Mesosphere),
    AtmosphereLayer::new(80_000., 196.65, -2.0e-3, 8.862_72e-1, LayerName::Mesopause),
];
