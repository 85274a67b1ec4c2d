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

//! Properties of the ICAO Standard Atmosphere (Doc 7488/3) between
//! -5 004 m and 81 020 m geometric height.
//!
//! ```
//! use standard_atmosphere::Atmosphere;
//!
//! let sea_level = Atmosphere::new(0.).unwrap();
//! assert_eq!(sea_level.temperature(), 288.15);
//!
//! let climb = Atmosphere::new([0., 5_000., 11_000.]).unwrap();
//! assert_eq!(climb.density().len(), 3);
//! ```
pub mod atmosphere;
pub mod error;
pub mod geopotential;
pub mod heights;
pub mod inverse;
pub mod layer;
pub mod properties;
pub mod temperature;
pub mod values;

pub use crate::{
    atmosphere::Atmosphere,
    error::{AtmosphereError, ErrorKind},
    heights::Heights,
    properties::AirState,
    temperature::{celsius_to_kelvin, kelvin_to_celsius},
    values::Values,
};
pub use physical_constants::{
    self as constants, AtmosphereLayer, LayerName, MAX_HEIGHT_M, MIN_HEIGHT_M,
};

use rayon::prelude::*;

/// Inputs shorter than this are evaluated on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 4_096;

/// Elementwise map that fans out over the rayon pool for long inputs. Output
/// order always matches input order.
pub(crate) fn map_elements<S, T, F>(items: &[S], f: F) -> Vec<T>
where
    S: Copy + Send + Sync,
    T: Send,
    F: Fn(S) -> T + Send + Sync,
{
    if items.len() < PARALLEL_THRESHOLD {
        items.iter().copied().map(f).collect()
    } else {
        items.par_iter().copied().map(f).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_map_elements_keeps_order() {
        let n = PARALLEL_THRESHOLD * 3 + 7;
        let items = (0..n).map(|i| i as f64).rev().collect::<Vec<_>>();
        let doubled = map_elements(&items, |v| v * 2.);
        assert_eq!(doubled.len(), n);
        for (v, d) in items.iter().zip(doubled.iter()) {
            assert_eq!(*d, v * 2.);
        }
    }
}
