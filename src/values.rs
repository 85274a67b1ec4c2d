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
use absolute_unit::supports_value_type_conversion;
use std::{ops::Index, slice};

/// A scalar or an ordered sequence, so that results can be handed back in the
/// same shape the caller supplied.
#[derive(Clone, Debug, PartialEq)]
pub enum Values<T = f64> {
    Scalar(T),
    Sequence(Vec<T>),
}

impl<T> Values<T> {
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            Self::Scalar(v) => slice::from_ref(v),
            Self::Sequence(vs) => vs,
        }
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Scalar(v) => vec![v],
            Self::Sequence(vs) => vs,
        }
    }

    /// Re-wrap `values` as a scalar when the source was a scalar.
    pub(crate) fn shaped(scalar: bool, mut values: Vec<T>) -> Self {
        if scalar && values.len() == 1 {
            if let Some(v) = values.pop() {
                return Self::Scalar(v);
            }
        }
        Self::Sequence(values)
    }
}

impl<T: Copy> Values<T> {
    /// The value, if this is a scalar.
    pub fn scalar(&self) -> Option<T> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Sequence(_) => None,
        }
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Apply `f` elementwise, keeping shape and order.
    pub fn map<U, F>(&self, f: F) -> Values<U>
    where
        F: Fn(T) -> U,
    {
        match self {
            Self::Scalar(v) => Values::Scalar(f(*v)),
            Self::Sequence(vs) => Values::Sequence(vs.iter().copied().map(f).collect()),
        }
    }
}

impl<T> Index<usize> for Values<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl PartialEq<f64> for Values<f64> {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Self::Scalar(v) if v == other)
    }
}

macro_rules! impl_values_for_numeric_type {
    ($Num:ty) => {
        impl From<$Num> for Values {
            fn from(v: $Num) -> Self {
                Self::Scalar(v as f64)
            }
        }

        impl From<Vec<$Num>> for Values {
            fn from(vs: Vec<$Num>) -> Self {
                Self::Sequence(vs.into_iter().map(|v| v as f64).collect())
            }
        }

        impl From<&Vec<$Num>> for Values {
            fn from(vs: &Vec<$Num>) -> Self {
                Self::from(vs.as_slice())
            }
        }

        impl From<&[$Num]> for Values {
            fn from(vs: &[$Num]) -> Self {
                Self::Sequence(vs.iter().map(|v| *v as f64).collect())
            }
        }

        impl<const N: usize> From<[$Num; N]> for Values {
            fn from(vs: [$Num; N]) -> Self {
                Self::from(&vs[..])
            }
        }
    };
}
supports_value_type_conversion!(impl_values_for_numeric_type);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shape_is_kept() {
        let v = Values::from(3.);
        assert!(v.is_scalar());
        assert_eq!(v.map(|x| x * 2.), 6.);

        let vs = Values::from([1., 2., 3.]);
        assert!(!vs.is_scalar());
        assert_eq!(vs.map(|x| x * 2.), Values::Sequence(vec![2., 4., 6.]));
        assert_eq!(vs[2], 3.);
    }

    #[test]
    fn test_single_element_sequence_stays_a_sequence() {
        let vs = Values::from(vec![5.]);
        assert_eq!(vs.len(), 1);
        assert_eq!(vs.scalar(), None);
        assert_eq!(Values::shaped(false, vec![5.]), vs);
        assert_eq!(Values::shaped(true, vec![5.]), Values::Scalar(5.));
    }

    #[test]
    fn test_empty_sequence() {
        let vs = Values::from(Vec::<f64>::new());
        assert!(vs.is_empty());
        assert_eq!(vs.into_vec(), Vec::<f64>::new());
    }

    #[test]
    fn test_integer_inputs_become_heights() {
        assert_eq!(Values::from(11_000), 11_000.);
        assert_eq!(
            Values::from(vec![0, 11_000]),
            Values::Sequence(vec![0., 11_000.])
        );
        assert_eq!(
            Values::from([-5_004_i64, 81_020]),
            Values::Sequence(vec![-5_004., 81_020.])
        );
        let small: &[i16] = &[1, 2, 3];
        assert_eq!(Values::from(small).to_vec(), vec![1., 2., 3.]);
    }
}
