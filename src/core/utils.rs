use crate::core::errors::{AccumulateCastError, RoundedCastError};
use num_traits::{FromPrimitive, ToPrimitive};
use std::any::type_name;

// Ties round away from zero: 1.5 -> 2, -1.5 -> -2.
pub(crate) fn round_half_away(value: f64) -> f64 {
    value.round()
}

pub(crate) fn cast_rounded<T>(value: f64) -> Result<T, RoundedCastError>
where
    T: FromPrimitive,
{
    T::from_f64(value).ok_or(RoundedCastError {
        value,
        dtype: type_name::<T>(),
    })
}

pub(crate) fn cast_f64<T>(value: T) -> Result<f64, AccumulateCastError>
where
    T: ToPrimitive,
{
    value.to_f64().ok_or(AccumulateCastError {
        dtype: type_name::<T>(),
    })
}
