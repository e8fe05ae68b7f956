//! Measured amounts

use std::fmt;

use serde::Serialize;

use crate::errors::{DomainError, DomainResult};
use crate::services::UnitConverter;

use super::Unit;

/// An amount in a given unit; the value is finite and never negative
///
/// Equality is by `(unit, value)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    unit: Unit,
    value: f64,
}

impl Quantity {
    pub fn new(unit: Unit, value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(
                "quantity",
                format!("Quantity requires a non-negative value, got {}", value),
            ));
        }
        Ok(Self { unit, value })
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Scale by a non-negative factor, keeping the unit
    pub fn scale_by(&self, ratio: f64) -> DomainResult<Self> {
        if ratio.is_nan() || ratio < 0.0 {
            return Err(DomainError::validation(
                "ratio",
                format!("Quantity can only be scaled by a non-negative ratio, got {}", ratio),
            ));
        }
        Self::new(self.unit, self.value * ratio)
    }

    /// Convert into `new_unit` using the ratio the converter knows for the pair
    pub fn convert_to<C>(&self, new_unit: Unit, converter: &C) -> DomainResult<Self>
    where
        C: UnitConverter + ?Sized,
    {
        let ratio = converter
            .conversion_ratio(self.unit, new_unit)
            .ok_or(DomainError::ConversionUnavailable {
                from: self.unit,
                to: new_unit,
            })?;
        Self::new(new_unit, self.value * ratio)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LitersToMilliliters;

    impl UnitConverter for LitersToMilliliters {
        fn conversion_ratio(&self, from: Unit, to: Unit) -> Option<f64> {
            (from == Unit::Liters && to == Unit::Milliliters).then_some(1000.0)
        }
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(Quantity::new(Unit::Grams, -0.5).is_err());
        assert!(Quantity::new(Unit::Grams, f64::NAN).is_err());
        assert!(Quantity::new(Unit::Grams, f64::INFINITY).is_err());
        assert!(Quantity::new(Unit::Grams, 0.0).is_ok());
    }

    #[test]
    fn test_scale_by() {
        let q = Quantity::new(Unit::Grams, 100.0).unwrap();
        let scaled = q.scale_by(3.0).unwrap();
        assert_eq!(scaled.value(), 300.0);
        assert_eq!(scaled.unit(), Unit::Grams);
    }

    #[test]
    fn test_scale_by_negative_fails_and_keeps_original() {
        let q = Quantity::new(Unit::Cups, 2.0).unwrap();
        let err = q.scale_by(-1.0).unwrap_err();
        assert_eq!(err.field(), "ratio");
        assert_eq!(q, Quantity::new(Unit::Cups, 2.0).unwrap());
    }

    #[test]
    fn test_convert_liters_to_milliliters() {
        let q = Quantity::new(Unit::Liters, 5.0).unwrap();
        let converted = q.convert_to(Unit::Milliliters, &LitersToMilliliters).unwrap();
        assert_eq!(converted.unit(), Unit::Milliliters);
        assert_eq!(converted.value(), 5000.0);
    }

    #[test]
    fn test_convert_unknown_pair_fails() {
        let q = Quantity::new(Unit::Pieces, 3.0).unwrap();
        let err = q.convert_to(Unit::Grams, &LitersToMilliliters).unwrap_err();
        assert_eq!(
            err,
            DomainError::ConversionUnavailable {
                from: Unit::Pieces,
                to: Unit::Grams
            }
        );
    }

    #[test]
    fn test_equality_is_by_unit_and_value() {
        let a = Quantity::new(Unit::Kilograms, 1.0).unwrap();
        assert_eq!(a, Quantity::new(Unit::Kilograms, 1.0).unwrap());
        assert_ne!(a, Quantity::new(Unit::Grams, 1.0).unwrap());
        assert_ne!(a, Quantity::new(Unit::Kilograms, 1.5).unwrap());
    }
}
