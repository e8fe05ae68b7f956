//! Domain services - capabilities the domain depends on but does not implement
//!
//! Conversion tables are infrastructure knowledge: a `Quantity` only asks
//! "what is the ratio from this unit to that one", and the answer may come
//! from a static table, a database or a remote service.

use crate::value_objects::Unit;

/// Unit conversion capability
///
/// Pure lookup with no side effects. Only direct pairs are answered: no
/// chaining through intermediate units, and `unit -> unit` is unknown unless
/// an implementation lists it explicitly.
pub trait UnitConverter: Send + Sync {
    /// Ratio to multiply a value in `from` by to express it in `to`,
    /// or `None` when the pair is not convertible
    fn conversion_ratio(&self, from: Unit, to: Unit) -> Option<f64>;

    /// Whether a direct ratio exists for the pair
    fn can_convert(&self, from: Unit, to: Unit) -> bool {
        self.conversion_ratio(from, to).is_some()
    }
}
