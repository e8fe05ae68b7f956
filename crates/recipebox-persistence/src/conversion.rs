//! Table-driven unit conversion

use std::collections::HashMap;

use recipebox_domain::{Unit, UnitConverter};

/// `UnitConverter` backed by a table of directed `(from, to)` ratios
///
/// Only listed pairs convert. Reverse pairs and `unit -> unit` have to be
/// listed explicitly; nothing is inferred by chaining.
#[derive(Debug, Clone, Default)]
pub struct TableUnitConverter {
    ratios: HashMap<(Unit, Unit), f64>,
}

impl TableUnitConverter {
    /// Empty table; every lookup fails
    pub fn new() -> Self {
        Self::default()
    }

    /// The small demo table: grams/kg, grams/lbs, ml/l and ml/cups, both ways
    pub fn demo() -> Self {
        Self::new()
            .with_ratio(Unit::Grams, Unit::Pounds, 0.00220462)
            .with_ratio(Unit::Pounds, Unit::Grams, 453.59237)
            .with_ratio(Unit::Grams, Unit::Kilograms, 0.001)
            .with_ratio(Unit::Kilograms, Unit::Grams, 1000.0)
            .with_ratio(Unit::Milliliters, Unit::Cups, 0.00422675)
            .with_ratio(Unit::Cups, Unit::Milliliters, 236.588236)
            .with_ratio(Unit::Milliliters, Unit::Liters, 0.001)
            .with_ratio(Unit::Liters, Unit::Milliliters, 1000.0)
    }

    /// Add or replace the ratio for one direction
    pub fn with_ratio(mut self, from: Unit, to: Unit, ratio: f64) -> Self {
        self.ratios.insert((from, to), ratio);
        self
    }

    pub fn len(&self) -> usize {
        self.ratios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratios.is_empty()
    }
}

impl UnitConverter for TableUnitConverter {
    fn conversion_ratio(&self, from: Unit, to: Unit) -> Option<f64> {
        self.ratios.get(&(from, to)).copied()
    }
}
