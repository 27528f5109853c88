//! Unit types and conversion constants
//!
//! The six supported units, their categories, and the fixed pair table.

use std::fmt;

use serde::Serialize;

/// A supported measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// US gallon
    Gal,
    /// Liter, always rendered uppercase
    #[serde(rename = "L")]
    L,
    /// Mile
    Mi,
    /// Kilometer
    Km,
    /// Pound
    Lbs,
    /// Kilogram
    Kg,
}

impl Unit {
    /// All supported units, in table order
    pub const ALL: [Unit; 6] = [Unit::Gal, Unit::L, Unit::Mi, Unit::Km, Unit::Lbs, Unit::Kg];

    /// Canonical token for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Gal => "gal",
            Unit::L => "L",
            Unit::Mi => "mi",
            Unit::Km => "km",
            Unit::Lbs => "lbs",
            Unit::Kg => "kg",
        }
    }

    /// Match a token case-insensitively against the supported units
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "gal" => Some(Unit::Gal),
            "l" => Some(Unit::L),
            "mi" => Some(Unit::Mi),
            "km" => Some(Unit::Km),
            "lbs" => Some(Unit::Lbs),
            "kg" => Some(Unit::Kg),
            _ => None,
        }
    }

    pub fn category(&self) -> UnitCategory {
        match self {
            Unit::Gal | Unit::L => UnitCategory::Volume,
            Unit::Mi | Unit::Km => UnitCategory::Distance,
            Unit::Lbs | Unit::Kg => UnitCategory::Mass,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a unit measures; each category holds exactly one pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    Volume,
    Distance,
    Mass,
}

/// Which way a conversion runs through its pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `from` to `to`: multiply by the factor
    Forward,
    /// `to` to `from`: divide by the factor
    Reverse,
}

/// Two paired units and the single factor between them
///
/// `1 from == factor to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitPair {
    pub from: Unit,
    pub to: Unit,
    pub factor: f64,
}

impl UnitPair {
    /// The pair that contains `unit`, and the direction `unit` converts in
    pub fn lookup(unit: Unit) -> (&'static UnitPair, Direction) {
        let pair = match unit.category() {
            UnitCategory::Volume => &CONVERSION_TABLE[0],
            UnitCategory::Distance => &CONVERSION_TABLE[1],
            UnitCategory::Mass => &CONVERSION_TABLE[2],
        };
        let direction = if pair.from == unit {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        (pair, direction)
    }

    /// The member of this pair opposite `unit`
    pub fn other(&self, unit: Unit) -> Unit {
        if unit == self.from {
            self.to
        } else {
            self.from
        }
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Liters per US gallon
pub const L_PER_GAL: f64 = 3.78541;
/// Kilometers per mile
pub const KM_PER_MI: f64 = 1.60934;
/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;

/// One entry per category, indexed in `UnitPair::lookup`
pub const CONVERSION_TABLE: [UnitPair; 3] = [
    UnitPair {
        from: Unit::Gal,
        to: Unit::L,
        factor: L_PER_GAL,
    },
    UnitPair {
        from: Unit::Mi,
        to: Unit::Km,
        factor: KM_PER_MI,
    },
    UnitPair {
        from: Unit::Lbs,
        to: Unit::Kg,
        factor: KG_PER_LB,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_case_insensitive() {
        assert_eq!(Unit::from_token("gal"), Some(Unit::Gal));
        assert_eq!(Unit::from_token("GAL"), Some(Unit::Gal));
        assert_eq!(Unit::from_token("l"), Some(Unit::L));
        assert_eq!(Unit::from_token("L"), Some(Unit::L));
        assert_eq!(Unit::from_token("Km"), Some(Unit::Km));
        assert_eq!(Unit::from_token("LBS"), Some(Unit::Lbs));
        assert_eq!(Unit::from_token("lb"), None);
        assert_eq!(Unit::from_token(""), None);
    }

    #[test]
    fn test_tokens_round_trip_through_from_token() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_token(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_liter_rendered_uppercase() {
        assert_eq!(Unit::L.as_str(), "L");
        assert_eq!(Unit::L.to_string(), "L");
        assert_eq!(serde_json::to_string(&Unit::L).unwrap(), "\"L\"");
        assert_eq!(serde_json::to_string(&Unit::Lbs).unwrap(), "\"lbs\"");
    }

    #[test]
    fn test_serialized_tokens_match_as_str() {
        for unit in Unit::ALL {
            let json = serde_json::to_value(unit).unwrap();
            assert_eq!(json, unit.as_str());
        }
        assert_eq!(serde_json::to_value(UnitCategory::Distance).unwrap(), "distance");
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let (pair, dir) = UnitPair::lookup(Unit::Gal);
        assert_eq!(pair.to, Unit::L);
        assert_eq!(dir, Direction::Forward);

        let (pair, dir) = UnitPair::lookup(Unit::L);
        assert_eq!(pair.from, Unit::Gal);
        assert_eq!(dir, Direction::Reverse);

        let (pair, dir) = UnitPair::lookup(Unit::Kg);
        assert_eq!(pair.factor, KG_PER_LB);
        assert_eq!(dir, Direction::Reverse);
    }

    #[test]
    fn test_every_unit_in_exactly_one_pair() {
        for unit in Unit::ALL {
            let hits = CONVERSION_TABLE
                .iter()
                .filter(|p| p.from == unit || p.to == unit)
                .count();
            assert_eq!(hits, 1, "{} should appear once", unit);
        }
    }

    #[test]
    fn test_table_matches_categories() {
        for pair in CONVERSION_TABLE.iter() {
            assert_eq!(pair.from.category(), pair.to.category());
            assert_eq!(UnitPair::lookup(pair.from).0, pair);
        }
    }
}
