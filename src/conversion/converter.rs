//! Unit conversion functions
//!
//! Maps units to their pairs and converts quantities between them.

use super::units::{Direction, Unit, UnitPair};

/// The unit that `unit` converts to (gal<->L, mi<->km, lbs<->kg)
pub fn get_return_unit(unit: Unit) -> Unit {
    let (pair, _) = UnitPair::lookup(unit);
    pair.other(unit)
}

/// Display string for a unit
///
/// Every supported unit is shown by its short token.
pub fn spell_out_unit(unit: Unit) -> &'static str {
    unit.as_str()
}

/// Convert a quantity in `unit` to the paired unit
///
/// No rounding is applied here.
pub fn convert(number: f64, unit: Unit) -> f64 {
    let (pair, direction) = UnitPair::lookup(unit);
    match direction {
        Direction::Forward => number * pair.factor,
        Direction::Reverse => number / pair.factor,
    }
}

/// Round to a fixed number of decimal places
///
/// Values too large to scale are returned as-is; they have no fractional
/// digits left to round.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.1;

    #[test]
    fn test_return_unit_for_each_unit() {
        let expected = [
            (Unit::Gal, Unit::L),
            (Unit::L, Unit::Gal),
            (Unit::Mi, Unit::Km),
            (Unit::Km, Unit::Mi),
            (Unit::Lbs, Unit::Kg),
            (Unit::Kg, Unit::Lbs),
        ];
        for (input, output) in expected {
            assert_eq!(get_return_unit(input), output);
        }
    }

    #[test]
    fn test_return_unit_is_involutive() {
        for unit in Unit::ALL {
            assert_eq!(get_return_unit(get_return_unit(unit)), unit);
        }
    }

    #[test]
    fn test_spell_out_unit() {
        let expected = ["gal", "L", "mi", "km", "lbs", "kg"];
        for (unit, spelled) in Unit::ALL.iter().zip(expected) {
            assert_eq!(spell_out_unit(*unit), spelled);
        }
    }

    #[test]
    fn test_convert_gal_to_l() {
        assert!((convert(2.0, Unit::Gal) - 7.57082).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_l_to_gal() {
        assert!((convert(2.0, Unit::L) - 0.52834).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_mi_to_km() {
        assert!((convert(2.0, Unit::Mi) - 3.21868).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_km_to_mi() {
        assert!((convert(2.0, Unit::Km) - 1.24275).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_lbs_to_kg() {
        assert!((convert(2.0, Unit::Lbs) - 0.90718).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_kg_to_lbs() {
        assert!((convert(2.0, Unit::Kg) - 4.40925).abs() < TOLERANCE);
    }

    #[test]
    fn test_convert_there_and_back() {
        for unit in Unit::ALL {
            for n in [0.0, 0.2, 1.0, 3.5, 1234.5678] {
                let back = convert(convert(n, unit), get_return_unit(unit));
                assert!((back - n).abs() < 1e-9, "{} {} came back as {}", n, unit, back);
            }
        }
    }

    #[test]
    fn test_convert_is_exact_to_five_places() {
        assert_eq!(round_to(convert(2.0, Unit::Gal), 5), 7.57082);
        assert_eq!(round_to(convert(2.0, Unit::Kg), 5), 4.40925);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234567, 5), 1.23457);
        assert_eq!(round_to(2.0, 5), 2.0);
        assert_eq!(round_to(0.000004, 5), 0.0);
    }

    #[test]
    fn test_round_to_huge_values_stay_finite() {
        let huge = convert(1e305, Unit::Gal);
        assert!(huge.is_finite());
        assert_eq!(round_to(huge, 5), huge);
        assert_eq!(round_to(f64::MAX, 5), f64::MAX);
        assert_eq!(round_to(-f64::MAX, 5), -f64::MAX);
    }
}
