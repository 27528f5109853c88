//! Conversion MCP Tools
//!
//! Turns raw input into a full conversion response and lists the unit table.

use serde::Serialize;

use crate::conversion::{
    convert, get_return_unit, parse_input, round_to, spell_out_unit, ConversionError,
    ConversionResult, Direction, Unit, UnitCategory, UnitPair,
};

/// Decimal places kept in `return_num`
pub const RETURN_PRECISION: i32 = 5;

/// Response for convert
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversion {
    pub init_num: f64,
    pub init_unit: Unit,
    pub return_num: f64,
    pub return_unit: Unit,
    pub string: String,
}

/// Parse and convert one input string
///
/// When both the number and the unit are bad the error names both.
pub fn convert_input(input: &str) -> ConversionResult<Conversion> {
    let parsed = parse_input(input);

    let (init_num, init_unit) = match (parsed.number, parsed.unit) {
        (Ok(n), Ok(u)) => (n, u),
        (Err(_), Err(_)) => return Err(ConversionError::InvalidNumberAndUnit),
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => return Err(e),
    };

    let return_num = round_to(convert(init_num, init_unit), RETURN_PRECISION);
    let return_unit = get_return_unit(init_unit);

    let string = format!(
        "{} {} converts to {} {}",
        init_num,
        spell_out_unit(init_unit),
        return_num,
        spell_out_unit(return_unit)
    );

    tracing::debug!("Converted '{}': {}", input, string);

    Ok(Conversion {
        init_num,
        init_unit,
        return_num,
        return_unit,
        string,
    })
}

/// One row of list_units
#[derive(Debug, Clone, Serialize)]
pub struct UnitInfo {
    pub unit: Unit,
    pub category: UnitCategory,
    pub paired_unit: Unit,
    pub factor: f64,
    pub direction: Direction,
}

/// Every supported unit with its pair and factor
pub fn list_units() -> Vec<UnitInfo> {
    Unit::ALL
        .iter()
        .map(|&unit| {
            let (pair, direction) = UnitPair::lookup(unit);
            UnitInfo {
                unit,
                category: unit.category(),
                paired_unit: pair.other(unit),
                factor: pair.factor,
                direction,
            }
        })
        .collect()
}
