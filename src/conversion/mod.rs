//! Unit conversion module
//!
//! Parses "2.5kg"-style input and converts between gal/L, mi/km and lbs/kg.

pub mod converter;
pub mod error;
pub mod parser;
pub mod units;

pub use converter::{convert, get_return_unit, round_to, spell_out_unit};
pub use error::{ConversionError, ConversionResult};
pub use parser::{get_num, get_unit, parse_input, ParsedInput};
pub use units::{Direction, Unit, UnitCategory, UnitPair, CONVERSION_TABLE};
