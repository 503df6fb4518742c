use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Declared byte sizes travel as decimal strings
    /// - Valid: "0", "12", "1048576"
    /// - Invalid: "", "-1", "1.5", "12 ", "0x10", "1e3"
    pub static ref NUMERIC_STRING_REGEX: Regex = Regex::new(r"^[0-9]+$").unwrap();
}
