use std::fmt;
use std::num::IntErrorKind;
use thiserror::Error;

pub const MIN_ATOMIC_NUMBER: u32 = 1;
pub const MAX_ATOMIC_NUMBER: u32 = 200;
pub const MIN_MASS: f64 = 0.0;
pub const MAX_MASS: f64 = 500.0;

const MAX_SYMBOL_LEN: usize = 2;
const MAX_REPLACEMENT_SYMBOL_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    #[error("unexpected non-lowercase character in element name: '{0}'")]
    InvalidName(String),

    #[error("unexpected non-letter character in element symbol: '{0}'")]
    InvalidSymbol(String),

    #[error("unexpected length of element symbol (must be 1 or 2, found {len}): '{symbol}'")]
    SymbolLength { symbol: String, len: usize },

    #[error("atomic number is not an integer: '{0}'")]
    InvalidAtomicNumber(String),

    #[error("unexpected atomic number (must be within [1, 200]): {0}")]
    AtomicNumberOutOfRange(String),

    #[error("default mass is not a number: '{0}'")]
    InvalidMass(String),

    #[error("unexpected default mass (must be within [0, 500]): {0}")]
    MassOutOfRange(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReplacementError {
    #[error("unexpected non-alphanumeric character in isotopic replacement symbol: '{0}'")]
    InvalidSymbol(String),

    #[error(
        "unexpected length of isotopic replacement symbol (must be 1-4 inclusive, found {len}): '{symbol}'"
    )]
    SymbolLength { symbol: String, len: usize },

    #[error("isotopic replacement symbol is already used by this element: '{0}'")]
    DuplicateSymbol(String),

    #[error("isotopic replacement mass is not a number: '{0}'")]
    InvalidMass(String),

    #[error("unexpected isotopic replacement mass (must be within [0, 500]): {0}")]
    MassOutOfRange(f64),
}

/// A named mass variant of an element, such as `2H` for deuterium.
#[derive(Debug, Clone, PartialEq)]
pub struct Replacement {
    pub symbol: String,
    pub mass: f64,
}

/// One validated entry of the atomic weight table.
///
/// The only way to obtain an `Element` is [`Element::new`] (or
/// [`Element::from_fields`]), so every instance has passed the name, symbol,
/// atomic number and default mass checks. After construction the element can
/// only grow by appending isotopic replacements.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    full_name: String,
    symbol: String,
    atomic_number: u32,
    default_mass: f64,
    replacements: Vec<Replacement>,
}

impl Element {
    /// Validates the four leading fields of a record and builds an element
    /// with no replacements.
    ///
    /// Checks run in order (name, symbol, atomic number, default mass) and
    /// the first failing one is reported. Text fields are taken verbatim, so
    /// surrounding whitespace fails them; numeric fields tolerate it.
    pub fn new(
        full_name: &str,
        atomic_number: &str,
        symbol: &str,
        default_mass: &str,
    ) -> Result<Self, ElementError> {
        if full_name.is_empty() || !full_name.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ElementError::InvalidName(full_name.to_string()));
        }

        if !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ElementError::InvalidSymbol(symbol.to_string()));
        }
        let len = symbol.chars().count();
        if !(1..=MAX_SYMBOL_LEN).contains(&len) {
            return Err(ElementError::SymbolLength {
                symbol: symbol.to_string(),
                len,
            });
        }

        let number = atomic_number
            .trim()
            .parse::<i64>()
            .map_err(|e| match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ElementError::AtomicNumberOutOfRange(atomic_number.to_string())
                }
                _ => ElementError::InvalidAtomicNumber(atomic_number.to_string()),
            })?;
        if !(i64::from(MIN_ATOMIC_NUMBER)..=i64::from(MAX_ATOMIC_NUMBER)).contains(&number) {
            return Err(ElementError::AtomicNumberOutOfRange(atomic_number.to_string()));
        }

        let mass = default_mass
            .trim()
            .parse::<f64>()
            .map_err(|_| ElementError::InvalidMass(default_mass.to_string()))?;
        if !mass_in_range(mass) {
            return Err(ElementError::MassOutOfRange(mass));
        }

        Ok(Self {
            full_name: full_name.to_string(),
            symbol: symbol.to_string(),
            atomic_number: number as u32,
            default_mass: mass,
            replacements: Vec::new(),
        })
    }

    /// Builds an element from a parsed record: the first four fields go to
    /// [`Element::new`], every following pair to [`Element::add_replacement`].
    ///
    /// The record parser already enforces at least four fields and an even
    /// tail. A dangling trailing field is ignored here.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<Self, FieldError> {
        let [name, number, symbol, mass, rest @ ..] = fields else {
            return Err(FieldError::MissingFields(fields.len()));
        };

        let mut element = Self::new(name.as_ref(), number.as_ref(), symbol.as_ref(), mass.as_ref())?;
        for pair in rest.chunks_exact(2) {
            element.add_replacement(pair[0].as_ref(), pair[1].as_ref())?;
        }
        Ok(element)
    }

    /// Appends a validated isotopic replacement.
    ///
    /// Symbol uniqueness is only checked against this element's own list;
    /// other elements may reuse the same symbol.
    pub fn add_replacement(&mut self, symbol: &str, mass: &str) -> Result<(), ReplacementError> {
        if !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ReplacementError::InvalidSymbol(symbol.to_string()));
        }
        let len = symbol.chars().count();
        if !(1..=MAX_REPLACEMENT_SYMBOL_LEN).contains(&len) {
            return Err(ReplacementError::SymbolLength {
                symbol: symbol.to_string(),
                len,
            });
        }
        if self.replacements.iter().any(|r| r.symbol == symbol) {
            return Err(ReplacementError::DuplicateSymbol(symbol.to_string()));
        }

        let mass = mass
            .trim()
            .parse::<f64>()
            .map_err(|_| ReplacementError::InvalidMass(mass.to_string()))?;
        if !mass_in_range(mass) {
            return Err(ReplacementError::MassOutOfRange(mass));
        }

        self.replacements.push(Replacement {
            symbol: symbol.to_string(),
            mass,
        });
        Ok(())
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    #[inline]
    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    #[inline]
    pub fn default_mass(&self) -> f64 {
        self.default_mass
    }

    pub fn replacements(&self) -> &[Replacement] {
        &self.replacements
    }

    pub fn replacement(&self, symbol: &str) -> Option<&Replacement> {
        self.replacements.iter().find(|r| r.symbol == symbol)
    }

    /// The full name with its first letter uppercased, e.g. `"Hydrogen"`.
    pub fn display_name(&self) -> String {
        let mut chars = self.full_name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// A record whose fields failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("expected at least 4 fields, found {0}")]
    MissingFields(usize),
    #[error(transparent)]
    Element(#[from] ElementError),
    #[error(transparent)]
    Replacement(#[from] ReplacementError),
}

fn mass_in_range(mass: f64) -> bool {
    (MIN_MASS..=MAX_MASS).contains(&mass)
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, Z={}, default mass = {:.4}",
            self.display_name(),
            self.symbol,
            self.atomic_number,
            self.default_mass
        )?;
        if self.replacements.is_empty() {
            return f.write_str(", no isotopic replacements possible)");
        }
        f.write_str(")")?;
        for r in &self.replacements {
            write!(f, "\n    {:>2} : {:.4}", r.symbol, r.mass)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn hydrogen() -> Element {
        Element::new("hydrogen", "1", "H", "1.00783").unwrap()
    }

    #[test]
    fn new_valid_element() {
        let h = hydrogen();
        assert_eq!(h.full_name(), "hydrogen");
        assert_eq!(h.symbol(), "H");
        assert_eq!(h.atomic_number(), 1);
        assert!(approx_eq(h.default_mass(), 1.00783, 1e-12));
        assert!(h.replacements().is_empty());
    }

    #[test]
    fn name_rejects_uppercase_digits_and_symbols() {
        for name in ["Hydrogen", "hydrogeN", "hydrogen1", "hydro-gen", "hydro gen", ""] {
            let err = Element::new(name, "1", "H", "1.0").unwrap_err();
            assert_eq!(err, ElementError::InvalidName(name.to_string()), "name {name:?}");
        }
    }

    #[test]
    fn name_is_checked_before_other_fields() {
        let err = Element::new("Bad", "999", "XYZ", "-5").unwrap_err();
        assert!(matches!(err, ElementError::InvalidName(_)));
    }

    #[test]
    fn symbol_rejects_digits_and_bad_length() {
        assert_eq!(
            Element::new("hydrogen", "1", "H1", "1.0").unwrap_err(),
            ElementError::InvalidSymbol("H1".to_string())
        );
        assert_eq!(
            Element::new("hydrogen", "1", "", "1.0").unwrap_err(),
            ElementError::SymbolLength {
                symbol: String::new(),
                len: 0
            }
        );
        assert_eq!(
            Element::new("hydrogen", "1", "Hyd", "1.0").unwrap_err(),
            ElementError::SymbolLength {
                symbol: "Hyd".to_string(),
                len: 3
            }
        );
    }

    #[test]
    fn symbol_accepts_either_case() {
        assert!(Element::new("helium", "2", "he", "4.0").is_ok());
        assert!(Element::new("helium", "2", "HE", "4.0").is_ok());
    }

    #[test]
    fn atomic_number_bounds_and_format() {
        assert_eq!(
            Element::new("x", "0", "X", "1.0").unwrap_err(),
            ElementError::AtomicNumberOutOfRange("0".to_string())
        );
        assert_eq!(
            Element::new("x", "201", "X", "1.0").unwrap_err(),
            ElementError::AtomicNumberOutOfRange("201".to_string())
        );
        assert_eq!(
            Element::new("x", "1.5", "X", "1.0").unwrap_err(),
            ElementError::InvalidAtomicNumber("1.5".to_string())
        );
        assert_eq!(
            Element::new("x", "one", "X", "1.0").unwrap_err(),
            ElementError::InvalidAtomicNumber("one".to_string())
        );
        assert_eq!(Element::new("x", "1", "X", "1.0").unwrap().atomic_number(), 1);
        assert_eq!(Element::new("x", "200", "X", "1.0").unwrap().atomic_number(), 200);
    }

    #[test]
    fn atomic_number_overflow_is_out_of_range() {
        assert_eq!(
            Element::new("x", "99999999999999999999", "X", "1.0").unwrap_err(),
            ElementError::AtomicNumberOutOfRange("99999999999999999999".to_string())
        );
        assert_eq!(
            Element::new("x", "-99999999999999999999", "X", "1.0").unwrap_err(),
            ElementError::AtomicNumberOutOfRange("-99999999999999999999".to_string())
        );
    }

    #[test]
    fn text_fields_reject_surrounding_whitespace() {
        assert_eq!(
            Element::new("hydrogen ", "1", "H", "1.0").unwrap_err(),
            ElementError::InvalidName("hydrogen ".to_string())
        );
        assert_eq!(
            Element::new("hydrogen", "1", " H", "1.0").unwrap_err(),
            ElementError::InvalidSymbol(" H".to_string())
        );
        let mut h = hydrogen();
        assert_eq!(
            h.add_replacement(" 2H ", "2.0").unwrap_err(),
            ReplacementError::InvalidSymbol(" 2H ".to_string())
        );
    }

    #[test]
    fn numeric_fields_tolerate_surrounding_whitespace() {
        let mut h = Element::new("hydrogen", " 1 ", "H", " 1.00783 ").unwrap();
        assert_eq!(h.atomic_number(), 1);
        assert!(approx_eq(h.default_mass(), 1.00783, 1e-12));
        h.add_replacement("2H", " 2.0141").unwrap();
        assert!(approx_eq(h.replacement("2H").unwrap().mass, 2.0141, 1e-12));
    }

    #[test]
    fn default_mass_bounds_are_inclusive() {
        assert_eq!(
            Element::new("x", "1", "X", "-1.0").unwrap_err(),
            ElementError::MassOutOfRange(-1.0)
        );
        assert_eq!(
            Element::new("x", "1", "X", "501.0").unwrap_err(),
            ElementError::MassOutOfRange(501.0)
        );
        assert!(Element::new("x", "1", "X", "0.0").is_ok());
        assert!(Element::new("x", "1", "X", "500.0").is_ok());
        assert_eq!(
            Element::new("x", "1", "X", "heavy").unwrap_err(),
            ElementError::InvalidMass("heavy".to_string())
        );
    }

    #[test]
    fn default_mass_rejects_nan() {
        let err = Element::new("x", "1", "X", "NaN").unwrap_err();
        assert!(matches!(err, ElementError::MassOutOfRange(m) if m.is_nan()));
    }

    #[test]
    fn add_replacement_appends_in_order() {
        let mut h = hydrogen();
        h.add_replacement("2H", "2.0141").unwrap();
        h.add_replacement("3H", "3.0160").unwrap();

        let symbols: Vec<_> = h.replacements().iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["2H", "3H"]);
        assert!(approx_eq(h.replacement("3H").unwrap().mass, 3.0160, 1e-12));
    }

    #[test]
    fn add_replacement_rejects_duplicate_on_same_element() {
        let mut h = hydrogen();
        h.add_replacement("2H", "2.0141").unwrap();
        assert_eq!(
            h.add_replacement("2H", "2.5").unwrap_err(),
            ReplacementError::DuplicateSymbol("2H".to_string())
        );
        assert_eq!(h.replacements().len(), 1);
    }

    #[test]
    fn add_replacement_allows_same_symbol_on_different_elements() {
        let mut h = hydrogen();
        let mut he = Element::new("helium", "2", "He", "4.0026").unwrap();
        assert!(h.add_replacement("X1", "2.0").is_ok());
        assert!(he.add_replacement("X1", "3.0").is_ok());
    }

    #[test]
    fn add_replacement_symbol_rules() {
        let mut h = hydrogen();
        assert_eq!(
            h.add_replacement("2-H", "2.0").unwrap_err(),
            ReplacementError::InvalidSymbol("2-H".to_string())
        );
        assert_eq!(
            h.add_replacement("", "2.0").unwrap_err(),
            ReplacementError::SymbolLength {
                symbol: String::new(),
                len: 0
            }
        );
        assert_eq!(
            h.add_replacement("123Hx", "2.0").unwrap_err(),
            ReplacementError::SymbolLength {
                symbol: "123Hx".to_string(),
                len: 5
            }
        );
        assert!(h.add_replacement("D", "2.0141").is_ok());
        assert!(h.add_replacement("200H", "2.0141").is_ok());
    }

    #[test]
    fn add_replacement_mass_rules() {
        let mut h = hydrogen();
        assert_eq!(
            h.add_replacement("2H", "500.5").unwrap_err(),
            ReplacementError::MassOutOfRange(500.5)
        );
        assert_eq!(
            h.add_replacement("2H", "abc").unwrap_err(),
            ReplacementError::InvalidMass("abc".to_string())
        );
        assert!(h.replacements().is_empty());
        assert!(h.add_replacement("2H", "0").is_ok());
        assert!(h.add_replacement("3H", "500").is_ok());
    }

    #[test]
    fn from_fields_builds_element_with_replacements() {
        let fields = ["hydrogen", "1", "H", "1.00783", "2H", "2.0141", "3H", "3.0160"];
        let h = Element::from_fields(&fields).unwrap();
        assert_eq!(
            h.replacements(),
            &[
                Replacement {
                    symbol: "2H".to_string(),
                    mass: 2.0141
                },
                Replacement {
                    symbol: "3H".to_string(),
                    mass: 3.0160
                },
            ]
        );
    }

    #[test]
    fn from_fields_reports_which_half_failed() {
        let bad_element = Element::from_fields(&["hydrogen", "0", "H", "1.0"]).unwrap_err();
        assert!(matches!(
            bad_element,
            FieldError::Element(ElementError::AtomicNumberOutOfRange(ref n)) if n == "0"
        ));

        let bad_replacement =
            Element::from_fields(&["hydrogen", "1", "H", "1.0", "2H", "2.0", "2H", "2.1"])
                .unwrap_err();
        assert!(matches!(
            bad_replacement,
            FieldError::Replacement(ReplacementError::DuplicateSymbol(_))
        ));
    }

    #[test]
    fn from_fields_requires_four_fields() {
        assert_eq!(
            Element::from_fields(&["hydrogen", "1", "H"]).unwrap_err(),
            FieldError::MissingFields(3)
        );
    }

    #[test]
    fn display_with_replacements() {
        let h = Element::from_fields(&["hydrogen", "1", "H", "1.00783", "2H", "2.0141", "D", "2.0141"])
            .unwrap();
        assert_eq!(
            h.to_string(),
            "Hydrogen (H, Z=1, default mass = 1.0078)\n    2H : 2.0141\n     D : 2.0141"
        );
    }

    #[test]
    fn display_without_replacements() {
        let he = Element::new("helium", "2", "He", "4.00260").unwrap();
        assert_eq!(
            he.to_string(),
            "Helium (He, Z=2, default mass = 4.0026, no isotopic replacements possible)"
        );
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = Element::new("Iron", "26", "Fe", "55.9").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected non-lowercase character in element name: 'Iron'"
        );
    }
}
