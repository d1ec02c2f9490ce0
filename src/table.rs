//! Aggregated lookup tables built from a list of validated elements.

use crate::io::{self, Error};
use crate::model::element::Element;
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;
use tracing::info;

const BUNDLED_WEIGHTS: &str = include_str!("../resources/weights.dat");

static BUNDLED: OnceLock<AtomicWeights> = OnceLock::new();

/// Read-only atomic weight data: the ordered element list plus three derived
/// maps.
///
/// The maps are filled by walking the elements in order, so when two
/// elements share an atomic number, or two elements declare the same
/// isotopic replacement symbol, the later one wins. This is intentional:
/// validation happens per element, and no uniqueness is enforced across
/// elements.
#[derive(Debug, Clone, Default)]
pub struct AtomicWeights {
    elements: Vec<Element>,
    default_masses: HashMap<u32, f64>,
    replacements: HashMap<String, f64>,
    replacements_to_atomic_number: HashMap<String, u32>,
}

/// Result of resolving a mass symbol with [`AtomicWeights::mass_of`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MassSource<'a> {
    /// The symbol names an element; its default mass applies.
    Default(&'a Element),
    /// The symbol names an isotopic replacement owned by this element.
    Replacement(&'a Element, f64),
}

impl MassSource<'_> {
    pub fn mass(&self) -> f64 {
        match self {
            MassSource::Default(element) => element.default_mass(),
            MassSource::Replacement(_, mass) => *mass,
        }
    }
}

impl AtomicWeights {
    pub fn from_elements(elements: Vec<Element>) -> Self {
        let mut default_masses = HashMap::with_capacity(elements.len());
        let mut replacements = HashMap::new();
        let mut replacements_to_atomic_number = HashMap::new();

        for element in &elements {
            default_masses.insert(element.atomic_number(), element.default_mass());
            for replacement in element.replacements() {
                replacements.insert(replacement.symbol.clone(), replacement.mass);
                replacements_to_atomic_number
                    .insert(replacement.symbol.clone(), element.atomic_number());
            }
        }

        info!("Read atomic weight data for {} elements", elements.len());

        Self {
            elements,
            default_masses,
            replacements,
            replacements_to_atomic_number,
        }
    }

    /// Parses the dataset embedded in the library.
    pub fn load() -> Result<Self, Error> {
        io::read_str(BUNDLED_WEIGHTS)
    }

    /// Parses a dataset file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        io::read_file(path)
    }

    /// Process-wide tables for the embedded dataset, parsed on first use.
    pub fn bundled() -> &'static AtomicWeights {
        BUNDLED.get_or_init(|| {
            Self::load()
                .expect("Failed to parse embedded atomic weight data. This is a library bug.")
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn default_masses(&self) -> &HashMap<u32, f64> {
        &self.default_masses
    }

    pub fn replacements(&self) -> &HashMap<String, f64> {
        &self.replacements
    }

    pub fn replacements_to_atomic_number(&self) -> &HashMap<String, u32> {
        &self.replacements_to_atomic_number
    }

    pub fn default_mass(&self, atomic_number: u32) -> Option<f64> {
        self.default_masses.get(&atomic_number).copied()
    }

    pub fn replacement_mass(&self, symbol: &str) -> Option<f64> {
        self.replacements.get(symbol).copied()
    }

    pub fn replacement_atomic_number(&self, symbol: &str) -> Option<u32> {
        self.replacements_to_atomic_number.get(symbol).copied()
    }

    /// The element that owns `atomic_number` in [`default_masses`](Self::default_masses),
    /// i.e. the last one declared with that number.
    pub fn element_by_number(&self, atomic_number: u32) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.atomic_number() == atomic_number)
    }

    /// Finds an element by symbol (case-insensitive) or by full name.
    pub fn find(&self, query: &str) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.symbol().eq_ignore_ascii_case(query) || e.full_name() == query)
    }

    /// Resolves a symbol used to request a mass.
    ///
    /// Isotopic replacement symbols take precedence over element symbols, and
    /// element symbols are matched exactly here, so `"D"` can name deuterium
    /// even though it is not an element symbol.
    pub fn mass_of(&self, symbol: &str) -> Option<MassSource<'_>> {
        self.elements
            .iter()
            .rev()
            .find_map(|e| {
                e.replacement(symbol)
                    .map(|r| MassSource::Replacement(e, r.mass))
            })
            .or_else(|| {
                self.elements
                    .iter()
                    .rev()
                    .find(|e| e.symbol() == symbol)
                    .map(MassSource::Default)
            })
    }
}
