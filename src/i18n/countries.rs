//! Country name translator: canonical (English, as the reports API spells it)
//! to display (Portuguese) names and back.
//!
//! The forward table is static. The inverse table is derived from it once, on
//! first access, and keyed by normalized display name so that lookups from
//! user input ignore case and accents. Names missing from the table pass
//! through unchanged in both directions.

use crate::i18n::normalize::normalize_text;
use std::collections::HashMap;
use std::sync::OnceLock;

/// (canonical name, display name) pairs.
const COUNTRY_TABLE: &[(&str, &str)] = &[
    ("South Africa", "África do Sul"),
    ("North Africa", "África do Norte"),
    ("Australia", "Austrália"),
    ("Brazil", "Brasil"),
    ("US", "Estados Unidos"),
    ("China", "China"),
    ("India", "Índia"),
    ("Japan", "Japão"),
    ("New Zealand", "Nova Zelândia"),
    ("Germany", "Alemanha"),
    ("Italy", "Itália"),
    ("France", "França"),
    ("Spain", "Espanha"),
    ("United Kingdom", "Reino Unido"),
    ("Canada", "Canadá"),
    ("Greenland", "Groenlândia"),
    ("Russia", "Rússia"),
    ("South Korea", "Coreia do Sul"),
    ("North Korea", "Coreia do Norte"),
    ("Saudi Arabia", "Arábia Saudita"),
    ("United Arab Emirates", "Emirados Árabes Unidos"),
];

/// Immutable forward/inverse country name maps.
#[derive(Debug)]
pub struct CountryTranslator {
    entries: &'static [(&'static str, &'static str)],
    to_display: HashMap<&'static str, &'static str>,
    /// normalized display name -> canonical name
    to_canonical: HashMap<String, &'static str>,
}

static TRANSLATOR: OnceLock<CountryTranslator> = OnceLock::new();

impl CountryTranslator {
    /// Get the process-wide translator, building it on first call.
    pub fn get() -> &'static CountryTranslator {
        TRANSLATOR.get_or_init(|| CountryTranslator::from_table(COUNTRY_TABLE))
    }

    fn from_table(entries: &'static [(&'static str, &'static str)]) -> Self {
        let to_display = entries.iter().copied().collect();
        let to_canonical = entries
            .iter()
            .map(|&(canonical, display)| (normalize_text(display), canonical))
            .collect();

        Self {
            entries,
            to_display,
            to_canonical,
        }
    }

    /// Exact-key lookup of the display name for a canonical name.
    pub fn to_display<'a>(&self, name: &'a str) -> &'a str {
        self.to_display.get(name).copied().unwrap_or(name)
    }

    /// Case- and accent-insensitive lookup of the canonical name for a
    /// display name.
    pub fn to_canonical<'a>(&self, name: &'a str) -> &'a str {
        self.to_canonical
            .get(&normalize_text(name))
            .copied()
            .unwrap_or(name)
    }

    /// All (canonical, display) pairs in table order.
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

/// Translate a canonical country name to its display name.
pub fn to_display(name: &str) -> &str {
    CountryTranslator::get().to_display(name)
}

/// Translate a display country name (any casing, with or without accents)
/// back to the canonical name used by the reports API.
pub fn to_canonical(name: &str) -> &str {
    CountryTranslator::get().to_canonical(name)
}
