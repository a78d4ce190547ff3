//! Country registry: the load-time-constant table of built-in holiday sets.
//!
//! Lookup is by ISO 3166-1 alpha-2 code, ignoring ASCII case.  An unknown
//! code is always [`Error::UnknownCountry`], never an empty holiday list.

use std::collections::BTreeMap;

use alm_core::errors::{Error, Result};

use crate::countries::*;
use crate::country::CountryHolidaySet;

static REGISTRY: &[&CountryHolidaySet] = &[
    // Americas
    &US, &CA, &MX, &BR,
    // Europe
    &GB, &IE, &DE, &FR, &ES, &IT, &NL, &SE,
    // Asia-Pacific
    &AU, &NZ, &JP, &IN,
    // Africa
    &ZA, &KE,
];

/// Code → display name for every registered country, ordered by code.
pub fn countries() -> BTreeMap<&'static str, &'static str> {
    REGISTRY.iter().map(|set| (set.code(), set.display_name())).collect()
}

/// Look up a country's holiday set.
pub fn resolve(code: &str) -> Result<&'static CountryHolidaySet> {
    let code = code.trim();
    REGISTRY
        .iter()
        .copied()
        .find(|set| set.code().eq_ignore_ascii_case(code))
        .ok_or_else(|| Error::UnknownCountry(code.to_owned()))
}

/// Iterate over all registered sets in table order.
pub fn registered() -> impl Iterator<Item = &'static CountryHolidaySet> {
    REGISTRY.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::HolidayCalendar;

    #[test]
    fn codes_are_unique() {
        assert_eq!(countries().len(), REGISTRY.len());
    }

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(resolve("us").unwrap().code(), "US");
        assert_eq!(resolve(" De ").unwrap().name(), "Germany");
    }

    #[test]
    fn unknown_code_is_explicit() {
        let err = resolve("XX").unwrap_err();
        assert_eq!(err, Error::UnknownCountry("XX".into()));
        assert!(err.is_unknown_country());
        assert!(resolve("").unwrap_err().is_unknown_country());
    }

    #[test]
    fn map_is_sorted_by_code() {
        let keys: Vec<_> = countries().into_keys().collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert_eq!(countries().get("FR"), Some(&"France"));
    }
}
