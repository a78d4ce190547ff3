//! Country holiday sets: the built-in static tables and caller-built sets.

use alm_core::errors::Result;
use alm_core::ensure;

use crate::calendar::HolidayCalendar;
use crate::rule::HolidayRule;

/// The public holidays of one country.
///
/// Built-in sets are `static` tables (see [`crate::countries`]), written as
/// struct literals so the rule slice lives in static memory.
#[derive(Debug, Clone, Copy)]
pub struct CountryHolidaySet {
    pub(crate) code: &'static str,
    pub(crate) name: &'static str,
    pub(crate) rules: &'static [HolidayRule],
}

impl CountryHolidaySet {
    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Display name.
    pub fn display_name(&self) -> &'static str {
        self.name
    }
}

impl HolidayCalendar for CountryHolidaySet {
    fn code(&self) -> &str {
        self.code
    }

    fn name(&self) -> &str {
        self.name
    }

    fn rules(&self) -> &[HolidayRule] {
        self.rules
    }
}

/// A holiday set assembled at run time, e.g. a company calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHolidaySet {
    code: String,
    name: String,
    rules: Vec<HolidayRule>,
}

impl CustomHolidaySet {
    /// Create an empty set.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let code = code.into();
        ensure!(!code.trim().is_empty(), "holiday set code must not be empty");
        Ok(Self {
            code,
            name: name.into(),
            rules: Vec::new(),
        })
    }

    /// Create a set with the given rules, validating each of them.
    pub fn with_rules(
        code: impl Into<String>,
        name: impl Into<String>,
        rules: impl IntoIterator<Item = HolidayRule>,
    ) -> Result<Self> {
        let mut set = Self::new(code, name)?;
        for rule in rules {
            set.add_rule(rule)?;
        }
        Ok(set)
    }

    /// Append a rule after validating it.
    pub fn add_rule(&mut self, rule: HolidayRule) -> Result<()> {
        rule.validate()?;
        self.rules.push(rule);
        Ok(())
    }

    /// Remove every rule with the given name; returns how many were removed.
    pub fn remove_rule(&mut self, name: &str) -> usize {
        let before = self.rules.len();
        self.rules.retain(|r| r.name != name);
        before - self.rules.len()
    }

    /// Start from a copy of a built-in country's rules.
    pub fn from_country(base: &CountryHolidaySet) -> Self {
        Self {
            code: base.code.to_owned(),
            name: base.name.to_owned(),
            rules: base.rules.to_vec(),
        }
    }
}

impl HolidayCalendar for CustomHolidaySet {
    fn code(&self) -> &str {
        &self.code
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }
}
