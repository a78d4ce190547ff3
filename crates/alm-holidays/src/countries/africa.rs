//! Public holidays of African countries.

use alm_time::Month;

use crate::country::CountryHolidaySet;
use crate::rule::HolidayRule;

/// South Africa.
///
/// A holiday on a Sunday is observed the following Monday, but a Saturday
/// holiday is not moved; neither observance policy matches, so dates are
/// shown as computed.
pub static ZA: CountryHolidaySet = CountryHolidaySet {
    code: "ZA",
    name: "South Africa",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::fixed("Human Rights Day", Month::March, 21),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Family Day", 1),
        HolidayRule::fixed("Freedom Day", Month::April, 27),
        HolidayRule::fixed("Workers' Day", Month::May, 1),
        HolidayRule::fixed("Youth Day", Month::June, 16),
        HolidayRule::fixed("National Women's Day", Month::August, 9),
        HolidayRule::fixed("Heritage Day", Month::September, 24),
        HolidayRule::fixed("Day of Reconciliation", Month::December, 16),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Day of Goodwill", Month::December, 26),
    ],
};

/// Kenya.
pub static KE: CountryHolidaySet = CountryHolidaySet {
    code: "KE",
    name: "Kenya",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::fixed("Madaraka Day", Month::June, 1),
        HolidayRule::fixed("Mashujaa Day", Month::October, 20),
        HolidayRule::fixed("Jamhuri Day", Month::December, 12),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Boxing Day", Month::December, 26),
    ],
};
