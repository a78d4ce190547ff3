//! Public holidays of countries in the Americas.

use alm_time::{Month, Weekday};

use crate::country::CountryHolidaySet;
use crate::rule::HolidayRule;

/// United States: federal holidays.
///
/// Fixed-date holidays falling on a Saturday are observed on the Friday
/// before, on a Sunday on the Monday after.
pub static US: CountryHolidaySet = CountryHolidaySet {
    code: "US",
    name: "United States",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1).observed(),
        HolidayRule::nth_weekday("Martin Luther King Jr. Day", Month::January, Weekday::Monday, 3)
            .since(1986),
        HolidayRule::nth_weekday("Presidents' Day", Month::February, Weekday::Monday, 3),
        HolidayRule::last_weekday("Memorial Day", Month::May, Weekday::Monday),
        HolidayRule::fixed("Juneteenth", Month::June, 19).observed().since(2021),
        HolidayRule::fixed("Independence Day", Month::July, 4).observed(),
        HolidayRule::nth_weekday("Labor Day", Month::September, Weekday::Monday, 1),
        HolidayRule::nth_weekday("Columbus Day", Month::October, Weekday::Monday, 2),
        HolidayRule::fixed("Veterans Day", Month::November, 11).observed(),
        HolidayRule::nth_weekday("Thanksgiving Day", Month::November, Weekday::Thursday, 4),
        HolidayRule::fixed("Christmas Day", Month::December, 25).observed(),
    ],
};

/// Canada: federal statutory holidays.
pub static CA: CountryHolidaySet = CountryHolidaySet {
    code: "CA",
    name: "Canada",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1).observed(),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::weekday_on_or_after("Victoria Day", Month::May, 18, Weekday::Monday),
        HolidayRule::fixed("Canada Day", Month::July, 1).observed(),
        HolidayRule::nth_weekday("Labour Day", Month::September, Weekday::Monday, 1),
        HolidayRule::fixed("National Day for Truth and Reconciliation", Month::September, 30)
            .observed()
            .since(2021),
        HolidayRule::nth_weekday("Thanksgiving", Month::October, Weekday::Monday, 2),
        HolidayRule::fixed("Remembrance Day", Month::November, 11),
        HolidayRule::fixed("Christmas Day", Month::December, 25).observed(),
        HolidayRule::fixed("Boxing Day", Month::December, 26).observed(),
    ],
};

/// Mexico: statutory rest days.
pub static MX: CountryHolidaySet = CountryHolidaySet {
    code: "MX",
    name: "Mexico",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::nth_weekday("Constitution Day", Month::February, Weekday::Monday, 1),
        HolidayRule::nth_weekday("Benito Juárez's Birthday", Month::March, Weekday::Monday, 3),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::fixed("Independence Day", Month::September, 16),
        HolidayRule::nth_weekday("Revolution Day", Month::November, Weekday::Monday, 3),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
    ],
};

/// Brazil: national holidays.
pub static BR: CountryHolidaySet = CountryHolidaySet {
    code: "BR",
    name: "Brazil",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::easter_offset("Carnival Monday", -48),
        HolidayRule::easter_offset("Carnival Tuesday", -47),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::fixed("Tiradentes' Day", Month::April, 21),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::easter_offset("Corpus Christi", 60),
        HolidayRule::fixed("Independence Day", Month::September, 7),
        HolidayRule::fixed("Our Lady of Aparecida", Month::October, 12),
        HolidayRule::fixed("All Souls' Day", Month::November, 2),
        HolidayRule::fixed("Republic Proclamation Day", Month::November, 15),
        HolidayRule::fixed("Black Consciousness Day", Month::November, 20).since(2024),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
    ],
};
