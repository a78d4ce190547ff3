//! Public holidays of Asia-Pacific countries.
//!
//! Holidays set by lunar calendars or astronomical observation (the Japanese
//! equinox days, most Indian festivals, Matariki) are not listed.

use alm_time::{Month, Weekday};

use crate::country::CountryHolidaySet;
use crate::rule::HolidayRule;

/// Australia: national holidays.
pub static AU: CountryHolidaySet = CountryHolidaySet {
    code: "AU",
    name: "Australia",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1).observed(),
        HolidayRule::fixed("Australia Day", Month::January, 26).observed(),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("Anzac Day", Month::April, 25),
        HolidayRule::nth_weekday("King's Birthday", Month::June, Weekday::Monday, 2),
        HolidayRule::fixed("Christmas Day", Month::December, 25).observed(),
        HolidayRule::fixed("Boxing Day", Month::December, 26).observed(),
    ],
};

/// New Zealand.
pub static NZ: CountryHolidaySet = CountryHolidaySet {
    code: "NZ",
    name: "New Zealand",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::fixed("Day after New Year's Day", Month::January, 2),
        HolidayRule::fixed("Waitangi Day", Month::February, 6),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("Anzac Day", Month::April, 25),
        HolidayRule::nth_weekday("King's Birthday", Month::June, Weekday::Monday, 1),
        HolidayRule::nth_weekday("Labour Day", Month::October, Weekday::Monday, 4),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Boxing Day", Month::December, 26),
    ],
};

/// Japan.
pub static JP: CountryHolidaySet = CountryHolidaySet {
    code: "JP",
    name: "Japan",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::nth_weekday("Coming of Age Day", Month::January, Weekday::Monday, 2)
            .since(2000),
        HolidayRule::fixed("National Foundation Day", Month::February, 11),
        HolidayRule::fixed("Emperor's Birthday", Month::February, 23).since(2020),
        HolidayRule::fixed("Showa Day", Month::April, 29),
        HolidayRule::fixed("Constitution Memorial Day", Month::May, 3),
        HolidayRule::fixed("Greenery Day", Month::May, 4),
        HolidayRule::fixed("Children's Day", Month::May, 5),
        HolidayRule::nth_weekday("Marine Day", Month::July, Weekday::Monday, 3).since(2003),
        HolidayRule::fixed("Mountain Day", Month::August, 11).since(2016),
        HolidayRule::nth_weekday("Respect for the Aged Day", Month::September, Weekday::Monday, 3)
            .since(2003),
        HolidayRule::nth_weekday("Sports Day", Month::October, Weekday::Monday, 2).since(2000),
        HolidayRule::fixed("Culture Day", Month::November, 3),
        HolidayRule::fixed("Labour Thanksgiving Day", Month::November, 23),
    ],
};

/// India: gazetted national holidays with fixed Gregorian dates.
pub static IN: CountryHolidaySet = CountryHolidaySet {
    code: "IN",
    name: "India",
    rules: &[
        HolidayRule::fixed("Republic Day", Month::January, 26),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::fixed("Independence Day", Month::August, 15),
        HolidayRule::fixed("Gandhi Jayanti", Month::October, 2),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
    ],
};
