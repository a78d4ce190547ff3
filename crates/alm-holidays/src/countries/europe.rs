//! Public holidays of European countries.

use alm_time::{Month, Weekday};

use crate::country::CountryHolidaySet;
use crate::rule::HolidayRule;

/// United Kingdom (England and Wales) bank holidays.
///
/// Substitute days for Christmas and Boxing Day follow a rule that neither
/// observance policy expresses, so dates are shown as computed.
pub static GB: CountryHolidaySet = CountryHolidaySet {
    code: "GB",
    name: "United Kingdom",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::nth_weekday("Early May Bank Holiday", Month::May, Weekday::Monday, 1),
        HolidayRule::last_weekday("Spring Bank Holiday", Month::May, Weekday::Monday),
        HolidayRule::last_weekday("Summer Bank Holiday", Month::August, Weekday::Monday),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Boxing Day", Month::December, 26),
    ],
};

/// Ireland.
pub static IE: CountryHolidaySet = CountryHolidaySet {
    code: "IE",
    name: "Ireland",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::fixed("Saint Brigid's Day", Month::February, 1).since(2023),
        HolidayRule::fixed("Saint Patrick's Day", Month::March, 17),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::nth_weekday("May Day", Month::May, Weekday::Monday, 1),
        HolidayRule::nth_weekday("June Bank Holiday", Month::June, Weekday::Monday, 1),
        HolidayRule::nth_weekday("August Bank Holiday", Month::August, Weekday::Monday, 1),
        HolidayRule::last_weekday("October Bank Holiday", Month::October, Weekday::Monday),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Saint Stephen's Day", Month::December, 26),
    ],
};

/// Germany: nationwide holidays only.
pub static DE: CountryHolidaySet = CountryHolidaySet {
    code: "DE",
    name: "Germany",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::easter_offset("Ascension Day", 39),
        HolidayRule::easter_offset("Whit Monday", 50),
        HolidayRule::fixed("German Unity Day", Month::October, 3).since(1990),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Second Day of Christmas", Month::December, 26),
    ],
};

/// France.
pub static FR: CountryHolidaySet = CountryHolidaySet {
    code: "FR",
    name: "France",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::fixed("Victory in Europe Day", Month::May, 8),
        HolidayRule::easter_offset("Ascension Day", 39),
        HolidayRule::easter_offset("Whit Monday", 50),
        HolidayRule::fixed("Bastille Day", Month::July, 14),
        HolidayRule::fixed("Assumption Day", Month::August, 15),
        HolidayRule::fixed("All Saints' Day", Month::November, 1),
        HolidayRule::fixed("Armistice Day", Month::November, 11),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
    ],
};

/// Spain: national holidays.
pub static ES: CountryHolidaySet = CountryHolidaySet {
    code: "ES",
    name: "Spain",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::fixed("Epiphany", Month::January, 6),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::fixed("Assumption Day", Month::August, 15),
        HolidayRule::fixed("National Day", Month::October, 12),
        HolidayRule::fixed("All Saints' Day", Month::November, 1),
        HolidayRule::fixed("Constitution Day", Month::December, 6),
        HolidayRule::fixed("Immaculate Conception", Month::December, 8),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
    ],
};

/// Italy.
pub static IT: CountryHolidaySet = CountryHolidaySet {
    code: "IT",
    name: "Italy",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::fixed("Epiphany", Month::January, 6),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("Liberation Day", Month::April, 25),
        HolidayRule::fixed("Labour Day", Month::May, 1),
        HolidayRule::fixed("Republic Day", Month::June, 2),
        HolidayRule::fixed("Ferragosto", Month::August, 15),
        HolidayRule::fixed("All Saints' Day", Month::November, 1),
        HolidayRule::fixed("Immaculate Conception", Month::December, 8),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Saint Stephen's Day", Month::December, 26),
    ],
};

/// Netherlands.
///
/// King's Day moves to the Saturday before when April 27 is a Sunday; that
/// shift is not modelled.
pub static NL: CountryHolidaySet = CountryHolidaySet {
    code: "NL",
    name: "Netherlands",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Sunday", 0),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("King's Day", Month::April, 27).since(2014),
        HolidayRule::fixed("Liberation Day", Month::May, 5),
        HolidayRule::easter_offset("Ascension Day", 39),
        HolidayRule::easter_offset("Whit Sunday", 49),
        HolidayRule::easter_offset("Whit Monday", 50),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Second Day of Christmas", Month::December, 26),
    ],
};

/// Sweden.
pub static SE: CountryHolidaySet = CountryHolidaySet {
    code: "SE",
    name: "Sweden",
    rules: &[
        HolidayRule::fixed("New Year's Day", Month::January, 1),
        HolidayRule::fixed("Epiphany", Month::January, 6),
        HolidayRule::easter_offset("Good Friday", -2),
        HolidayRule::easter_offset("Easter Sunday", 0),
        HolidayRule::easter_offset("Easter Monday", 1),
        HolidayRule::fixed("May Day", Month::May, 1),
        HolidayRule::easter_offset("Ascension Day", 39),
        HolidayRule::fixed("National Day", Month::June, 6),
        HolidayRule::weekday_on_or_after("Midsummer Eve", Month::June, 19, Weekday::Friday),
        HolidayRule::weekday_on_or_after("Midsummer Day", Month::June, 20, Weekday::Saturday),
        HolidayRule::weekday_on_or_after("All Saints' Day", Month::October, 31, Weekday::Saturday),
        HolidayRule::fixed("Christmas Eve", Month::December, 24),
        HolidayRule::fixed("Christmas Day", Month::December, 25),
        HolidayRule::fixed("Boxing Day", Month::December, 26),
        HolidayRule::fixed("New Year's Eve", Month::December, 31),
    ],
};
