use alm_core::Error;
use alm_holidays::{countries, engine, registry, HolidayCalendar, HolidayRule, RuleKind};
use alm_time::{CalendarDate, Month, Weekday};
use proptest::prelude::*;

fn date(y: i32, m: u8, d: u8) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

// ── Listing ───────────────────────────────────────────────────────────────────

#[test]
fn us_new_year_2024_not_observed() {
    let hs = engine::holidays("US", 2024).unwrap();
    let first = &hs[0];
    assert_eq!(first.name, "New Year's Day");
    assert_eq!(first.date, date(2024, 1, 1));
    assert!(!first.is_observed);
}

#[test]
fn saturday_and_sunday_shifts() {
    // July 4 2026 is a Saturday, 2027 a Sunday
    let find = |year| {
        engine::holidays("US", year)
            .unwrap()
            .into_iter()
            .find(|h| h.name == "Independence Day")
            .unwrap()
    };
    let sat = find(2026);
    assert_eq!(sat.date, date(2026, 7, 3));
    assert_eq!(sat.date.weekday(), Weekday::Friday);
    assert!(sat.is_observed);
    let sun = find(2027);
    assert_eq!(sun.date, date(2027, 7, 5));
    assert_eq!(sun.date.weekday(), Weekday::Monday);
    assert!(sun.is_observed);
}

#[test]
fn holidays_are_idempotent() {
    for set in registry::registered() {
        assert_eq!(set.holidays(2031).unwrap(), set.holidays(2031).unwrap());
    }
}

#[test]
fn lists_are_sorted_without_duplicates() {
    for set in registry::registered() {
        for year in [1999, 2024, 2025, 2100] {
            let hs = set.holidays(year).unwrap();
            assert!(
                hs.windows(2).all(|w| w[0] < w[1]),
                "{} {year} not strictly ascending",
                set.code()
            );
        }
    }
}

#[test]
fn invalid_year_is_invalid_argument() {
    assert!(matches!(
        engine::holidays("US", 10_000),
        Err(Error::InvalidArgument(_))
    ));
}

// ── Registry ──────────────────────────────────────────────────────────────────

#[test]
fn countries_are_stable_and_resolvable() {
    let first = countries();
    let second = countries();
    assert_eq!(
        first.iter().collect::<Vec<_>>(),
        second.iter().collect::<Vec<_>>()
    );
    for code in first.keys() {
        assert!(engine::holidays(code, 2024).is_ok(), "{code}");
    }
}

#[test]
fn unknown_country_is_not_an_empty_list() {
    let err = engine::holidays("Atlantis", 2024).unwrap_err();
    assert!(err.is_unknown_country());
}

// ── Upcoming ──────────────────────────────────────────────────────────────────

#[test]
fn upcoming_spans_into_next_years() {
    let hs = engine::upcoming_holidays("IN", date(2024, 12, 1), 7).unwrap();
    assert_eq!(hs.len(), 7);
    assert_eq!(hs[0].date, date(2024, 12, 25));
    assert_eq!(hs[1].date, date(2025, 1, 26));
    assert_eq!(hs[6].date, date(2026, 1, 26));
}

#[test]
fn upcoming_with_custom_sparse_set() {
    let set = alm_holidays::CustomHolidaySet::with_rules(
        "LEAP",
        "Leap Day Club",
        [HolidayRule::fixed("Leap Day", Month::February, 29)],
    )
    .unwrap();
    let hs = set.upcoming_holidays(date(2025, 1, 1), 3).unwrap();
    let dates: Vec<_> = hs.iter().map(|h| h.date).collect();
    assert_eq!(dates, vec![date(2028, 2, 29), date(2032, 2, 29), date(2036, 2, 29)]);
}

#[test]
fn upcoming_custom_set_keeps_new_year_behind_shifted_eve() {
    let set = alm_holidays::CustomHolidaySet::with_rules(
        "NYX",
        "New Year Club",
        [
            HolidayRule::fixed("New Year's Day", Month::January, 1),
            HolidayRule::fixed("New Year's Eve", Month::December, 31).observed(),
        ],
    )
    .unwrap();
    let from = date(2023, 12, 1);
    let hs = set.upcoming_holidays(from, 3).unwrap();

    let mut expected: Vec<_> = (2023..=2025)
        .flat_map(|y| set.holidays(y).unwrap())
        .filter(|h| h.date >= from)
        .collect();
    expected.sort();
    expected.truncate(3);
    assert_eq!(hs, expected);
    assert!(hs
        .iter()
        .any(|h| h.name == "New Year's Day" && h.date == date(2024, 1, 1)));
    assert!(hs.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn upcoming_near_end_of_range_is_short() {
    let hs = engine::upcoming_holidays("US", date(9999, 12, 1), 5).unwrap();
    assert_eq!(hs.len(), 1);
    assert_eq!(hs[0].name, "Christmas Day");
}

#[test]
fn between_crosses_years() {
    let hs = engine::holidays_between("DE", date(2024, 12, 20), date(2025, 1, 5)).unwrap();
    let names: Vec<_> = hs.iter().map(|h| h.name.as_ref()).collect();
    assert_eq!(
        names,
        vec!["Christmas Day", "Second Day of Christmas", "New Year's Day"]
    );
}

proptest! {
    #[test]
    fn upcoming_is_prefix_of_concatenated_years(
        code in prop::sample::select(vec!["US", "GB", "DE", "AU", "JP", "BR", "SE"]),
        year in 1900i32..2200,
        ordinal in 0i64..366,
        count in 1usize..30,
    ) {
        let from = CalendarDate::from_ymd(year, 1, 1).unwrap().add_days(ordinal).unwrap();
        let upcoming = engine::upcoming_holidays(code, from, count).unwrap();

        let mut expected = Vec::new();
        let mut y = from.year();
        while expected.len() < count {
            expected.extend(
                engine::holidays(code, y).unwrap().into_iter().filter(|h| h.date >= from),
            );
            y += 1;
        }
        expected.truncate(count);

        prop_assert_eq!(upcoming.len(), count);
        prop_assert!(upcoming.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(upcoming.iter().all(|h| h.date >= from));
        prop_assert_eq!(upcoming, expected);
    }

    #[test]
    fn easter_relative_feasts_track_easter(year in 1583i32..3000) {
        let easter = alm_time::easter_sunday(year).unwrap();
        let hs = engine::holidays("DE", year).unwrap();
        let find = |name: &str| hs.iter().find(|h| h.name == name).unwrap().date;
        prop_assert_eq!(find("Good Friday"), easter.add_days(-2).unwrap());
        prop_assert_eq!(find("Ascension Day"), easter.add_days(39).unwrap());
        prop_assert_eq!(find("Ascension Day").weekday(), Weekday::Thursday);
    }

    #[test]
    fn us_federal_holidays_fall_on_weekdays(year in 1900i32..2400) {
        for h in engine::holidays("US", year).unwrap() {
            prop_assert!(h.date.weekday().is_weekday(), "{}", h);
            if h.is_observed {
                prop_assert_eq!(h.date.days_until(h.raw_date).abs(), 1);
            } else {
                prop_assert_eq!(h.date, h.raw_date);
            }
        }
    }
}

// ── Custom rules ──────────────────────────────────────────────────────────────

#[test]
fn custom_rule_last_weekday() {
    let rule = HolidayRule::custom(
        "Sysadmin Day",
        RuleKind::NthWeekday {
            month: Month::July,
            weekday: Weekday::Friday,
            occurrence: alm_holidays::Occurrence::Last,
        },
    );
    let h = rule.resolve(2024).unwrap().unwrap();
    assert_eq!(h.date, date(2024, 7, 26));
}

#[cfg(feature = "serde")]
#[test]
fn holiday_json_shape() {
    let h = engine::holidays("US", 2026)
        .unwrap()
        .into_iter()
        .find(|h| h.name == "Independence Day")
        .unwrap();
    let json = serde_json::to_value(&h).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "date": "2026-07-03",
            "name": "Independence Day",
            "rawDate": "2026-07-04",
            "isObserved": true,
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn rule_from_json() {
    let rule: HolidayRule = serde_json::from_str(
        r#"{"name": "Founders' Day", "kind": {"fixed_date": {"month": "March", "day": 14}}}"#,
    )
    .unwrap();
    assert_eq!(rule, HolidayRule::custom("Founders' Day", RuleKind::FixedDate { month: Month::March, day: 14 }));
}
