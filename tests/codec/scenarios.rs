use crate::helpers::{clock_at, init_tracing};
use claims::{assert_err, assert_ok};
use datecode::codec::{early_1980, late_1980, nineties, post_2007};
use datecode::domain::{lookup_countries, Country, YearMonth, YearWeek};
use datecode::errors::ErrorKind;
use std::collections::BTreeSet;

#[test]
fn early_1980_july_1985() {
    init_tracing();

    let code = assert_ok!(early_1980::encode(1985, 7));
    assert_eq!(code, "857");
    assert_eq!(assert_ok!(early_1980::decode(&code)), YearMonth::new(1985, 7));
}

#[test]
fn early_1980_months_with_and_without_padding() {
    assert_eq!(assert_ok!(early_1980::encode(1985, 5)), "855");
    assert_eq!(assert_ok!(early_1980::encode(1985, 11)), "8511");
    assert_eq!(assert_ok!(early_1980::decode("855")), YearMonth::new(1985, 5));
    assert_eq!(assert_ok!(early_1980::decode("8511")), YearMonth::new(1985, 11));
}

#[test]
fn late_1980_november_1987_in_france() {
    init_tracing();

    let code = assert_ok!(late_1980::encode("fr", 1987, 11));
    assert_eq!(code, "8711FR");

    let decoded = assert_ok!(late_1980::decode(&code));
    assert_eq!(decoded.period, YearMonth::new(1987, 11));
    assert_eq!(decoded.factory.code(), "FR");
    assert!(decoded.factory.countries().contains(Country::France));
}

#[test]
fn nineties_march_1994_in_sd() {
    init_tracing();

    let code = assert_ok!(nineties::encode("SD", 1994, 3));
    assert_eq!(code.len(), 6);

    let decoded = assert_ok!(nineties::decode(&code));
    assert_eq!(decoded.period, YearMonth::new(1994, 3));
    assert_eq!(decoded.factory.code(), "SD");
}

#[test]
fn post_2007_week_34_of_2012_in_aa() {
    init_tracing();
    let clock = clock_at(2026, 10, 17);

    let code = assert_ok!(post_2007::encode("AA", 2012, 34, &clock));
    assert_eq!(code.len(), 6);

    let decoded = assert_ok!(post_2007::decode(&code, &clock));
    assert_eq!(decoded.period, YearWeek::new(2012, 34));
    assert_eq!(decoded.factory.code(), "AA");
}

#[test]
fn nineties_code_with_year_tens_five_is_a_range_error() {
    let error = assert_err!(nineties::decode("SD0554"));
    assert_eq!(error.kind(), ErrorKind::Range);
}

#[test]
fn post_2007_week_54_in_a_53_week_year_is_a_range_error() {
    let clock = clock_at(2026, 10, 17);

    // week 54 of 2020, which has 53 weeks
    let error = assert_err!(post_2007::decode("AA5240", &clock));
    assert_eq!(error.kind(), ErrorKind::Range);

    // week 53 of 2020 is fine
    assert_ok!(post_2007::decode("AA5230", &clock));
}

#[test]
fn shared_factory_code_returns_both_countries() {
    let countries = assert_ok!(lookup_countries("LW"));
    let expected: BTreeSet<Country> = [Country::Spain, Country::France].into_iter().collect();
    assert_eq!(countries.as_set(), &expected);
}

#[test]
fn unknown_factory_code_is_a_lookup_error() {
    let error = assert_err!(lookup_countries("XY"));
    assert_eq!(error.kind(), ErrorKind::Lookup);
}

#[test]
fn lowercase_factory_code_decodes_like_uppercase() {
    let clock = clock_at(2026, 10, 17);

    assert_eq!(
        assert_ok!(nineties::decode("fl1920")),
        assert_ok!(nineties::decode("FL1920"))
    );
    assert_eq!(
        assert_ok!(post_2007::decode("fr3142", &clock)),
        assert_ok!(post_2007::decode("FR3142", &clock))
    );
}

#[test]
fn codes_outside_the_stamp_grammar_are_format_errors() {
    init_tracing();
    let clock = clock_at(2026, 10, 17);

    // digits where the factory letters belong
    assert_eq!(assert_err!(late_1980::decode("85511")).kind(), ErrorKind::Format);
    assert_eq!(assert_err!(nineties::decode("A10934")).kind(), ErrorKind::Format);

    // padding changes the length
    assert_eq!(assert_err!(early_1980::decode(" 857 ")).kind(), ErrorKind::Format);
    assert_eq!(assert_err!(nineties::decode(" SD0934")).kind(), ErrorKind::Format);
    assert_eq!(
        assert_err!(post_2007::decode("AA3142 ", &clock)).kind(),
        ErrorKind::Format
    );
}
