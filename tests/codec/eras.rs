use crate::helpers::{
    clock_at, init_tracing, random_case, random_date, random_factory_code, SAMPLES,
};
use chrono::{Datelike, NaiveDate};
use claims::{assert_err, assert_ok};
use datecode::codec::{early_1980, late_1980, nineties, post_2007, Era};
use datecode::domain::{
    iso_weeks_in_year, lookup_countries, ManufacturingPeriod, YearMonth, YearWeek,
};
use datecode::errors::ErrorKind;
use fake::Fake;

#[test]
fn early_1980_codes_round_trip() {
    init_tracing();

    for _ in 0..SAMPLES {
        let year = (1980..=1989).fake::<i32>();
        let month = (1..=12).fake::<u32>();

        let code = assert_ok!(early_1980::encode(year, month));
        assert_eq!(code.len(), if month < 10 { 3 } else { 4 });
        assert_eq!(assert_ok!(early_1980::decode(&code)), YearMonth::new(year, month));
    }
}

#[test]
fn late_1980_codes_round_trip() {
    init_tracing();

    for _ in 0..SAMPLES {
        let factory = random_factory_code();
        let year = (1980..=1989).fake::<i32>();
        let month = (1..=12).fake::<u32>();

        let code = assert_ok!(late_1980::encode(&random_case(factory), year, month));
        let decoded = assert_ok!(late_1980::decode(&code));

        assert_eq!(decoded.period, YearMonth::new(year, month));
        assert_eq!(decoded.factory.code(), factory);
        assert_eq!(decoded.factory.countries(), &assert_ok!(lookup_countries(factory)));
    }
}

#[test]
fn nineties_codes_round_trip() {
    init_tracing();

    for _ in 0..SAMPLES {
        let factory = random_factory_code();
        let year = (1990..=2006).fake::<i32>();
        let month = (1..=12).fake::<u32>();

        let code = assert_ok!(nineties::encode(&random_case(factory), year, month));
        assert_eq!(code.len(), 6);

        let decoded = assert_ok!(nineties::decode(&code));
        assert_eq!(decoded.period, YearMonth::new(year, month));
        assert_eq!(decoded.factory.code(), factory);
    }
}

#[test]
fn post_2007_codes_round_trip() {
    init_tracing();
    let clock = clock_at(2026, 10, 17);

    for _ in 0..SAMPLES {
        let factory = random_factory_code();
        let year = (2007..=2026).fake::<i32>();
        let week = (1..=iso_weeks_in_year(year)).fake::<u32>();

        let code = assert_ok!(post_2007::encode(&random_case(factory), year, week, &clock));
        assert_eq!(code.len(), 6);

        let decoded = assert_ok!(post_2007::decode(&code, &clock));
        assert_eq!(decoded.period, YearWeek::new(year, week));
        assert_eq!(decoded.factory.code(), factory);
    }
}

#[test]
fn post_2007_dates_round_trip_through_their_iso_week() {
    init_tracing();
    let clock = clock_at(2026, 10, 17);
    let first = NaiveDate::from_ymd_opt(2007, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();

    for _ in 0..SAMPLES {
        let factory = random_factory_code();
        let date = random_date(first, last);
        let iso_week = date.iso_week();

        let code = assert_ok!(post_2007::encode_date(factory, date, &clock));
        let decoded = assert_ok!(post_2007::decode(&code, &clock));
        assert_eq!(decoded.period, YearWeek::new(iso_week.year(), iso_week.week()));
    }
}

#[test]
fn date_overloads_agree_with_integer_overloads() {
    init_tracing();
    let clock = clock_at(2026, 10, 17);
    let eras = [
        (Era::Early1980s, None, (1980, 1989)),
        (Era::Late1980s, Some("LW"), (1980, 1989)),
        (Era::Nineties, Some("BC"), (1990, 2006)),
    ];

    for (era, factory, (from, to)) in eras {
        let first = NaiveDate::from_ymd_opt(from, 1, 1).unwrap();
        let last = NaiveDate::from_ymd_opt(to, 12, 31).unwrap();

        for _ in 0..SAMPLES {
            let date = random_date(first, last);
            assert_eq!(
                assert_ok!(era.encode_date(factory, date, &clock)),
                assert_ok!(era.encode(factory, date.year(), date.month(), &clock)),
                "era {} date {}",
                era,
                date
            );
        }
    }
}

#[test]
fn era_dispatch_round_trips_every_era() {
    init_tracing();
    let clock = clock_at(2026, 10, 17);
    let cases = [
        (Era::Early1980s, None, 1983, 10),
        (Era::Late1980s, Some("tx"), 1989, 2),
        (Era::Nineties, Some("Di"), 2000, 12),
        (Era::Post2007, Some("ol"), 2026, 41),
    ];

    for (era, factory, year, period) in cases {
        let code = assert_ok!(era.encode(factory, year, period, &clock));
        let decoded = assert_ok!(era.decode(&code, &clock));

        assert_eq!(decoded.era, era);
        assert!(era.code_lengths().contains(&code.len()));
        match decoded.period {
            ManufacturingPeriod::Month(ym) => assert_eq!((ym.year, ym.month), (year, period)),
            ManufacturingPeriod::IsoWeek(yw) => assert_eq!((yw.year, yw.week), (year, period)),
        }
        assert_eq!(
            decoded.factory.map(|f| f.code().to_string()),
            factory.map(|f| f.to_uppercase())
        );
    }
}

#[test]
fn upper_and_lower_case_factory_codes_encode_identically() {
    let clock = clock_at(2026, 10, 17);
    let cases = [
        (Era::Late1980s, 1989, 6),
        (Era::Nineties, 1999, 6),
        (Era::Post2007, 2020, 6),
    ];

    for (era, year, period) in cases {
        assert_eq!(
            assert_ok!(era.encode(Some("fr"), year, period, &clock)),
            assert_ok!(era.encode(Some("FR"), year, period, &clock)),
            "era {}",
            era
        );
    }
}

#[test]
fn codes_of_one_era_are_not_checked_against_another() {
    let clock = clock_at(2026, 10, 17);

    // "SD0934" is a 1990-2006 code; read as post-2007 it is week 3 of 2094.
    let error = assert_err!(Era::Post2007.decode("SD0934", &clock));
    assert_eq!(error.kind(), ErrorKind::Range);

    // "AA0017" is week 1 of 2007; read as 1990-2006 it is January 2007.
    let error = assert_err!(Era::Nineties.decode("AA0017", &clock));
    assert_eq!(error.kind(), ErrorKind::Range);
}
