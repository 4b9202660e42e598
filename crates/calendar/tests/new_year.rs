use chrono::NaiveDate;
use ghori_calendar::{Month, MonthLengths, convert_date};

#[test]
fn april_14_starts_boishakh_every_year() {
    for year in 1900..=2100 {
        let date = NaiveDate::from_ymd_opt(year, 4, 14).unwrap();
        let bangla = convert_date(date);
        assert_eq!(bangla.year(), year - 593, "year for {date}");
        assert_eq!(bangla.month_index(), 0, "month for {date}");
        assert_eq!(bangla.day(), 1, "day for {date}");
    }
}

#[test]
fn april_13_ends_choitro_every_year() {
    for year in 1900..=2100 {
        let date = NaiveDate::from_ymd_opt(year, 4, 13).unwrap();
        let bangla = convert_date(date);
        assert_eq!(bangla.year(), year - 594, "year for {date}");
        assert_eq!(bangla.month(), Month::Choitro, "month for {date}");
        assert_eq!(bangla.day(), 30, "day for {date}");
    }
}

#[test]
fn year_length_matches_span_between_boundaries() {
    for year in 1900..=2100 {
        let start = NaiveDate::from_ymd_opt(year, 4, 14).unwrap();
        let end = NaiveDate::from_ymd_opt(year + 1, 4, 14).unwrap();
        let span = (end - start).num_days();
        let total = MonthLengths::for_year(year - 593).total();
        assert_eq!(i64::from(total), span, "bangla year {}", year - 593);
        assert!(total == 365 || total == 366);
    }
}
