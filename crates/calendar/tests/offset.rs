use chrono::{Days, NaiveDate};
use ghori_calendar::{Converter, convert_date};

#[test]
fn offset_matches_shifting_the_gregorian_date() {
    let mut date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    while date < end {
        for offset in [-45_i32, -31, -1, 1, 2, 30, 400] {
            let shifted = Converter::new().with_day_offset(offset).convert(date);
            let gregorian = if offset >= 0 {
                date.checked_add_days(Days::new(offset as u64)).unwrap()
            } else {
                date.checked_sub_days(Days::new(offset.unsigned_abs() as u64))
                    .unwrap()
            };
            let expected = convert_date(gregorian);
            assert_eq!(
                (shifted.year(), shifted.month(), shifted.day()),
                (expected.year(), expected.month(), expected.day()),
                "{date} with offset {offset}"
            );
            assert_eq!(shifted.weekday(), convert_date(date).weekday());
        }
        date = date.checked_add_days(Days::new(7)).unwrap();
    }
}
