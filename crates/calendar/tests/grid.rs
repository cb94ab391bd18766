use maandkal_calendar::{
    Date, MonthGridBuilder, WEEKS_PER_GRID, Weekday, days_in_month, iso_week,
};

#[test]
fn every_grid_has_six_rows_of_seven_days() {
    let builder = MonthGridBuilder::default();
    for year in 2015..=2030 {
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            assert_eq!(grid.rows().len(), WEEKS_PER_GRID, "{year}-{month}");
            for row in grid.rows() {
                assert_eq!(row.days().len(), 7, "{year}-{month}");
            }
        }
    }
}

#[test]
fn anchor_is_week_start_on_or_before_the_first() {
    let builder = MonthGridBuilder::default();
    for year in 2015..=2030 {
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            let anchor = grid.rows()[0].days()[0];
            let first = Date::new(year, month, 1).unwrap();
            assert_eq!(anchor.weekday(), Weekday::Monday, "{year}-{month}");
            let back = first.rata_die() - anchor.rata_die();
            assert!(
                (0..=6).contains(&back),
                "{year}-{month}: anchor {anchor:?} is {back} days before the 1st"
            );
        }
    }
}

#[test]
fn rows_hold_consecutive_dates_and_cover_the_whole_month() {
    let builder = MonthGridBuilder::default();
    for year in [2020, 2021, 2024] {
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            let anchor = grid.rows()[0].days()[0];

            // Cells are the anchor offset by 7*row + column days.
            for (row_ix, row) in grid.rows().iter().enumerate() {
                for (col_ix, &day) in row.days().iter().enumerate() {
                    assert_eq!(
                        day,
                        anchor.offset((7 * row_ix + col_ix) as i64),
                        "{year}-{month} row {row_ix} col {col_ix}"
                    );
                }
            }

            // Every day of the target month appears exactly once.
            let in_month: Vec<Date> = grid
                .rows()
                .iter()
                .flat_map(|row| row.days().iter().copied())
                .filter(|&d| grid.contains(d))
                .collect();
            assert_eq!(
                in_month.len(),
                usize::from(days_in_month(year, month)),
                "{year}-{month}"
            );
            assert_eq!(in_month[0], Date::new(year, month, 1).unwrap());
            assert_eq!(
                *in_month.last().unwrap(),
                Date::new(year, month, days_in_month(year, month)).unwrap()
            );
        }
    }
}

#[test]
fn week_labels_monotonic_except_year_wrap() {
    let builder = MonthGridBuilder::default();
    for year in 2015..=2030 {
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            let labels: Vec<u8> = grid.rows().iter().map(|r| r.week_number()).collect();
            for pair in labels.windows(2) {
                let wrapped = pair[0] >= 52 && pair[1] == 1;
                assert!(
                    pair[1] >= pair[0] || wrapped,
                    "{year}-{month}: labels {labels:?} not monotonic"
                );
            }
        }
    }
}

#[test]
fn week_labels_match_iso_week_of_row_monday() {
    let builder = MonthGridBuilder::default();
    for year in [2020, 2021, 2024] {
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            for row in grid.rows() {
                assert_eq!(
                    row.week_number(),
                    iso_week(row.days()[0]).week,
                    "{year}-{month}"
                );
            }
        }
    }
}

#[test]
fn year_validation_bounds() {
    let builder = MonthGridBuilder::default();
    assert!(builder.build(1581, 1).is_err());
    assert!(builder.build(3001, 1).is_err());
    assert!(builder.build(1582, 1).is_ok());
    assert!(builder.build(3000, 1).is_ok());
}

#[test]
fn february_2024_layout() {
    // February 2024: leap year, starts on a Thursday.
    let grid = MonthGridBuilder::default().build(2024, 2).unwrap();

    let anchor = grid.rows()[0].days()[0];
    assert_eq!(anchor, Date::new(2024, 1, 29).unwrap());
    assert_eq!(anchor.weekday(), Weekday::Monday);

    // Row 0: Jan 29-31 outside the month, Feb 1-4 inside.
    let row0 = &grid.rows()[0];
    let in_month: Vec<bool> = row0.days().iter().map(|&d| grid.contains(d)).collect();
    assert_eq!(in_month, [false, false, false, true, true, true, true]);
    assert_eq!(row0.days()[3], Date::new(2024, 2, 1).unwrap());
    assert_eq!(row0.days()[6], Date::new(2024, 2, 4).unwrap());

    // Row 5 starts at 2024-03-04 and is entirely outside the month, but is
    // still emitted.
    let row5 = &grid.rows()[5];
    assert_eq!(row5.days()[0], Date::new(2024, 3, 4).unwrap());
    assert!(row5.days().iter().all(|&d| !grid.contains(d)));
}

#[test]
fn january_2021_first_label_is_53() {
    // January 2021 starts on a Friday; the anchor Monday is 2020-12-28,
    // which belongs to ISO week 53 of 2020.
    let grid = MonthGridBuilder::default().build(2021, 1).unwrap();
    assert_eq!(grid.rows()[0].days()[0], Date::new(2020, 12, 28).unwrap());
    assert_eq!(grid.rows()[0].week_number(), 53);
    assert_eq!(grid.rows()[1].week_number(), 1);
}

#[test]
fn worst_case_alignment_needs_all_six_rows() {
    // A 31-day month starting on a Sunday puts the anchor 6 days back, so
    // the month's last day lands in row 5.
    let builder = MonthGridBuilder::default();
    for (year, month) in [(2020, 3), (2021, 8)] {
        let grid = builder.build(year, month).unwrap();
        let last = Date::new(year, month, 31).unwrap();
        assert_eq!(Date::new(year, month, 1).unwrap().weekday(), Weekday::Sunday);
        let row5 = &grid.rows()[5];
        assert!(
            row5.days().iter().any(|&d| d == last),
            "{year}-{month}: last day must land in row 5"
        );
    }
}

#[test]
fn sunday_start_grid_still_covers_month() {
    let builder = MonthGridBuilder::new(Weekday::Sunday);
    for year in [2021, 2024] {
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            let anchor = grid.rows()[0].days()[0];
            assert_eq!(anchor.weekday(), Weekday::Sunday, "{year}-{month}");
            let n_in_month = grid
                .rows()
                .iter()
                .flat_map(|row| row.days().iter())
                .filter(|&&d| grid.contains(d))
                .count();
            assert_eq!(n_in_month, usize::from(days_in_month(year, month)));
        }
    }
}

#[test]
fn all_fourteen_calendar_shapes() {
    // Every combination of leap/common year and starting weekday of January
    // occurs within any 28-year Gregorian stretch without century breaks.
    let builder = MonthGridBuilder::default();
    let mut seen = std::collections::BTreeSet::new();
    for year in 1999..=2026 {
        let jan1 = Date::new(year, 1, 1).unwrap();
        seen.insert((jan1.weekday().monday0(), maandkal_calendar::is_leap_year(year)));
        for month in 1..=12_u8 {
            let grid = builder.build(year, month).unwrap();
            let n_in_month = grid
                .rows()
                .iter()
                .flat_map(|row| row.days().iter())
                .filter(|&&d| grid.contains(d))
                .count();
            assert_eq!(
                n_in_month,
                usize::from(days_in_month(year, month)),
                "{year}-{month}"
            );
        }
    }
    assert_eq!(seen.len(), 14, "expected all 14 year shapes");
}
