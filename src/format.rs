//! Pure display helpers: currency, dates, chart axis labels and pagination.
//!
//! Amounts live in the store as integer cents and are converted here, at the
//! display boundary, to fixed en-US strings. Nothing in this module touches
//! the database.

use crate::entities::revenue;
use chrono::NaiveDate;

/// Formats an integer cent amount as an en-US currency string.
///
/// `25000` becomes `"$250.00"`, `200000` becomes `"$2,000.00"`. The locale
/// is fixed; there is no parameterization.
#[must_use]
pub fn format_currency(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = group_thousands(abs / 100);
    let fraction = abs % 100;
    format!("{sign}${dollars}.{fraction:02}")
}

/// Inserts comma separators every three digits, e.g. `1234567` -> `"1,234,567"`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an ISO date for display, e.g. 2023-12-01 -> `"Dec 1, 2023"`.
#[must_use]
pub fn format_date_to_local(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Builds y-axis labels for the revenue chart.
///
/// The top label is the highest monthly revenue rounded up to the nearest
/// thousand; labels descend from there to `$0K` in steps of 1000.
///
/// # Returns
/// The label list (top first) and the top label value.
#[must_use]
pub fn generate_y_axis(revenue: &[revenue::Model]) -> (Vec<String>, i64) {
    let highest = revenue.iter().map(|r| r.revenue).max().unwrap_or(0);
    let top_label = (highest + 999) / 1000 * 1000;

    let mut labels = Vec::new();
    let mut step = top_label;
    while step >= 0 {
        labels.push(format!("${}K", step / 1000));
        step -= 1000;
    }
    (labels, top_label)
}

/// Builds the page item list for pagination controls.
///
/// Short ranges (7 pages or fewer) list every page. Longer ranges collapse
/// the middle or an edge behind `"..."` so at most 7 items are shown, always
/// keeping the first, last and current pages visible.
#[must_use]
pub fn generate_pagination(current_page: u64, total_pages: u64) -> Vec<String> {
    let page = |n: u64| n.to_string();
    let gap = || "...".to_string();

    if total_pages <= 7 {
        return (1..=total_pages).map(page).collect();
    }

    if current_page <= 3 {
        return vec![
            page(1),
            page(2),
            page(3),
            gap(),
            page(total_pages - 1),
            page(total_pages),
        ];
    }

    if current_page >= total_pages - 2 {
        return vec![
            page(1),
            page(2),
            gap(),
            page(total_pages - 2),
            page(total_pages - 1),
            page(total_pages),
        ];
    }

    vec![
        page(1),
        gap(),
        page(current_page - 1),
        page(current_page),
        page(current_page + 1),
        gap(),
        page(total_pages),
    ]
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn month(label: &str, revenue: i64) -> revenue::Model {
        revenue::Model {
            month: label.to_string(),
            revenue,
        }
    }

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(25000), "$250.00");
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(99), "$0.99");
        assert_eq!(format_currency(16900), "$169.00");
    }

    #[test]
    fn test_format_currency_grouping() {
        assert_eq!(format_currency(200_000), "$2,000.00");
        assert_eq!(format_currency(123_456_789), "$1,234,567.89");
        assert_eq!(format_currency(100_000_00), "$100,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        // Amounts are non-negative at rest, but the formatter stays total.
        assert_eq!(format_currency(-25000), "-$250.00");
    }

    #[test]
    fn test_format_date_to_local() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        assert_eq!(format_date_to_local(date), "Dec 1, 2023");

        let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        assert_eq!(format_date_to_local(date), "Oct 15, 2023");
    }

    #[test]
    fn test_generate_y_axis_rounds_up_to_thousand() {
        let series = vec![month("Jan", 2000), month("Feb", 4800), month("Mar", 3500)];
        let (labels, top_label) = generate_y_axis(&series);

        assert_eq!(top_label, 5000);
        assert_eq!(labels.first().unwrap(), "$5K");
        assert_eq!(labels.last().unwrap(), "$0K");
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn test_generate_y_axis_empty_series() {
        let (labels, top_label) = generate_y_axis(&[]);
        assert_eq!(top_label, 0);
        assert_eq!(labels, vec!["$0K"]);
    }

    #[test]
    fn test_generate_pagination_short_range_lists_all() {
        assert_eq!(
            generate_pagination(2, 5),
            vec!["1", "2", "3", "4", "5"]
        );
        assert_eq!(generate_pagination(1, 1), vec!["1"]);
    }

    #[test]
    fn test_generate_pagination_near_start() {
        assert_eq!(
            generate_pagination(2, 10),
            vec!["1", "2", "3", "...", "9", "10"]
        );
    }

    #[test]
    fn test_generate_pagination_near_end() {
        assert_eq!(
            generate_pagination(9, 10),
            vec!["1", "2", "...", "8", "9", "10"]
        );
    }

    #[test]
    fn test_generate_pagination_middle() {
        assert_eq!(
            generate_pagination(5, 10),
            vec!["1", "...", "4", "5", "6", "...", "10"]
        );
    }
}
