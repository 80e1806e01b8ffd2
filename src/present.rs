use chrono::{Local, NaiveTime};
use itertools::Itertools;

use crate::schema::Slot;

const WIDTH: usize = 75;
const COLUMNS: [&str; 6] = ["Date", "Day", "Activity", "Place", "Time", "Court"];

fn cells(slot: &Slot) -> [String; 6] {
    [
        slot.date().format("%Y-%m-%d").to_string(),
        slot.date().format("%A").to_string(),
        slot.activity().clone(),
        slot.place().clone(),
        slot.time().to_string(),
        slot.court().clone(),
    ]
}

/// Timestamp banner followed by one row per slot.
pub fn render_report(slots: &[Slot], now: NaiveTime) -> String {
    let rule = "-".repeat(WIDTH);
    let title = format!("Results updated: {}", now.format("%H:%M:%S"));
    format!(
        "{rule}\n{title:^width$}\n{rule}\n{}",
        render_table(slots),
        width = WIDTH,
    )
}

pub fn render_table(slots: &[Slot]) -> String {
    let rows = slots.iter().map(cells).collect_vec();
    let index_width = rows.len().saturating_sub(1).to_string().len();
    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }
    let line = |index: &str, cells: &mut dyn Iterator<Item = &str>| {
        let cells = cells
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .join("  ");
        format!("{index:<index_width$}  {cells}")
            .trim_end()
            .to_owned()
    };

    let mut lines = vec![line("", &mut COLUMNS.into_iter())];
    if rows.is_empty() {
        lines.push("(no open slots)".to_owned());
    }
    for (i, row) in rows.iter().enumerate() {
        lines.push(line(&i.to_string(), &mut row.iter().map(String::as_str)));
    }
    lines.join("\n")
}

pub fn print_report(slots: &[Slot]) {
    println!("{}", render_report(slots, Local::now().time()));
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use itertools::Itertools;

    use super::{render_report, render_table};
    use crate::schema::Slot;

    fn padel() -> Slot {
        serde_json::from_str(
            r#"{"Date":"2024-05-10","Place":"Arena A","Activity":"Padel","Time":"18:00","Court":"1"}"#,
        )
        .unwrap()
    }

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 34, 56).unwrap()
    }

    #[test]
    fn single_row_has_weekday() {
        let report = render_report(&[padel()], noon());
        let lines = report.lines().collect_vec();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "-".repeat(75));
        assert_eq!(lines[1].trim(), "Results updated: 12:34:56");
        assert_eq!(lines[1].len(), 75);
        assert_eq!(lines[2], "-".repeat(75));
        assert_eq!(lines[3], "   Date        Day     Activity  Place    Time   Court");
        assert_eq!(lines[4], "0  2024-05-10  Friday  Padel     Arena A  18:00  1");
    }

    #[test]
    fn empty_input_still_has_headers() {
        let report = render_report(&[], noon());
        let lines = report.lines().collect_vec();
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("12:34:56"));
        assert_eq!(lines[3], "   Date  Day  Activity  Place  Time  Court");
        assert_eq!(lines[4], "(no open slots)");
    }

    #[test]
    fn columns_are_aligned() {
        let other = Slot::builder()
            .date(NaiveDate::from_ymd_opt(2024, 5, 12).unwrap())
            .place("Tapiolan Padel Espoo")
            .activity("Padel")
            .time("07:00")
            .court("Kenttä 10")
            .build();
        let mut slots = vec![padel(); 10];
        slots.push(other);
        let table = render_table(&slots);
        let lines = table.lines().collect_vec();
        assert_eq!(lines.len(), 12);
        assert!(lines[0].starts_with("    Date        Day     "));
        assert_eq!(
            lines[11],
            "10  2024-05-12  Sunday  Padel     Tapiolan Padel Espoo  07:00  Kenttä 10"
        );
        let place_column = lines[0].find("Place").unwrap();
        assert_eq!(&lines[11][place_column..place_column + 8], "Tapiolan");
    }
}
