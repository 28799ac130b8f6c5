use calendar_client_domain::{Appointment, Calendar};
use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Shows a server timestamp in `tz`. Values that are not RFC 3339 are
/// shown as they came.
pub fn format_time(raw: &str, parsed: Option<DateTime<FixedOffset>>, tz: Tz) -> String {
    match parsed {
        Some(time) => time.with_timezone(&tz).format(TIME_FORMAT).to_string(),
        None if raw.trim().is_empty() => "-".into(),
        None => raw.to_string(),
    }
}

fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<String>| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.iter().map(|h| h.to_string()).collect())];
    out.extend(rows.into_iter().map(line));
    out.join("\n")
}

fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        "-".into()
    } else {
        value.to_string()
    }
}

pub fn calendars_table(calendars: &[Calendar]) -> String {
    if calendars.is_empty() {
        return "No calendars found".into();
    }
    let rows = calendars
        .iter()
        .map(|c| vec![c.id.to_string(), or_dash(&c.name), or_dash(&c.status)])
        .collect();
    table(&["ID", "NAME", "STATUS"], rows)
}

pub fn calendar_details(calendar: &Calendar) -> String {
    format!(
        "{}\n  id:          {}\n  status:      {}\n  description: {}",
        or_dash(&calendar.name),
        calendar.id,
        or_dash(&calendar.status),
        or_dash(&calendar.description)
    )
}

pub fn events_table(events: &[Appointment], tz: Tz) -> String {
    if events.is_empty() {
        return "No appointments found".into();
    }
    let rows = events
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                or_dash(&e.title),
                e.status.to_string(),
                format_time(&e.start_time, e.start(), tz),
                format_time(&e.end_time, e.end(), tz),
            ]
        })
        .collect();
    table(&["ID", "TITLE", "STATUS", "START", "END"], rows)
}

/// One line summary used in prompts and after creating
pub fn appointment_line(event: &Appointment, tz: Tz) -> String {
    format!(
        "{} ({}) {}",
        or_dash(&event.title),
        format_time(&event.start_time, event.start(), tz),
        event.id
    )
}
