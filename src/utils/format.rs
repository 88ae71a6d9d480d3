use chrono::{DateTime, Local, Utc};

/// Formats a price in whole thousands, e.g. `$450K`. Halves round up.
pub fn format_thousands(amount: f64) -> String {
    format!("${:.0}K", (amount / 1_000.0).round())
}

/// Formats a value already scaled to millions with one decimal, e.g. `$2.0M`
pub fn format_millions(millions: f64) -> String {
    format!("${:.1}M", (millions * 10.0).round() / 10.0)
}

/// Groups digits in threes, e.g. `2,450`
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Turns a snake_case column value into a label: `first_time_buyer` -> `First Time Buyer`
pub fn humanize(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats a bathroom count without a trailing `.0` for whole numbers
pub fn format_baths(baths: f64) -> String {
    if baths.fract() == 0.0 {
        format!("{baths:.0}")
    } else {
        format!("{baths}")
    }
}

/// Short local date, e.g. `3/7/2025`
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}
