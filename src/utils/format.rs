use chrono::{DateTime, Utc};

/// Separador de miles estilo en-US: 1234567 → "1,234,567"
pub fn format_points(points: i64) -> String {
    let digits = points.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if points < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 1 → "1st", 2 → "2nd", 11 → "11th", 22 → "22nd"
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", rank, suffix)
}

/// Premio en rupias con dos decimales
pub fn format_prize(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Fecha corta estilo en-US (M/D/YYYY)
pub fn format_history_date(date: &DateTime<Utc>) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
