//! pt-BR display formatting for coins and distances.

/// Group thousands with `.`, e.g. `2750` → `2.750`.
pub fn format_coins(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

/// One decimal place with a decimal comma, e.g. `1.2` → `1,2`.
pub fn format_distance(km: f64) -> String {
    format!("{:.1}", km).replace('.', ",")
}

/// Signed ledger amount, e.g. `+300 Eco` or `-1.200 Eco`.
pub fn format_ledger_value(value: i64) -> String {
    let sign = if value >= 0 { '+' } else { '-' };
    format!("{}{} Eco", sign, format_coins(value.abs()))
}
