//! Fixed-width text helpers shared by the renderers

/// Format with 2 decimals and thousands separators: 1,234.56
pub fn grouped(val: f64) -> String {
    let negative = val < 0.0;
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    // -0.00 prints without a sign
    if negative && cents != "0.00" {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Dollar amount right-aligned after the `$`: `$  1,234.56` for width 9
pub fn money(val: f64, width: usize) -> String {
    format!("${:>width$}", grouped(val))
}

/// Truncate to `max` characters (not bytes)
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Truncate or pad with spaces to exactly `width` characters
pub fn fit(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width))
}
