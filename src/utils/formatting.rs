//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Comma-grouped integer: 1500000 → "1,500,000".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Contract value in Rupiah: 1500000 → "Rp 1,500,000".
pub fn format_rupiah(value: u64) -> String {
    format!("Rp {}", group_thousands(value))
}

/// Completion percentage as entered: 40 → "40%".
pub fn format_percent(percent: u8) -> String {
    format!("{}%", percent)
}
