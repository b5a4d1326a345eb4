//! Human-readable byte counts and thousands-separated counts.
//!
//! Sizes stay `u64` everywhere; floating point appears only here, at the
//! display boundary.

/// Binary unit ladder, labelled with the short forms people expect.
const UNITS: [(&str, u32); 4] = [("TB", 40), ("GB", 30), ("MB", 20), ("KB", 10)];

/// Format a byte count with the largest unit that keeps the value ≥ 1.
///
/// KB and MB get one decimal, GB and TB two; anything under 1 KiB is
/// printed exactly.
pub fn format_size(bytes: u64) -> String {
    for (label, shift) in UNITS {
        let unit = 1u64 << shift;
        if bytes >= unit {
            let scaled = bytes as f64 / unit as f64;
            return if shift >= 30 {
                format!("{scaled:.2} {label}")
            } else {
                format!("{scaled:.1} {label}")
            };
        }
    }
    format!("{bytes} B")
}

/// Format a count with `,` every three digits.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
