//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// `12.5h`
pub fn hours(h: f64) -> String {
    format!("{:.1}h", h)
}

/// `87.5%`
pub fn rate(r: f64) -> String {
    format!("{:.1}%", r)
}

/// Fixed-width text bar for a utilization rate, capped at 100%.
pub fn rate_bar(r: f64, width: usize) -> String {
    let filled = ((r.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

pub fn separator(ch: &str, len: usize) -> String {
    ch.repeat(len)
}
