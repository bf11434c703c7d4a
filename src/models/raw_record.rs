use serde::Serialize;

/// One row as delivered by the spreadsheet/CSV loader.
///
/// Text fields are `None` when the cell was empty. `working_days`,
/// `hours_total`, `util_percent` and `hours` are carried through untouched:
/// no aggregation consumes them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RawAssignmentRecord {
    pub emp_id: String,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub job_code: Option<String>,
    pub job_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub utilization: f64,
    pub status: Option<String>,
    pub hours: f64,
    pub start_date_parsed: Option<String>,
    pub end_date_parsed: Option<String>,
    pub util_percent: Option<String>,
    pub working_days: f64,
    pub hours_total: f64,
    pub hours_per_day: f64,
}

impl RawAssignmentRecord {
    /// Build a record from the 16 positional cells of a row.
    /// Missing trailing cells are treated as empty.
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let text = |i: usize| -> Option<String> {
            cells
                .get(i)
                .map(|c| c.as_ref().trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
        };
        let number = |i: usize| -> f64 { cells.get(i).map_or(0.0, |c| parse_lenient_f64(c.as_ref())) };

        Self {
            emp_id: text(0).unwrap_or_default(),
            last_name: text(1),
            first_name: text(2),
            job_code: text(3),
            job_name: text(4),
            start_date: text(5),
            end_date: text(6),
            utilization: number(7),
            status: text(8),
            hours: number(9),
            start_date_parsed: text(10),
            end_date_parsed: text(11),
            util_percent: text(12),
            working_days: number(13),
            hours_total: number(14),
            hours_per_day: number(15),
        }
    }

    /// Start/end pair to normalize: the alternate "parsed" pair when both of
    /// its sides are present, otherwise the primary pair.
    pub fn preferred_dates(&self) -> (Option<&str>, Option<&str>) {
        match (&self.start_date_parsed, &self.end_date_parsed) {
            (Some(s), Some(e)) => (Some(s.as_str()), Some(e.as_str())),
            _ => (self.start_date.as_deref(), self.end_date.as_deref()),
        }
    }

    /// `"<first> <last>"`, tolerating missing parts.
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

/// Parse the longest leading numeric prefix of `s` (`"80%"` → 80.0).
/// Anything without a numeric prefix is 0.
pub fn parse_lenient_f64(s: &str) -> f64 {
    let s = s.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }

    if !seen_digit {
        return 0.0;
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
