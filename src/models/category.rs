use serde::Serialize;

const RESERVATION_CODE: &str = "9999999996";
const TRAINING_CODE: &str = "9999999980";
const LOA_CODES: [&str; 2] = ["9999999910", "9999999911"];
const PENDING_CODE: &str = "7777777777";

/// Semantic category of a job code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Chargeable,
    Absence,
    Reservation,
    Training,
    Loa,
    Pending,
    Other,
    Unknown,
}

impl Category {
    /// Classify a job code. Never fails: anything unmatched becomes
    /// `Other`, an empty or absent code becomes `Unknown`.
    pub fn classify(job_code: Option<&str>) -> Self {
        let code = match job_code.map(str::trim) {
            Some(c) if !c.is_empty() => c,
            _ => return Category::Unknown,
        };

        if code.chars().count() == 4 {
            return Category::Absence;
        }

        match code {
            RESERVATION_CODE => Category::Reservation,
            TRAINING_CODE => Category::Training,
            c if LOA_CODES.contains(&c) => Category::Loa,
            PENDING_CODE => Category::Pending,
            c if c.starts_with('2') => Category::Chargeable,
            _ => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Chargeable => "chargeable",
            Category::Absence => "absence",
            Category::Reservation => "reservation",
            Category::Training => "training",
            Category::Loa => "loa",
            Category::Pending => "pending",
            Category::Other => "other",
            Category::Unknown => "unknown",
        }
    }

    /// Human readable label used in CLI tables and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Chargeable => "Chargeable",
            Category::Absence => "Absence/Holidays",
            Category::Reservation => "Reservation w/o jobcode",
            Category::Training => "Training",
            Category::Loa => "LOA (Leave of Absence)",
            Category::Pending => "Pending jobcode",
            Category::Other => "Other",
            Category::Unknown => "Unknown",
        }
    }

    /// Which hour bucket this category feeds.
    pub fn bucket(&self) -> HourBucket {
        match self {
            Category::Chargeable => HourBucket::Chargeable,
            Category::Absence | Category::Loa => HourBucket::Absence,
            _ => HourBucket::Other,
        }
    }
}

/// Chargeable / absence-or-loa / everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourBucket {
    Chargeable,
    Absence,
    Other,
}
