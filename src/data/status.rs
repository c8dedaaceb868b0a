use std::fmt;

// ---------------------------------------------------------------------------
// Canonical status categories
// ---------------------------------------------------------------------------

/// Canonical category derived from a record's free-text status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Success,
    Failed,
    Skipped,
    Duplicate,
    Unknown,
}

/// Classification precedence: the first category whose term set matches wins.
/// `Unknown` carries no terms and is only ever the fall-through result.
pub const CLASSIFIED: [StatusCategory; 4] = [
    StatusCategory::Success,
    StatusCategory::Failed,
    StatusCategory::Skipped,
    StatusCategory::Duplicate,
];

impl StatusCategory {
    /// Case-insensitive substrings that mark a status as belonging to this
    /// category.
    pub fn terms(self) -> &'static [&'static str] {
        match self {
            StatusCategory::Success => &["success", "successfully recovered", "completed"],
            StatusCategory::Failed => &["failed", "error", "fail"],
            StatusCategory::Skipped => &["skipped", "already registered", "exists"],
            StatusCategory::Duplicate => &["duplicate", "duplicated"],
            StatusCategory::Unknown => &[],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusCategory::Success => "success",
            StatusCategory::Failed => "failed",
            StatusCategory::Skipped => "skipped",
            StatusCategory::Duplicate => "duplicate",
            StatusCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a free-text status string into its canonical category.
/// Precedence-ordered: the first matching category in [`CLASSIFIED`] wins.
pub fn classify(status: &str) -> StatusCategory {
    let lowered = status.to_lowercase();
    for category in CLASSIFIED {
        if category.terms().iter().any(|t| lowered.contains(t)) {
            return category;
        }
    }
    StatusCategory::Unknown
}

/// Term-membership test used by the status filter.
///
/// Deliberately independent of [`classify`]: filtering re-tests the term set
/// rather than reusing the precedence-ordered single category, so a status
/// matching terms from two categories passes both filters while classifying
/// as only the first.
pub fn matches_category(status: &str, category: StatusCategory) -> bool {
    let lowered = status.to_lowercase();
    category.terms().iter().any(|t| lowered.contains(t))
}
