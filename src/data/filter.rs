use super::model::{RecoveryDataset, RecoveryRecord};
use super::size;
use super::status::{self, StatusCategory};

// ---------------------------------------------------------------------------
// Size buckets
// ---------------------------------------------------------------------------

const MIB: u64 = 1024 * 1024;
const GIB: u64 = 1024 * MIB;

/// Coarse size class derived from the parsed byte size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    Small,
    Medium,
    Large,
    Xlarge,
}

pub const BUCKETS: [SizeBucket; 4] = [
    SizeBucket::Small,
    SizeBucket::Medium,
    SizeBucket::Large,
    SizeBucket::Xlarge,
];

impl SizeBucket {
    /// Bucket for a byte count. Boundaries are inclusive on the upper side:
    /// exactly 100 MiB is Medium, exactly 1 GiB is Large, exactly 5 GiB is
    /// Xlarge.
    pub fn of(bytes: u64) -> SizeBucket {
        if bytes < 100 * MIB {
            SizeBucket::Small
        } else if bytes < GIB {
            SizeBucket::Medium
        } else if bytes < 5 * GIB {
            SizeBucket::Large
        } else {
            SizeBucket::Xlarge
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
            SizeBucket::Xlarge => "xlarge",
        }
    }

    /// Range description shown in the filter combo.
    pub fn description(self) -> &'static str {
        match self {
            SizeBucket::Small => "< 100 MB",
            SizeBucket::Medium => "100 MB – 1 GB",
            SizeBucket::Large => "1 – 5 GB",
            SizeBucket::Xlarge => "≥ 5 GB",
        }
    }
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Category(StatusCategory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeFilter {
    #[default]
    All,
    Bucket(SizeBucket),
}

/// The active filter criteria. Default criteria pass every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free-text search; empty means no constraint.
    pub search: String,
    pub status: StatusFilter,
    pub size: SizeFilter,
}

// ---------------------------------------------------------------------------
// Predicate application
// ---------------------------------------------------------------------------

/// Whether a single record passes all active (non-default) criteria.
pub fn record_passes(record: &RecoveryRecord, criteria: &FilterCriteria) -> bool {
    if !criteria.search.is_empty() {
        let needle = criteria.search.to_lowercase();
        let haystack = format!(
            "{} {} {} {}",
            record.filename, record.filepath, record.details, record.status
        )
        .to_lowercase();
        if !haystack.contains(&needle) {
            return false;
        }
    }

    if let StatusFilter::Category(category) = criteria.status {
        if !status::matches_category(&record.status, category) {
            return false;
        }
    }

    if let SizeFilter::Bucket(bucket) = criteria.size {
        if SizeBucket::of(size::parse(&record.size)) != bucket {
            return false;
        }
    }

    true
}

/// Return indices of records that pass all active filters.
///
/// Pure and deterministic in (records, criteria); input records are never
/// mutated.
pub fn filtered_indices(dataset: &RecoveryDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .results
        .iter()
        .enumerate()
        .filter(|(_, record)| record_passes(record, criteria))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SizeValue;

    fn record(filename: &str, status: &str, size: SizeValue, details: &str) -> RecoveryRecord {
        RecoveryRecord {
            filename: filename.to_string(),
            filepath: format!("/models/{filename}"),
            status: status.to_string(),
            size,
            details: details.to_string(),
            model_id: None,
            version_id: None,
            model_name: None,
            duplicate_files: Vec::new(),
        }
    }

    fn dataset() -> RecoveryDataset {
        RecoveryDataset {
            results: vec![
                record(
                    "alpha.safetensors",
                    "Success",
                    SizeValue::Text("2.0 GB".into()),
                    "recovered from hash",
                ),
                record(
                    "beta.ckpt",
                    "Failed",
                    SizeValue::Bytes(50 * MIB),
                    "no match on CivitAI",
                ),
                record(
                    "gamma.safetensors",
                    "File already exists",
                    SizeValue::Text("150 MB".into()),
                    "",
                ),
            ],
            statistics: Default::default(),
        }
    }

    #[test]
    fn default_criteria_pass_everything() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &FilterCriteria::default()), vec![0, 1, 2]);
    }

    #[test]
    fn search_spans_all_text_fields() {
        let ds = dataset();
        let by_details = FilterCriteria {
            search: "civitai".into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &by_details), vec![1]);

        let by_path = FilterCriteria {
            search: "/models/alpha".into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &by_path), vec![0]);

        let by_status = FilterCriteria {
            search: "EXISTS".into(),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &by_status), vec![2]);
    }

    #[test]
    fn status_filter_uses_term_membership() {
        let ds = dataset();
        let criteria = FilterCriteria {
            status: StatusFilter::Category(StatusCategory::Skipped),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![2]);
    }

    #[test]
    fn size_filter_buckets_parsed_sizes() {
        let ds = dataset();
        let criteria = FilterCriteria {
            size: SizeFilter::Bucket(SizeBucket::Large),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);

        let criteria = FilterCriteria {
            size: SizeFilter::Bucket(SizeBucket::Medium),
            ..Default::default()
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![2]);
    }

    #[test]
    fn criteria_combine_conjunctively() {
        let ds = dataset();
        let criteria = FilterCriteria {
            search: "safetensors".into(),
            status: StatusFilter::Category(StatusCategory::Success),
            size: SizeFilter::Bucket(SizeBucket::Large),
        };
        assert_eq!(filtered_indices(&ds, &criteria), vec![0]);

        let contradictory = FilterCriteria {
            search: "safetensors".into(),
            status: StatusFilter::Category(StatusCategory::Failed),
            ..Default::default()
        };
        assert!(filtered_indices(&ds, &contradictory).is_empty());
    }

    #[test]
    fn bucket_boundaries_are_exact() {
        assert_eq!(SizeBucket::of(100 * MIB - 1), SizeBucket::Small);
        assert_eq!(SizeBucket::of(100 * MIB), SizeBucket::Medium);
        assert_eq!(SizeBucket::of(GIB - 1), SizeBucket::Medium);
        assert_eq!(SizeBucket::of(GIB), SizeBucket::Large);
        assert_eq!(SizeBucket::of(5 * GIB - 1), SizeBucket::Large);
        assert_eq!(SizeBucket::of(5 * GIB), SizeBucket::Xlarge);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = dataset();
        let criteria = FilterCriteria {
            search: "safetensors".into(),
            ..Default::default()
        };
        let once = filtered_indices(&ds, &criteria);

        // Re-filter the already-filtered subsequence with the same criteria.
        let filtered = RecoveryDataset {
            results: once.iter().map(|&i| ds.results[i].clone()).collect(),
            statistics: Default::default(),
        };
        let twice = filtered_indices(&filtered, &criteria);
        assert_eq!(twice.len(), once.len());
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }
}
