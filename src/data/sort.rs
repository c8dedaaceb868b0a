use std::cmp::Ordering;

use super::model::{RecoveryDataset, RecoveryRecord};
use super::size;

// ---------------------------------------------------------------------------
// Sort state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Filename,
    Filepath,
    Status,
    Size,
    Details,
}

impl SortColumn {
    pub fn label(self) -> &'static str {
        match self {
            SortColumn::Filename => "Filename",
            SortColumn::Filepath => "Path",
            SortColumn::Status => "Status",
            SortColumn::Size => "Size",
            SortColumn::Details => "Details",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> SortDirection {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction. `column: None` means the view keeps
/// the dataset order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Two-state toggle: selecting the active column flips the direction,
    /// selecting a new column resets to ascending.
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.flipped();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }
}

// ---------------------------------------------------------------------------
// Natural string comparison
// ---------------------------------------------------------------------------

/// Case-insensitive comparison with numeric-substring awareness: digit runs
/// compare by magnitude, so `"file2"` sorts before `"file10"`.
///
/// Tie-break rules, pinned by tests: equal-magnitude digit runs order by
/// run length (fewer leading zeros first, `"a1" < "a01"`); an exhausted
/// string sorts before its extension (`"file" < "file2"`).
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let left: Vec<char> = left.to_lowercase().chars().collect();
    let right: Vec<char> = right.to_lowercase().chars().collect();

    let (mut i, mut j) = (0usize, 0usize);
    while i < left.len() && j < right.len() {
        let (lc, rc) = (left[i], right[j]);

        if lc.is_ascii_digit() && rc.is_ascii_digit() {
            let li = digit_run_end(&left, i);
            let rj = digit_run_end(&right, j);
            let lhs = strip_leading_zeros(&left[i..li]);
            let rhs = strip_leading_zeros(&right[j..rj]);

            // Magnitude: longer significant run is larger; equal lengths
            // compare digit-wise.
            let ord = lhs
                .len()
                .cmp(&rhs.len())
                .then_with(|| lhs.cmp(rhs))
                .then_with(|| (li - i).cmp(&(rj - j)));
            if ord != Ordering::Equal {
                return ord;
            }
            i = li;
            j = rj;
        } else {
            let ord = lc.cmp(&rc);
            if ord != Ordering::Equal {
                return ord;
            }
            i += 1;
            j += 1;
        }
    }

    (left.len() - i).cmp(&(right.len() - j))
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    end
}

fn strip_leading_zeros(run: &[char]) -> &[char] {
    let first = run.iter().position(|&c| c != '0').unwrap_or(run.len() - 1);
    &run[first..]
}

// ---------------------------------------------------------------------------
// View ordering
// ---------------------------------------------------------------------------

fn column_text(record: &RecoveryRecord, column: SortColumn) -> &str {
    match column {
        SortColumn::Filename => &record.filename,
        SortColumn::Filepath => &record.filepath,
        SortColumn::Status => &record.status,
        SortColumn::Details => &record.details,
        // Size is compared numerically, never through this accessor.
        SortColumn::Size => "",
    }
}

/// Order view indices by the active sort.
///
/// The sort is stable: equal keys keep their relative dataset order.
/// Descending is the exact reversal of the ascending output rather than a
/// re-derived comparator, so `sort(desc) == reverse(sort(asc))` holds even
/// across ties.
pub fn sort_indices(dataset: &RecoveryDataset, indices: &mut [usize], sort: SortState) {
    let Some(column) = sort.column else {
        return;
    };

    match column {
        SortColumn::Size => {
            indices.sort_by_key(|&i| size::parse(&dataset.results[i].size));
        }
        _ => {
            indices.sort_by(|&a, &b| {
                natural_cmp(
                    column_text(&dataset.results[a], column),
                    column_text(&dataset.results[b], column),
                )
            });
        }
    }

    if sort.direction == SortDirection::Descending {
        indices.reverse();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SizeValue;

    fn record(filename: &str, status: &str, size: SizeValue) -> RecoveryRecord {
        RecoveryRecord {
            filename: filename.to_string(),
            filepath: format!("/models/{filename}"),
            status: status.to_string(),
            size,
            details: String::new(),
            model_id: None,
            version_id: None,
            model_name: None,
            duplicate_files: Vec::new(),
        }
    }

    fn dataset(records: Vec<RecoveryRecord>) -> RecoveryDataset {
        RecoveryDataset {
            results: records,
            statistics: Default::default(),
        }
    }

    fn sorted(ds: &RecoveryDataset, column: SortColumn, direction: SortDirection) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..ds.len()).collect();
        sort_indices(
            ds,
            &mut indices,
            SortState {
                column: Some(column),
                direction,
            },
        );
        indices
    }

    #[test]
    fn numeric_runs_compare_by_magnitude() {
        assert_eq!(natural_cmp("file2", "file10"), Ordering::Less);
        assert_eq!(natural_cmp("file10", "file2"), Ordering::Greater);
        assert_eq!(natural_cmp("v1.2", "v1.10"), Ordering::Less);
    }

    #[test]
    fn comparison_is_case_insensitive() {
        assert_eq!(natural_cmp("Alpha", "alpha"), Ordering::Equal);
        assert_eq!(natural_cmp("ALPHA", "beta"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_break_magnitude_ties() {
        assert_eq!(natural_cmp("a1", "a01"), Ordering::Less);
        assert_eq!(natural_cmp("a01", "a001"), Ordering::Less);
        assert_eq!(natural_cmp("a01b", "a1b"), Ordering::Greater);
    }

    #[test]
    fn prefix_sorts_before_extension() {
        assert_eq!(natural_cmp("file", "file2"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn filename_sort_is_natural() {
        let ds = dataset(vec![
            record("model_10.safetensors", "Success", SizeValue::Bytes(1)),
            record("model_2.safetensors", "Success", SizeValue::Bytes(1)),
            record("model_1.safetensors", "Success", SizeValue::Bytes(1)),
        ]);
        assert_eq!(
            sorted(&ds, SortColumn::Filename, SortDirection::Ascending),
            vec![2, 1, 0]
        );
    }

    #[test]
    fn size_sort_parses_mixed_representations() {
        let ds = dataset(vec![
            record("a", "Success", SizeValue::Text("1.5 GB".into())),
            record("b", "Success", SizeValue::Bytes(1024)),
            record("c", "Success", SizeValue::Text("200 MB".into())),
        ]);
        assert_eq!(
            sorted(&ds, SortColumn::Size, SortDirection::Ascending),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn descending_is_exact_reverse_of_ascending() {
        let ds = dataset(vec![
            record("b", "Failed", SizeValue::Bytes(10)),
            record("a", "Success", SizeValue::Bytes(30)),
            record("c", "Skipped", SizeValue::Bytes(20)),
            record("a", "Duplicate", SizeValue::Bytes(30)),
        ]);
        for column in [
            SortColumn::Filename,
            SortColumn::Filepath,
            SortColumn::Status,
            SortColumn::Size,
            SortColumn::Details,
        ] {
            let asc = sorted(&ds, column, SortDirection::Ascending);
            let mut reversed = asc.clone();
            reversed.reverse();
            assert_eq!(
                sorted(&ds, column, SortDirection::Descending),
                reversed,
                "column {column:?}"
            );
        }
    }

    #[test]
    fn equal_keys_keep_dataset_order() {
        let ds = dataset(vec![
            record("same", "Success", SizeValue::Bytes(5)),
            record("same", "Failed", SizeValue::Bytes(5)),
            record("aaa", "Skipped", SizeValue::Bytes(5)),
            record("same", "Duplicate", SizeValue::Bytes(5)),
        ]);
        assert_eq!(
            sorted(&ds, SortColumn::Filename, SortDirection::Ascending),
            vec![2, 0, 1, 3]
        );
        // All sizes equal: order untouched.
        assert_eq!(
            sorted(&ds, SortColumn::Size, SortDirection::Ascending),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn toggle_flips_and_resets() {
        let mut state = SortState::default();
        state.toggle(SortColumn::Filename);
        assert_eq!(state.column, Some(SortColumn::Filename));
        assert_eq!(state.direction, SortDirection::Ascending);

        state.toggle(SortColumn::Filename);
        assert_eq!(state.direction, SortDirection::Descending);

        state.toggle(SortColumn::Size);
        assert_eq!(state.column, Some(SortColumn::Size));
        assert_eq!(state.direction, SortDirection::Ascending);
    }
}
