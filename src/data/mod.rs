/// Data layer: the recovery-report pipeline.
///
/// Architecture:
/// ```text
///  recovery report (.json)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse report → RecoveryDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ RecoveryDataset  │  Vec<RecoveryRecord> + Statistics
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌──────────┐
///   │  filter   │ ──▶ │   sort    │  criteria → ordered view indices
///   └──────────┘     └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  current view → CSV / JSON payload
///   └──────────┘
/// ```
///
/// `size` and `status` are pure utilities consumed by the filter, the sort,
/// and the presentation layer.
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod size;
pub mod sort;
pub mod status;
