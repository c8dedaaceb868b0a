use eframe::egui::Color32;

use crate::data::status::StatusCategory;

// ---------------------------------------------------------------------------
// Status badge colors
// ---------------------------------------------------------------------------

/// Badge color for a status category: green success, red failed, yellow
/// skipped, blue duplicate, gray for anything unclassified.
pub fn badge_color(category: StatusCategory) -> Color32 {
    match category {
        StatusCategory::Success => Color32::from_rgb(144, 238, 144),
        StatusCategory::Failed => Color32::from_rgb(255, 182, 193),
        StatusCategory::Skipped => Color32::from_rgb(255, 255, 224),
        StatusCategory::Duplicate => Color32::from_rgb(173, 216, 230),
        StatusCategory::Unknown => Color32::GRAY,
    }
}
