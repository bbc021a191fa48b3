//! Static diaspora-location preference table.
//!
//! Each row maps an emotion category to its three preferred vault kinds,
//! most-preferred first. `Other` and unrecognized tags reuse the US rows.

use super::domain::DiasporaLocation;
use crate::workflows::emotion::EmotionCategory;

pub(crate) type PreferenceRow = (EmotionCategory, [&'static str; 3]);

const US_ROWS: [PreferenceRow; 4] = [
    (
        EmotionCategory::Pride,
        ["education", "livelihood", "solar_energy"],
    ),
    (
        EmotionCategory::Nostalgia,
        ["water", "solar_energy", "disaster_relief"],
    ),
    (
        EmotionCategory::Love,
        ["healthcare", "education", "livelihood"],
    ),
    (
        EmotionCategory::Hope,
        ["solar_energy", "education", "disaster_relief"],
    ),
];

const UAE_ROWS: [PreferenceRow; 4] = [
    (
        EmotionCategory::Pride,
        ["education", "livelihood", "solar_energy"],
    ),
    (
        EmotionCategory::Nostalgia,
        ["water", "agriculture", "livelihood"],
    ),
    (
        EmotionCategory::Love,
        ["healthcare", "education", "livelihood"],
    ),
    (
        EmotionCategory::Hope,
        ["solar_energy", "agriculture", "disaster_relief"],
    ),
];

const UK_ROWS: [PreferenceRow; 4] = [
    (
        EmotionCategory::Pride,
        ["education", "healthcare", "livelihood"],
    ),
    (
        EmotionCategory::Nostalgia,
        ["water", "solar_energy", "agriculture"],
    ),
    (
        EmotionCategory::Love,
        ["healthcare", "education", "livelihood"],
    ),
    (
        EmotionCategory::Hope,
        ["education", "healthcare", "disaster_relief"],
    ),
];

const CANADA_ROWS: [PreferenceRow; 4] = [
    (
        EmotionCategory::Pride,
        ["education", "healthcare", "livelihood"],
    ),
    (
        EmotionCategory::Nostalgia,
        ["water", "solar_energy", "disaster_relief"],
    ),
    (
        EmotionCategory::Love,
        ["education", "healthcare", "livelihood"],
    ),
    (
        EmotionCategory::Hope,
        ["education", "disaster_relief", "healthcare"],
    ),
];

const AUSTRALIA_ROWS: [PreferenceRow; 4] = [
    (
        EmotionCategory::Pride,
        ["education", "solar_energy", "livelihood"],
    ),
    (
        EmotionCategory::Nostalgia,
        ["water", "agriculture", "disaster_relief"],
    ),
    (
        EmotionCategory::Love,
        ["education", "healthcare", "livelihood"],
    ),
    (
        EmotionCategory::Hope,
        ["agriculture", "water", "disaster_relief"],
    ),
];

pub(crate) fn location_rows(location: DiasporaLocation) -> &'static [PreferenceRow; 4] {
    match location {
        DiasporaLocation::UnitedStates | DiasporaLocation::Other => &US_ROWS,
        DiasporaLocation::UnitedArabEmirates => &UAE_ROWS,
        DiasporaLocation::UnitedKingdom => &UK_ROWS,
        DiasporaLocation::Canada => &CANADA_ROWS,
        DiasporaLocation::Australia => &AUSTRALIA_ROWS,
    }
}

pub(crate) fn preferred_kinds(
    location: DiasporaLocation,
    category: EmotionCategory,
) -> &'static [&'static str; 3] {
    let rows = location_rows(location);
    let (_, kinds) = rows
        .iter()
        .find(|(row_category, _)| *row_category == category)
        .expect("preference table covers every category");
    kinds
}
