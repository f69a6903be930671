//! Scoring module - line clear points, levels and gravity speed
//!
//! Classic flat rules:
//! - every cleared row is worth `points_per_line * level`
//! - the level starts at 1 and rises every `lines_per_level` lines
//! - the gravity interval shrinks linearly with the level down to a floor

use crate::types::EngineConfig;

/// Points for clearing `rows` rows at `level`.
pub fn line_clear_score(rows: u32, level: u32, points_per_line: u32) -> u32 {
    rows.saturating_mul(points_per_line).saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines. Always at least 1.
pub fn level_for_lines(total_lines: u32, lines_per_level: u32) -> u32 {
    total_lines / lines_per_level.max(1) + 1
}

/// Gravity interval for a level, in milliseconds.
pub fn fall_interval_ms(level: u32, config: &EngineConfig) -> u32 {
    let reduction = level
        .saturating_sub(1)
        .saturating_mul(config.fall_decrement_ms);
    config
        .base_fall_ms
        .saturating_sub(reduction)
        .max(config.fall_floor_ms)
}
