//! Pure progress-tracking logic: the symmetric lesson toggle and the
//! completion-percentage formula.
//!
//! The persistence side (`campus_db::repositories::ProgressRepo`) stores one
//! record per (user, course) pair and replaces the whole completed set on
//! every write. These functions are the only place the set is mutated or the
//! percentage derived, so the invariants live here:
//!
//! - toggling the same lesson twice restores the prior set exactly;
//! - `percent == 100 * completed / total`, recomputed against the course's
//!   *current* lesson count on every call (a teacher appending a lesson
//!   retroactively lowers everyone's percentage -- intended behaviour);
//! - a course with zero lessons is defined as 0% complete rather than NaN.

use crate::types::DbId;

/// Flip a lesson's completed state in the completed-lesson set.
///
/// If `lesson_id` is present it is removed; otherwise it is inserted in
/// ascending id order. Keeping the stored set canonically sorted makes the
/// toggle an exact involution: toggling any lesson twice reproduces the
/// prior stored array, not just the same membership.
pub fn toggle_lesson(completed: &[DbId], lesson_id: DbId) -> Vec<DbId> {
    let mut next: Vec<DbId> = completed.to_vec();
    match next.iter().position(|&id| id == lesson_id) {
        Some(idx) => {
            next.remove(idx);
        }
        None => {
            let idx = next
                .iter()
                .position(|&id| id > lesson_id)
                .unwrap_or(next.len());
            next.insert(idx, lesson_id);
        }
    }
    next
}

/// Percentage of a course completed, given the completed count and the
/// course's current total lesson count.
///
/// Computed as `100 * c / t` in that order, so the result is bit-identical
/// to the documented formula. Defined as 0.0 for `total_lessons <= 0` (an
/// empty course cannot be partially complete, and a negative count is a
/// caller bug we clamp rather than propagate as a non-finite float).
pub fn completion_percent(completed_count: usize, total_lessons: i64) -> f64 {
    if total_lessons <= 0 {
        return 0.0;
    }
    completed_count as f64 * 100.0 / total_lessons as f64
}
