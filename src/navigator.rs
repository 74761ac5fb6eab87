use crate::app::navigate_path;
use crate::errors::ControllerError;
use crate::models::CalendarPosition;
use crate::view::View;
use std::sync::Arc;
use tracing::{info, warn};

/// Moves `current` by `offset` months, carrying into the year.
///
/// A target beyond the range of `i32` years clamps to the first or last
/// month of the representable range.
pub fn compute_target(current: CalendarPosition, offset: i32) -> CalendarPosition {
    let index = i64::from(current.year) * 12 + i64::from(current.month) - 1 + i64::from(offset);
    let year = index.div_euclid(12);
    match i32::try_from(year) {
        Ok(year) => CalendarPosition {
            year,
            month: index.rem_euclid(12) as u32 + 1,
        },
        Err(_) => {
            warn!(from = %current, offset, "target month out of range, clamping");
            if year < 0 {
                CalendarPosition { year: i32::MIN, month: 1 }
            } else {
                CalendarPosition { year: i32::MAX, month: 12 }
            }
        }
    }
}

pub struct DateNavigator {
    view: Arc<dyn View>,
}

impl DateNavigator {
    pub fn new(view: Arc<dyn View>) -> Self {
        Self { view }
    }

    /// Navigates to the month `offset` months away and returns it.
    pub fn change_month(&self, current: CalendarPosition, offset: i32) -> CalendarPosition {
        let target = compute_target(current, offset);
        info!(from = %current, to = %target, offset, "changing month");
        self.view.navigate(&navigate_path(target));
        target
    }

    /// Same as [`change_month`](Self::change_month) for pages that only
    /// expose the `2024年1月` heading.
    pub fn change_month_from_heading(
        &self,
        heading: &str,
        offset: i32,
    ) -> Result<CalendarPosition, ControllerError> {
        let current = CalendarPosition::from_heading(heading)?;
        Ok(self.change_month(current, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RecordedView;

    fn position(year: i32, month: u32) -> CalendarPosition {
        CalendarPosition { year, month }
    }

    #[test]
    fn january_back_one_rolls_into_previous_year() {
        assert_eq!(compute_target(position(2024, 1), -1), position(2023, 12));
    }

    #[test]
    fn december_forward_one_rolls_into_next_year() {
        assert_eq!(compute_target(position(2024, 12), 1), position(2025, 1));
    }

    #[test]
    fn zero_offset_is_identity() {
        assert_eq!(compute_target(position(2024, 7), 0), position(2024, 7));
    }

    #[test]
    fn large_offsets_wrap_by_whole_years() {
        assert_eq!(compute_target(position(2024, 3), 25), position(2026, 4));
        assert_eq!(compute_target(position(2024, 3), -27), position(2021, 12));
        assert_eq!(compute_target(position(2024, 3), -14), position(2023, 1));
    }

    #[test]
    fn month_stays_in_range_for_any_offset() {
        for offset in -40..=40 {
            let target = compute_target(position(2000, 6), offset);
            assert!((1..=12).contains(&target.month), "offset {offset}");
            let months = i64::from(target.year) * 12 + i64::from(target.month);
            assert_eq!(months, 2000 * 12 + 6 + i64::from(offset));
        }
    }

    #[test]
    fn out_of_range_targets_clamp_to_the_nearest_end() {
        assert_eq!(compute_target(position(i32::MAX, 12), 1), position(i32::MAX, 12));
        assert_eq!(compute_target(position(i32::MAX, 11), 1), position(i32::MAX, 12));
        assert_eq!(compute_target(position(i32::MIN, 1), -1), position(i32::MIN, 1));
    }

    #[test]
    fn change_month_navigates_to_target() {
        let view = RecordedView::new();
        let navigator = DateNavigator::new(Arc::new(view.clone()));
        let target = navigator
            .change_month_from_heading("2024年1月", -1)
            .unwrap();
        assert_eq!(target, position(2023, 12));
        assert_eq!(view.snapshot().navigations, vec!["/?year=2023&month=12".to_string()]);
    }

    #[test]
    fn bad_heading_does_not_navigate() {
        let view = RecordedView::new();
        let navigator = DateNavigator::new(Arc::new(view.clone()));
        assert!(navigator.change_month_from_heading("calendar", 1).is_err());
        assert!(view.snapshot().navigations.is_empty());
    }
}
