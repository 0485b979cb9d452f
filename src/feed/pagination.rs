//! Page windows and page slicing.
//!
//! The window always starts with a `Prev` button and ends with a `Next`
//! button. Between them are page buttons, compressed with ellipses once the
//! page count exceeds `max_buttons`:
//!
//! ```text
//! total <= max_buttons:  ‹ 1 2 [3] 4 5 ›
//! compressed:            ‹ 1 … 4 [5] 6 … 12 ›
//! ```

use serde::Serialize;

/// Default upper bound on page buttons.
pub const DEFAULT_MAX_BUTTONS: usize = 7;

/// Smallest `max_buttons` for which the compressed layout fits the bound.
pub const MIN_MAX_BUTTONS: usize = 5;

/// One entry of the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ButtonSpec {
    Prev {
        target_page: usize,
        disabled: bool,
    },
    Page {
        number: usize,
        active: bool,
        disabled: bool,
    },
    Ellipsis,
    Next {
        target_page: usize,
        disabled: bool,
    },
}

impl ButtonSpec {
    /// The page a click navigates to. Disabled buttons and ellipses do nothing.
    ///
    /// `active` does not disable a page button; clicking it re-renders the
    /// same page.
    pub fn target(&self) -> Option<usize> {
        match *self {
            ButtonSpec::Prev {
                target_page,
                disabled: false,
            }
            | ButtonSpec::Next {
                target_page,
                disabled: false,
            } => Some(target_page),
            ButtonSpec::Page {
                number,
                disabled: false,
                ..
            } => Some(number),
            _ => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, ButtonSpec::Ellipsis)
    }

    /// Whether this is a numbered page or an ellipsis (not prev/next).
    pub fn is_window_entry(&self) -> bool {
        matches!(self, ButtonSpec::Page { .. } | ButtonSpec::Ellipsis)
    }
}

/// Number of pages for `count` items; at least 1 so page 1 always exists.
pub fn total_pages(count: usize, per_page: usize) -> usize {
    count.div_ceil(per_page.max(1)).max(1)
}

/// Clamp any integer page into `[1, total]` (`total == 0` counts as 1).
pub fn clamp_page(page: i64, total: usize) -> usize {
    let total = total.max(1);
    if page < 1 {
        1
    } else {
        usize::try_from(page).map_or(total, |p| p.min(total))
    }
}

/// Compute the pagination controls for a pre-clamped `current` page.
pub fn compute_window(current: usize, total: usize, max_buttons: usize) -> Vec<ButtonSpec> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let max_buttons = max_buttons.max(MIN_MAX_BUTTONS);

    let mut buttons = Vec::with_capacity(max_buttons + 4);
    buttons.push(ButtonSpec::Prev {
        target_page: current.saturating_sub(1).max(1),
        disabled: current == 1,
    });

    let page = |number: usize| ButtonSpec::Page {
        number,
        active: number == current,
        disabled: false,
    };

    if total <= max_buttons {
        buttons.extend((1..=total).map(page));
    } else {
        buttons.push(page(1));
        if current.saturating_sub(1) > 2 {
            buttons.push(ButtonSpec::Ellipsis);
        }
        let start = current.saturating_sub(1).max(2);
        let end = (current + 1).min(total - 1);
        buttons.extend((start..=end).map(page));
        if current + 1 < total - 1 {
            buttons.push(ButtonSpec::Ellipsis);
        }
        buttons.push(page(total));
    }

    buttons.push(ButtonSpec::Next {
        target_page: (current + 1).min(total),
        disabled: current == total,
    });
    buttons
}

/// The items shown on `page`. Never panics, whatever the page number.
pub fn slice<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    let per_page = per_page.max(1);
    let page = clamp_page(page, total_pages(items.len(), per_page));
    let start = ((page - 1) * per_page).min(items.len());
    let end = (start + per_page).min(items.len());
    &items[start..end]
}
