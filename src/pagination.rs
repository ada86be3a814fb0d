//! Pagination control descriptors.
//!
//! Builds the ordered list of page buttons for the current page: a sliding
//! window of up to [`MAX_VISIBLE_PAGES`] numbers centered on the current
//! page, with first/last page buttons and ellipsis markers for the gaps.
//! The descriptors are plain data; the presentation layer decides how to
//! draw them.

/// Maximum number of page buttons in the sliding window.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// One entry in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A page button; `active` marks the current page
    Page { number: usize, active: bool },
    /// Gap marker between non-adjacent page buttons
    Ellipsis,
}

/// The full set of pagination descriptors for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControls {
    /// Whether the Prev action is enabled (current page > 1)
    pub prev_enabled: bool,
    /// Whether the Next action is enabled (current page < total)
    pub next_enabled: bool,
    /// Ordered page buttons and ellipsis markers
    pub entries: Vec<PageEntry>,
}

/// Build pagination descriptors for `(current, total)`.
///
/// Returns `None` when `total <= 1`: no controls are rendered at all for a
/// single page.
pub fn build(current: usize, total: usize) -> Option<PageControls> {
    if total <= 1 {
        return None;
    }

    let start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = total.min(start + MAX_VISIBLE_PAGES - 1);
    // Slide the window back down when clamping against the last page
    // shortened it. Saturating: `current` past `total` (stale page after a
    // dataset shrink) puts start beyond end, and degrades to the final
    // window
    let start = if end.saturating_sub(start) + 1 < MAX_VISIBLE_PAGES {
        end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1)
    } else {
        start
    };

    let mut entries = Vec::new();

    if start > 1 {
        entries.push(PageEntry::Page {
            number: 1,
            active: current == 1,
        });
        if start > 2 {
            entries.push(PageEntry::Ellipsis);
        }
    }

    for number in start..=end {
        entries.push(PageEntry::Page {
            number,
            active: number == current,
        });
    }

    if end < total {
        if end < total - 1 {
            entries.push(PageEntry::Ellipsis);
        }
        entries.push(PageEntry::Page {
            number: total,
            active: current == total,
        });
    }

    Some(PageControls {
        prev_enabled: current > 1,
        next_enabled: current < total,
        entries,
    })
}
