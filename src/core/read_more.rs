/// Global name the page's inline `onclick` handlers call.
pub const INLINE_HANDLER: &str = "toggleReadMore";

/// Display values for one "read more" block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadMoreView {
    pub dots_display: &'static str,
    pub more_display: &'static str,
    pub label: &'static str,
}

/// The block is considered collapsed unless its dots are explicitly hidden.
#[inline]
pub fn is_expanded(dots_display: &str) -> bool {
    dots_display == "none"
}

/// View after a toggle, given whether the block was expanded before.
pub fn toggled(expanded: bool) -> ReadMoreView {
    if expanded {
        ReadMoreView {
            dots_display: "inline",
            more_display: "none",
            label: "Read More",
        }
    } else {
        ReadMoreView {
            dots_display: "none",
            more_display: "block",
            label: "Read Less",
        }
    }
}
