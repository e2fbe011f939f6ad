use super::constants::HEADER_OFFSET_PX;

/// Element id referenced by an in-page anchor, if any.
#[inline]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document scroll position that puts an element just below the fixed header.
#[inline]
pub fn scroll_offset(element_top: f64, page_y_offset: f64) -> f64 {
    element_top + page_y_offset - HEADER_OFFSET_PX
}
