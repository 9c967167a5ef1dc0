//! Pagination helper.
//!
//! Pages are fixed-size, contiguous, 1-indexed slices of the full
//! question list. Slicing never mutates anything; an out-of-range page
//! (including page 0) is simply an empty slice, and the caller decides
//! what that means.

/// Questions returned per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice one page out of an ordered sequence.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = QUESTIONS_PER_PAGE * (page - 1);
    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}
