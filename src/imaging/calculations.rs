//! Pure calculation functions for canvas fitting.
//!
//! All functions here are pure and testable without any I/O or images.
//! Aspect ratios are compared by cross-multiplication in `u64`, which is the
//! real-valued comparison `W/H` vs `tw/th` without float rounding.

use std::cmp::Ordering;

/// Compare the aspect ratio of `source` against `target`.
///
/// `Greater` means the source is relatively wider than the target.
pub fn compare_aspect(source: (u32, u32), target: (u32, u32)) -> Ordering {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    (src_w as u64 * tgt_h as u64).cmp(&(tgt_w as u64 * src_h as u64))
}

/// Calculate dimensions that fit inside a target area (resize before pad).
///
/// One dimension matches the target exactly, the other is floored and may
/// fall short. A side that floors to 0 is clamped to 1.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `target` - Canvas dimensions (width, height)
///
/// # Returns
/// * `(width, height)` - Fitted dimensions, never larger than the canvas
///
/// # Examples
/// ```
/// # use letterbox::imaging::calculate_fit_dimensions;
/// // 1:1 source on a 4:3 canvas → pillarboxed 300x300
/// assert_eq!(calculate_fit_dimensions((400, 400), (400, 300)), (300, 300));
///
/// // 16:9 source on a 4:3 canvas → letterboxed 400x225
/// assert_eq!(calculate_fit_dimensions((1920, 1080), (400, 300)), (400, 225));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    match compare_aspect(source, target) {
        Ordering::Greater => {
            // Source is wider: width matches, height = floor(tw * H / W)
            let h = (tgt_w as u64 * src_h as u64 / src_w as u64) as u32;
            (tgt_w, h.max(1))
        }
        Ordering::Less => {
            // Source is taller: height matches, width = floor(th * W / H)
            let w = (tgt_h as u64 * src_w as u64 / src_h as u64) as u32;
            (w.max(1), tgt_h)
        }
        Ordering::Equal => (tgt_w, tgt_h),
    }
}

/// Offset that centers `inner` on `outer`, flooring odd remainders.
///
/// The padding before the image is never larger than the padding after it,
/// and the two differ by at most one pixel.
pub fn calculate_center_offset(inner: (u32, u32), outer: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}
