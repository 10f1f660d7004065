use crate::math::VectorMath;

/// Tests whether two centers are closer than `threshold` on both axes.
#[inline]
pub fn test_proximity(a: [f32; 2], b: [f32; 2], threshold: [f32; 2]) -> bool {
    let [dx, dy] = a.sub(b).abs();
    dx < threshold[0] && dy < threshold[1]
}

/// Signed direction along x from `from` to `to`, left wins ties.
#[inline]
pub fn horizontal_direction(from: f32, to: f32) -> f32 {
    if to >= from {
        1.0
    } else {
        -1.0
    }
}
