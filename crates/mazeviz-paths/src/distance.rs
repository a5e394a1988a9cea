use mazeviz_core::Point;

/// Weight of the cross-product tie-breaker added to the A* score.
pub const TIE_BREAK_WEIGHT: f64 = 0.001;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Tie-breaker that grows with the distance of `p` from the straight line
/// through `start` and `end`: `0.001 * |(p - end) × (start - end)|`.
///
/// Always below 1 on boards narrower than a thousand cells, so it only
/// reorders cells whose Manhattan estimates are equal.
#[inline]
pub fn cross_tie_breaker(p: Point, start: Point, end: Point) -> f64 {
    let d1 = p - end;
    let d2 = start - end;
    let cross = i64::from(d1.x) * i64::from(d2.y) - i64::from(d2.x) * i64::from(d1.y);
    cross.abs() as f64 * TIE_BREAK_WEIGHT
}
