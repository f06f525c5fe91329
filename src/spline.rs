use egui::Pos2;

/// The pair of cubic Bezier control points for one curve segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPair {
    /// Outgoing control point (leaves the segment's start knot)
    pub first: Pos2,
    /// Incoming control point (arrives at the segment's end knot)
    pub second: Pos2,
}

/// Fit piecewise cubic Bezier control points through a sequence of knots.
///
/// Returns one `ControlPair` per segment (`knots.len() - 1` pairs). The fitted
/// curve passes exactly through every knot and has a continuous first
/// derivative at interior knots, approximating a natural cubic spline.
///
/// Callers must supply at least two knots.
pub fn fit_control_points(knots: &[Pos2]) -> Vec<ControlPair> {
    debug_assert!(knots.len() >= 2, "spline fit requires at least two knots");

    let n = knots.len() - 1;

    // Special case: the bezier curve should be a straight line
    if n == 1 {
        // 3P1 = 2P0 + P3
        let first = Pos2::new(
            (2.0 * knots[0].x + knots[1].x) / 3.0,
            (2.0 * knots[0].y + knots[1].y) / 3.0,
        );
        // P2 = 2P1 - P0
        let second = Pos2::new(2.0 * first.x - knots[0].x, 2.0 * first.y - knots[0].y);
        return vec![ControlPair { first, second }];
    }

    // Right hand side vector, filled once per axis
    let mut rhs = vec![0.0f32; n];

    for i in 1..n - 1 {
        rhs[i] = 4.0 * knots[i].x + 2.0 * knots[i + 1].x;
    }
    rhs[0] = knots[0].x + 2.0 * knots[1].x;
    rhs[n - 1] = (8.0 * knots[n - 1].x + knots[n].x) / 2.0;
    let x = first_control_points(&rhs);

    for i in 1..n - 1 {
        rhs[i] = 4.0 * knots[i].y + 2.0 * knots[i + 1].y;
    }
    rhs[0] = knots[0].y + 2.0 * knots[1].y;
    rhs[n - 1] = (8.0 * knots[n - 1].y + knots[n].y) / 2.0;
    let y = first_control_points(&rhs);

    (0..n)
        .map(|i| {
            let first = Pos2::new(x[i], y[i]);
            let second = if i < n - 1 {
                // Mirror the next first control point across the shared knot
                Pos2::new(
                    2.0 * knots[i + 1].x - x[i + 1],
                    2.0 * knots[i + 1].y - y[i + 1],
                )
            } else {
                Pos2::new((knots[n].x + x[n - 1]) / 2.0, (knots[n].y + y[n - 1]) / 2.0)
            };
            ControlPair { first, second }
        })
        .collect()
}

/// Solve the tridiagonal system for the first control points of one axis.
///
/// Thomas algorithm: forward elimination then back substitution. The diagonal
/// coefficients are 2 at the first row, 4 at interior rows and 3.5 at the last
/// row, with off-diagonal 1, so the pivot never reaches zero.
fn first_control_points(rhs: &[f32]) -> Vec<f32> {
    let n = rhs.len();
    let mut x = vec![0.0f32; n]; // Solution vector
    let mut tmp = vec![0.0f32; n]; // Temp workspace

    let mut b = 2.0f32;
    x[0] = rhs[0] / b;

    // Decomposition and forward substitution
    for i in 1..n {
        tmp[i] = 1.0 / b;
        b = (if i < n - 1 { 4.0 } else { 3.5 }) - tmp[i];
        x[i] = (rhs[i] - x[i - 1]) / b;
    }

    // Back substitution
    for i in 1..n {
        x[n - i - 1] -= tmp[n - i] * x[n - i];
    }

    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_count_matches_segment_count() {
        for count in 2..10 {
            let knots: Vec<Pos2> = (0..count)
                .map(|i| Pos2::new(i as f32 * 10.0, (i % 3) as f32 * 5.0))
                .collect();
            let pairs = fit_control_points(&knots);
            assert_eq!(pairs.len(), count - 1);
        }
    }

    #[test]
    fn test_two_knot_straight_line() {
        let pairs = fit_control_points(&[Pos2::new(0.0, 0.0), Pos2::new(9.0, 0.0)]);
        assert_eq!(pairs.len(), 1);
        assert!((pairs[0].first.x - 3.0).abs() < 0.001);
        assert!(pairs[0].first.y.abs() < 0.001);
        assert!((pairs[0].second.x - 6.0).abs() < 0.001);
        assert!(pairs[0].second.y.abs() < 0.001);
    }

    #[test]
    fn test_collinear_knots_stay_on_line() {
        let knots = vec![
            Pos2::new(0.0, 0.0),
            Pos2::new(3.0, 0.0),
            Pos2::new(6.0, 0.0),
            Pos2::new(9.0, 0.0),
        ];
        for pair in fit_control_points(&knots) {
            assert!(pair.first.y.abs() < 0.001);
            assert!(pair.second.y.abs() < 0.001);
        }
    }

    #[test]
    fn test_interior_knots_have_opposed_tangents() {
        // Knots evenly spaced on a circle; at each interior knot the incoming
        // tangent (from the previous segment's second control point) and the
        // outgoing tangent (to the next segment's first control point) must be
        // collinear and oppositely oriented.
        let knots: Vec<Pos2> = (0..8)
            .map(|i| {
                let angle = i as f32 * std::f32::consts::PI / 7.0;
                Pos2::new(100.0 * angle.cos(), 100.0 * angle.sin())
            })
            .collect();
        let pairs = fit_control_points(&knots);

        for i in 1..knots.len() - 1 {
            let incoming = knots[i] - pairs[i - 1].second;
            let outgoing = pairs[i].first - knots[i];
            let cross = incoming.x * outgoing.y - incoming.y * outgoing.x;
            let dot = incoming.x * outgoing.x + incoming.y * outgoing.y;
            // Collinear (cross product near zero, relative to the magnitudes)
            assert!(
                cross.abs() < 0.01 * incoming.length() * outgoing.length(),
                "tangents not collinear at knot {i}: cross = {cross}"
            );
            // Same direction through the knot
            assert!(dot > 0.0, "tangent reverses at knot {i}");
        }
    }
}
