use egui::{Pos2, Rect, Vec2};

/// Total length of a polyline, summed segment by segment
pub fn polyline_length(points: &[Pos2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Calculate the tight bounding box of a set of points (no padding)
pub fn tight_bounds(points: &[Pos2]) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(Pos2::new(min_x, min_y), Pos2::new(max_x, max_y))
}

/// Expand a rectangle outward by the same amount on all four sides
pub fn expand_rect(rect: Rect, amount: f32) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.min.x - amount, rect.min.y - amount),
        Pos2::new(rect.max.x + amount, rect.max.y + amount),
    )
}

/// Arc-length lookup over a flattened polyline.
///
/// Plays the role of a path measure: build it once from a polyline, then query
/// positions (and tangents) at arbitrary distances along the path. Distances
/// outside `[0, length]` clamp to the endpoints.
pub struct PathMeasure {
    points: Vec<Pos2>,
    /// Cumulative arc length at each point; same length as `points`
    cumulative: Vec<f32>,
}

impl PathMeasure {
    pub fn new(points: Vec<Pos2>) -> Self {
        let mut cumulative = Vec::with_capacity(points.len());
        let mut total = 0.0;
        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance(*point);
            }
            cumulative.push(total);
        }
        Self { points, cumulative }
    }

    /// Total arc length of the measured path
    pub fn length(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Position at the given arc-length distance from the start
    pub fn pos_at(&self, distance: f32) -> Pos2 {
        self.pos_tangent_at(distance).0
    }

    /// Position and unit tangent at the given arc-length distance from the start
    pub fn pos_tangent_at(&self, distance: f32) -> (Pos2, Vec2) {
        if self.points.len() < 2 {
            let pos = self.points.first().copied().unwrap_or(Pos2::ZERO);
            return (pos, Vec2::X);
        }

        let distance = distance.clamp(0.0, self.length());

        // Find the segment containing this distance
        let idx = match self
            .cumulative
            .binary_search_by(|c| c.partial_cmp(&distance).unwrap_or(std::cmp::Ordering::Less))
        {
            Ok(i) => i.min(self.points.len() - 2),
            Err(i) => i.saturating_sub(1).min(self.points.len() - 2),
        };

        let seg_start = self.points[idx];
        let seg_end = self.points[idx + 1];
        let seg_len = seg_start.distance(seg_end);

        let tangent = if seg_len > 0.0 {
            (seg_end - seg_start) / seg_len
        } else {
            Vec2::X
        };

        let pos = if seg_len > 0.0 {
            let t = (distance - self.cumulative[idx]) / seg_len;
            seg_start + (seg_end - seg_start) * t
        } else {
            seg_start
        };

        (pos, tangent)
    }
}
