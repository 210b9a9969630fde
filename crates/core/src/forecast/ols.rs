//! Closed-form ordinary least squares over `(day_offset, amount)` pairs.

/// `amount ≈ slope * day_offset + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub n_observations: usize,
    pub r_squared: f64,
}

impl TrendLine {
    /// Fits a line through `points`. Returns `None` only for an empty input.
    ///
    /// When every point shares one day offset (a single observation included) the slope is
    /// undefined; the line is then flat at the mean amount.
    pub fn fit(points: &[(i64, f64)]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let n = points.len();
        let nf = n as f64;

        // x sums stay integral so the singular case is detected exactly.
        let mut sum_x: i128 = 0;
        let mut sum_x2: i128 = 0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        for &(x, y) in points {
            let xi = i128::from(x);
            sum_x += xi;
            sum_x2 += xi * xi;
            sum_y += y;
            sum_xy += x as f64 * y;
        }

        let denominator = n as i128 * sum_x2 - sum_x * sum_x;
        let (slope, intercept) = if denominator == 0 {
            (0.0, sum_y / nf)
        } else {
            let slope = (nf * sum_xy - sum_x as f64 * sum_y) / denominator as f64;
            (slope, (sum_y - slope * sum_x as f64) / nf)
        };

        let mean_y = sum_y / nf;
        let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = points
            .iter()
            .map(|&(x, y)| (y - (slope * x as f64 + intercept)).powi(2))
            .sum();
        let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

        Some(Self {
            slope,
            intercept,
            n_observations: n,
            r_squared,
        })
    }

    pub fn predict_at(&self, day_offset: i64) -> f64 {
        self.slope * day_offset as f64 + self.intercept
    }
}
