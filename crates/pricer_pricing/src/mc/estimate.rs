//! Monte Carlo estimate and running payoff statistics.

/// Discounted Monte Carlo price with its standard error.
///
/// Deterministic methods report a standard error of zero.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::McEstimate;
///
/// let estimate = McEstimate { price: 10.0, std_error: 0.1 };
/// assert!((estimate.confidence_95() - 0.196).abs() < 1e-12);
/// assert_eq!(McEstimate::exact(5.0).std_error, 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct McEstimate {
    /// Present value of the instrument.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl McEstimate {
    /// Estimate with no sampling error.
    #[inline]
    pub fn exact(price: f64) -> Self {
        Self {
            price,
            std_error: 0.0,
        }
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running sum and sum of squares of undiscounted path payoffs.
#[derive(Clone, Copy, Debug, Default)]
pub struct PayoffStats {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PayoffStats {
    /// Records one path payoff.
    #[inline]
    pub fn push(&mut self, payoff: f64) {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
        self.count += 1;
    }

    /// Number of recorded payoffs.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Discounted mean and standard error.
    ///
    /// An empty accumulator gives a zero estimate.
    pub fn finish(&self, discount_factor: f64) -> McEstimate {
        if self.count == 0 {
            return McEstimate::default();
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n) - mean * mean;
        let std_error = variance.max(0.0).sqrt() / n.sqrt();

        McEstimate {
            price: mean * discount_factor,
            std_error: std_error * discount_factor,
        }
    }
}
