//! Linear rescaling between numeric ranges.

///
/// Span
///
/// Closed numeric interval `start..=stop`; `start > stop` is allowed and
/// maps in reverse.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f64,
    pub stop: f64,
}

impl Span {
    #[must_use]
    pub const fn new(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.stop - self.start
    }

    /// Position of `value` relative to this span: 0 at `start`, 1 at `stop`.
    /// `None` for a zero-width span.
    #[must_use]
    pub fn fraction(&self, value: f64) -> Option<f64> {
        let width = self.width();
        if width == 0.0 {
            return None;
        }

        Some((value - self.start) / width)
    }
}

/// Map `value` from `from` onto `to`. Values outside `from` extrapolate.
#[must_use]
pub fn map_value(value: f64, from: Span, to: Span) -> Option<f64> {
    let fraction = from.fraction(value)?;

    Some(to.start + to.width() * fraction)
}

/// Fix the output span; the returned closure maps from any input span.
pub fn mapper(to: Span) -> impl Fn(f64, Span) -> Option<f64> {
    move |value, from| map_value(value, from, to)
}
