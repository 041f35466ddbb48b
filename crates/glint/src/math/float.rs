pub trait FloatAsExt {
    /// Returns `Some(self)` if self is farther than `eps` from zero.
    ///
    /// Returns None for NaN and `Some(self)` for +/- infinity
    fn into_non_zero(self, eps: Self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }
}
