//! Overwrite a model in place with the conversion of another.
//!
//! This is sugar over the `From` conversions: `hsv.set_from(&rgb)` is the same
//! as `hsv = Hsv::from(rgb)`.

/// Replace `self` with `source` converted to `Self`.
pub trait SetFrom<S> {
    /// Convert `source` and store the result in `self`.
    fn set_from(&mut self, source: &S);
}

impl<S: Copy, T: From<S>> SetFrom<S> for T {
    #[inline]
    fn set_from(&mut self, source: &S) {
        *self = T::from(*source);
    }
}
