use crate::support::numeric::{StateType, assert_positive_temperature};

/// Powers and logarithm of a temperature, computed once and shared by every
/// species evaluated at that temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TempCache<S> {
    pub t: S,
    pub t2: S,
    pub t3: S,
    pub t4: S,
    pub ln_t: S,
}

impl<S: StateType> TempCache<S> {
    /// # Panics
    ///
    /// Panics if `t` is not strictly positive.
    pub fn new(t: S) -> Self {
        assert_positive_temperature(t);
        let t2 = t * t;
        let t3 = t2 * t;
        Self {
            t,
            t2,
            t3,
            t4: t2 * t2,
            ln_t: t.ln(),
        }
    }
}
