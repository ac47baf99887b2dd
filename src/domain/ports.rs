/// Settings the handlers need from whichever configuration source is active.
pub trait ConfigProvider: Send + Sync {
    /// Largest `n` the factorial handler accepts; the lower bound is always 0.
    fn max_factorial_input(&self) -> i64;
}
