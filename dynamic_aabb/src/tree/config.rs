#[derive(Debug, Clone)]
pub struct Config {
    /// Node arena capacity reserved up front.
    pub pool_size: usize,
    /// Allowed deviation of `|direction|^2` from 1 for ray casts.
    pub unit_tolerance: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pool_size: 4000,
            unit_tolerance: 1e-5,
        }
    }
}
