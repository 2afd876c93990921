// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const TAU: f64 = std::f64::consts::TAU;
}


#[cfg(test)]
mod tests {
    use super::comparison::*;

    #[test]
    fn test_multiple_of() {
        assert!(is_multiple_of(0.75, 0.25, 1e-9));
        assert!(is_multiple_of(100.0 * 7.0 / 20000.0, 100.0 / 20000.0, 1e-6));
        assert!(!is_multiple_of(0.8, 0.25, 1e-9));
    }

    #[test]
    fn test_nearly_equal_eps() {
        assert!(nearly_equal_eps(0.1 + 0.2, 0.3, 1e-9));
        assert!(!nearly_equal_eps(0.1, 0.2, 1e-9));
    }
}
