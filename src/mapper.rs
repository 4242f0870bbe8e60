// Maps raw scalars (activations, weights) onto the 0..=255 intensity scale.
// Visual: decides how "lit" a neuron looks before the gradient picks its color.

use crate::error::{Result, VizError};

/// Closed input range `[min, max]` that stretches onto 0..=255.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: f64,
    max: f64,
}

impl Domain {
    /// Generic bound for typical normalized activation magnitudes.
    pub const DEFAULT: Domain = Domain { min: -10.0, max: 10.0 };

    pub fn new(min: f64, max: f64) -> Result<Self> {
        // `!(min < max)` also catches NaN bounds.
        if !(min < max) || !min.is_finite() || !max.is_finite() {
            return Err(VizError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp below/above the range, interpolate linearly inside, round half up.
    /// NaN maps to 0.
    #[inline]
    pub fn intensity(&self, value: f64) -> u8 {
        if value.is_nan() || value < self.min {
            return 0;
        }
        if value > self.max {
            return 255;
        }
        let t = (value - self.min) / (self.max - self.min);
        (t * 255.0).round().clamp(0.0, 255.0) as u8
    }
}

impl Default for Domain {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One-shot form: validates the domain on every call.
pub fn map(value: f64, domain_min: f64, domain_max: f64) -> Result<u8> {
    Ok(Domain::new(domain_min, domain_max)?.intensity(value))
}

#[inline]
pub fn map_value(value: f64, domain: &Domain) -> u8 {
    domain.intensity(value)
}

/// Element-wise map; output has the same length and order as `values`.
pub fn map_values(values: &[f64], domain: &Domain) -> Vec<u8> {
    values.iter().map(|&v| domain.intensity(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_and_midpoint() {
        let d = Domain::DEFAULT;
        assert_eq!(d.intensity(-10.0), 0);
        assert_eq!(d.intensity(10.0), 255);
        assert_eq!(d.intensity(0.0), 128); // 127.5 rounds up
        assert_eq!(d.intensity(0.04), 128);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let d = Domain::DEFAULT;
        for eps in [1e-9, 0.5, 3.0, 1e6] {
            assert_eq!(d.intensity(-10.0 - eps), 0);
            assert_eq!(d.intensity(10.0 + eps), 255);
        }
        assert_eq!(d.intensity(f64::NEG_INFINITY), 0);
        assert_eq!(d.intensity(f64::INFINITY), 255);
        assert_eq!(d.intensity(f64::NAN), 0);
    }

    #[test]
    fn monotonic_across_domain() {
        let d = Domain::new(-2.5, 7.0).unwrap();
        let mut last = 0u8;
        let mut v = -2.5;
        while v <= 7.0 {
            let i = d.intensity(v);
            assert!(i >= last, "intensity dropped at {v}");
            last = i;
            v += 0.01;
        }
    }

    #[test]
    fn degenerate_domains_are_rejected() {
        assert!(matches!(map(1.0, 5.0, 5.0), Err(VizError::InvalidDomain { .. })));
        assert!(matches!(map(1.0, 6.0, 5.0), Err(VizError::InvalidDomain { .. })));
        assert!(Domain::new(f64::NAN, 1.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY).is_err());
        assert_eq!(map(5.0, 0.0, 10.0).unwrap(), 128);
    }

    #[test]
    fn vector_map_preserves_order() {
        let out = map_values(&[-20.0, -10.0, 0.0, 10.0, 20.0], &Domain::DEFAULT);
        assert_eq!(out, vec![0, 0, 128, 255, 255]);
        assert!(map_values(&[], &Domain::DEFAULT).is_empty());
    }
}
