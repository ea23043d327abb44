// crates/xtce-rs/src/calibrators.rs

//! Raw-to-engineering value transforms.

use crate::error::MdbError;

#[derive(Debug, Clone, PartialEq)]
pub enum Calibrator {
    Polynomial(Polynomial),
    Interpolate(Interpolate),
}

/// `c0 + c1*x + c2*x^2 + ...`
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    pub coefficients: Vec<f64>,
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self { coefficients }
    }
}

/// Piecewise-linear interpolation through `(xp[i], fp[i])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolate {
    pub xp: Vec<f64>,
    pub fp: Vec<f64>,
}

impl Interpolate {
    /// Builds the calibrator after checking the control points.
    pub fn new(xp: Vec<f64>, fp: Vec<f64>) -> Result<Self, MdbError> {
        let calibrator = Self { xp, fp };
        calibrator.validate()?;
        Ok(calibrator)
    }

    /// Both point lists must have the same length and `xp` must be strictly increasing.
    pub fn validate(&self) -> Result<(), MdbError> {
        if self.xp.len() != self.fp.len() {
            return Err(MdbError::Export(format!(
                "Interpolation has {} raw points but {} calibrated points",
                self.xp.len(),
                self.fp.len()
            )));
        }
        if self.xp.windows(2).any(|w| w[0] >= w[1]) {
            return Err(MdbError::Export(
                "Interpolation raw points must be strictly increasing".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<Polynomial> for Calibrator {
    fn from(c: Polynomial) -> Self {
        Calibrator::Polynomial(c)
    }
}

impl From<Interpolate> for Calibrator {
    fn from(c: Interpolate) -> Self {
        Calibrator::Interpolate(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_accepts_increasing_points() {
        let cal = Interpolate::new(vec![0.0, 10.0, 20.0], vec![1.0, 5.0, 2.0]);
        assert!(cal.is_ok());
    }

    #[test]
    fn test_interpolate_rejects_unsorted_points() {
        let cal = Interpolate::new(vec![0.0, 10.0, 10.0], vec![1.0, 5.0, 2.0]);
        assert!(matches!(cal, Err(MdbError::Export(_))), "got {:?}", cal);
    }

    #[test]
    fn test_interpolate_rejects_length_mismatch() {
        let cal = Interpolate::new(vec![0.0, 1.0], vec![1.0]);
        assert!(matches!(cal, Err(MdbError::Export(_))));
    }
}
