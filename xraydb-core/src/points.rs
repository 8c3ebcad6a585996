/// Energies or momentum transfers to evaluate at.
///
/// A scalar evaluates to a scalar; slices, vectors and arrays evaluate to a
/// `Vec<f64>` of the same length.
pub trait Points {
    type Output;

    fn values(&self) -> &[f64];

    fn collect(values: Vec<f64>) -> Self::Output;
}

impl Points for f64 {
    type Output = f64;

    fn values(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn collect(values: Vec<f64>) -> f64 {
        values.first().copied().unwrap_or(f64::NAN)
    }
}

impl Points for &[f64] {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn collect(values: Vec<f64>) -> Vec<f64> {
        values
    }
}

impl Points for Vec<f64> {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn collect(values: Vec<f64>) -> Vec<f64> {
        values
    }
}

impl Points for &Vec<f64> {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn collect(values: Vec<f64>) -> Vec<f64> {
        values
    }
}

impl<const N: usize> Points for [f64; N] {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        self
    }

    fn collect(values: Vec<f64>) -> Vec<f64> {
        values
    }
}

impl<const N: usize> Points for &[f64; N] {
    type Output = Vec<f64>;

    fn values(&self) -> &[f64] {
        *self
    }

    fn collect(values: Vec<f64>) -> Vec<f64> {
        values
    }
}

/// Rejects energies that cannot be taken to the log domain.
pub(crate) fn check_energies(energies: &[f64]) -> crate::Result<()> {
    match energies.iter().find(|e| !(e.is_finite() && **e > 0.0)) {
        Some(&bad) => Err(crate::XrayDbError::InvalidEnergy(bad)),
        None => Ok(()),
    }
}
