use serde::Serialize;

/// Fixed CD sample points, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wavelength {
    Nm208,
    Nm217,
    Nm195,
}

impl Wavelength {
    pub fn nm(self) -> u32 {
        match self {
            Wavelength::Nm208 => 208,
            Wavelength::Nm217 => 217,
            Wavelength::Nm195 => 195,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Wavelength::Nm208 => "e208",
            Wavelength::Nm217 => "e217",
            Wavelength::Nm195 => "e195",
        }
    }
}

impl std::fmt::Display for Wavelength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} nm", self.nm())
    }
}

pub fn wavelength_order() -> &'static [Wavelength; 3] {
    &[Wavelength::Nm208, Wavelength::Nm217, Wavelength::Nm195]
}

/// Mean residue ellipticity (deg·cm²·dmol⁻¹) at the three sample points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EllipticityReading {
    pub e208: f64,
    pub e217: f64,
    pub e195: f64,
}

impl EllipticityReading {
    pub fn new(e208: f64, e217: f64, e195: f64) -> Self {
        Self { e208, e217, e195 }
    }

    pub fn values(&self) -> [f64; 3] {
        [self.e208, self.e217, self.e195]
    }

    pub fn get(&self, wavelength: Wavelength) -> f64 {
        match wavelength {
            Wavelength::Nm208 => self.e208,
            Wavelength::Nm217 => self.e217,
            Wavelength::Nm195 => self.e195,
        }
    }

    /// First sample point holding NaN or an infinity.
    pub fn first_non_finite(&self) -> Option<(Wavelength, f64)> {
        wavelength_order()
            .iter()
            .map(|&w| (w, self.get(w)))
            .find(|(_, v)| !v.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/reading.rs"]
mod tests;
