use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureClass {
    AlphaHelix,
    BetaSheet,
    Turn,
    RandomCoil,
}

impl StructureClass {
    pub fn name(self) -> &'static str {
        match self {
            StructureClass::AlphaHelix => "alpha_helix",
            StructureClass::BetaSheet => "beta_sheet",
            StructureClass::Turn => "turn",
            StructureClass::RandomCoil => "random_coil",
        }
    }
}

/// Output key order; also the serialized field order.
pub fn class_order() -> &'static [StructureClass; 4] {
    &[
        StructureClass::AlphaHelix,
        StructureClass::BetaSheet,
        StructureClass::Turn,
        StructureClass::RandomCoil,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StructureFractions {
    pub alpha_helix: f64,
    pub beta_sheet: f64,
    pub turn: f64,
    pub random_coil: f64,
}

impl StructureFractions {
    pub fn get(&self, class: StructureClass) -> f64 {
        match class {
            StructureClass::AlphaHelix => self.alpha_helix,
            StructureClass::BetaSheet => self.beta_sheet,
            StructureClass::Turn => self.turn,
            StructureClass::RandomCoil => self.random_coil,
        }
    }

    pub fn values(&self) -> [f64; 4] {
        [self.alpha_helix, self.beta_sheet, self.turn, self.random_coil]
    }

    pub fn total(&self) -> f64 {
        self.values().iter().sum()
    }

    /// Largest fraction; ties resolve to the earlier class in output order.
    pub fn dominant(&self) -> StructureClass {
        let mut best = StructureClass::AlphaHelix;
        let mut best_value = self.alpha_helix;
        for &class in &class_order()[1..] {
            let v = self.get(class);
            if v > best_value {
                best = class;
                best_value = v;
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/fractions.rs"]
mod tests;
