// src/noyau/trig.rs
//
// Mode d'angle + les six fonctions trigonométriques
// -------------------------------------------------
// - ModeAngle : DEG/RAD, fourni par l'appelant à chaque appel
//   (le noyau ne le stocke jamais)
// - Conversion DEG->RAD avant sin/cos/tan, RAD->DEG après asin/acos/atan
// - FnTrig : reconnaissance par nom ("sin" ... "atan") pour la résolution
//   des fonctions et pour les opérateurs unaires

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Bascule DEG <-> RAD.
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Degres => write!(f, "DEG"),
            ModeAngle::Radians => write!(f, "RAD"),
        }
    }
}

/* ------------------------ Conversions pures ------------------------ */

/// DEG -> RAD si le mode est degrés, valeur inchangée sinon.
pub fn en_radians_si_degres(x: f64, mode: ModeAngle) -> f64 {
    match mode {
        ModeAngle::Degres => x.to_radians(),
        ModeAngle::Radians => x,
    }
}

/// RAD -> DEG si le mode est degrés, valeur inchangée sinon.
pub fn en_degres_si_radians(x: f64, mode: ModeAngle) -> f64 {
    match mode {
        ModeAngle::Degres => x.to_degrees(),
        ModeAngle::Radians => x,
    }
}

/* ------------------------ Les six variantes ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FnTrig {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
}

impl FnTrig {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(FnTrig::Sin),
            "cos" => Some(FnTrig::Cos),
            "tan" => Some(FnTrig::Tan),
            "asin" => Some(FnTrig::Asin),
            "acos" => Some(FnTrig::Acos),
            "atan" => Some(FnTrig::Atan),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            FnTrig::Sin => "sin",
            FnTrig::Cos => "cos",
            FnTrig::Tan => "tan",
            FnTrig::Asin => "asin",
            FnTrig::Acos => "acos",
            FnTrig::Atan => "atan",
        }
    }

    /// Applique la fonction avec la conversion d'angle du mode : les
    /// directes convertissent leur ENTRÉE, les inverses leur SORTIE.
    /// Hors domaine (asin/acos sur |x| > 1) => NaN, à l'appelant de trancher.
    pub fn applique(self, x: f64, mode: ModeAngle) -> f64 {
        match self {
            FnTrig::Sin => en_radians_si_degres(x, mode).sin(),
            FnTrig::Cos => en_radians_si_degres(x, mode).cos(),
            FnTrig::Tan => en_radians_si_degres(x, mode).tan(),
            FnTrig::Asin => en_degres_si_radians(x.asin(), mode),
            FnTrig::Acos => en_degres_si_radians(x.acos(), mode),
            FnTrig::Atan => en_degres_si_radians(x.atan(), mode),
        }
    }
}
