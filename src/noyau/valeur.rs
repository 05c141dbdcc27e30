// src/noyau/valeur.rs
//
// Valeur numérique du noyau : réel (f64) ou complexe (re, im).
// Invariant : un complexe à partie imaginaire nulle est renormalisé en
// réel avant de sortir d'une opération (jamais de complexe "déguisé").

use num_complex::Complex64;
use num_traits::Zero;

use super::erreur::ErreurEval;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Valeur {
    Reel(f64),
    Complexe(Complex64),
}

impl Valeur {
    /// Renormalise : complexe à partie imaginaire nulle => réel.
    pub fn normalise(self) -> Self {
        match self {
            Valeur::Complexe(z) if z.im == 0.0 => Valeur::Reel(z.re),
            v => v,
        }
    }

    pub fn est_finie(self) -> bool {
        match self {
            Valeur::Reel(x) => x.is_finite(),
            Valeur::Complexe(z) => z.re.is_finite() && z.im.is_finite(),
        }
    }

    /// La valeur en tant que réel fini, si c'en est un.
    pub fn reel_fini(self) -> Option<f64> {
        match self {
            Valeur::Reel(x) if x.is_finite() => Some(x),
            _ => None,
        }
    }

    fn complexe(self) -> Complex64 {
        match self {
            Valeur::Reel(x) => Complex64::new(x, 0.0),
            Valeur::Complexe(z) => z,
        }
    }

    /* ------------------------ Opérations binaires ------------------------ */

    pub fn ajoute(self, autre: Valeur) -> Valeur {
        match (self, autre) {
            (Valeur::Reel(a), Valeur::Reel(b)) => Valeur::Reel(a + b),
            (a, b) => Valeur::Complexe(a.complexe() + b.complexe()).normalise(),
        }
    }

    pub fn soustrait(self, autre: Valeur) -> Valeur {
        match (self, autre) {
            (Valeur::Reel(a), Valeur::Reel(b)) => Valeur::Reel(a - b),
            (a, b) => Valeur::Complexe(a.complexe() - b.complexe()).normalise(),
        }
    }

    pub fn multiplie(self, autre: Valeur) -> Valeur {
        match (self, autre) {
            (Valeur::Reel(a), Valeur::Reel(b)) => Valeur::Reel(a * b),
            (a, b) => Valeur::Complexe(a.complexe() * b.complexe()).normalise(),
        }
    }

    pub fn divise(self, autre: Valeur) -> Result<Valeur, ErreurEval> {
        let diviseur_nul = match autre {
            Valeur::Reel(b) => b == 0.0,
            Valeur::Complexe(z) => z.is_zero(),
        };
        if diviseur_nul {
            return Err(ErreurEval::DivisionParZero);
        }
        Ok(match (self, autre) {
            (Valeur::Reel(a), Valeur::Reel(b)) => Valeur::Reel(a / b),
            (a, b) => Valeur::Complexe(a.complexe() / b.complexe()).normalise(),
        })
    }

    /// a ** b. Une base réelle négative avec exposant fractionnaire passe
    /// dans le plan complexe (comme (-1)**0.5).
    pub fn puissance(self, autre: Valeur) -> Valeur {
        match (self, autre) {
            (Valeur::Reel(a), Valeur::Reel(b)) => {
                if a < 0.0 && b.fract() != 0.0 {
                    Valeur::Complexe(Complex64::new(a, 0.0).powf(b)).normalise()
                } else {
                    Valeur::Reel(a.powf(b))
                }
            }
            (a, b) => Valeur::Complexe(a.complexe().powc(b.complexe())).normalise(),
        }
    }

    /// Moins unaire.
    pub fn oppose(self) -> Valeur {
        match self {
            Valeur::Reel(x) => Valeur::Reel(-x),
            Valeur::Complexe(z) => Valeur::Complexe(-z),
        }
    }
}
