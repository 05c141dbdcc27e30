//! src/app/etat.rs
//!
//! État de session (sans vue) : affichage, mémoire, historique, mode d'angle.
//!
//! Rôle : toutes les mutations d'état vivent ici ; le noyau reste pur et
//! reçoit un instantané (affichage, mode) à chaque appel.
//!
//! Contrats :
//! - Aucun parsing d'expression ici (le noyau s'en charge).
//! - Le jeton d'erreur est collant : il reste affiché jusqu'au prochain
//!   effacement ou insertion.
//! - Historique borné (HISTORIQUE_MAX), éviction du plus ancien.

use std::collections::VecDeque;

use crate::noyau::{
    affichage_resultat, applique_unaire, eval_expression, format_reel, ModeAngle, OpUnaire,
    JETON_ERREUR,
};

/// Taille maximale de l'historique (éviction du plus ancien au-delà).
pub const HISTORIQUE_MAX: usize = 50;

/// Affichage de départ (et après effacement).
const AFFICHAGE_ZERO: &str = "0";

/// Caractères considérés comme opérateurs en fin d'affichage
/// (les glyphes × ÷ comptent aussi).
const OPERATEURS: &str = "+-*/^%×÷";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

#[derive(Clone, Debug)]
pub struct EtatCalc {
    pub affichage: String,
    pub memoire: f64,
    pub historique: VecDeque<String>,
    pub mode_angle: ModeAngle,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_ZERO.to_string(),
            memoire: 0.0,
            historique: VecDeque::new(),
            mode_angle: ModeAngle::Degres,
        }
    }
}

impl EtatCalc {
    /* ------------------------ Édition de texte ------------------------ */

    /// Insère du texte : remplace "0" et le jeton d'erreur, sinon concatène.
    pub fn inserer_texte(&mut self, texte: &str) {
        if self.affichage == AFFICHAGE_ZERO || self.affichage == JETON_ERREUR {
            self.affichage = texte.to_string();
        } else {
            self.affichage.push_str(texte);
        }
    }

    /// Insère un opérateur : refusé sur le jeton d'erreur et après un
    /// autre opérateur.
    pub fn inserer_operateur(&mut self, op: &str) {
        if self.affichage == JETON_ERREUR {
            return;
        }
        match self.affichage.chars().last() {
            Some(c) if OPERATEURS.contains(c) => {}
            Some(_) => self.inserer_texte(op),
            None => {}
        }
    }

    /// Insère π ou e sous forme de littéral f64 (la substitution des
    /// constantes se fait à l'insertion, jamais dans le noyau).
    /// Après un opérateur, l'expression complétée est évaluée
    /// immédiatement et part dans l'historique.
    pub fn inserer_constante(&mut self, constante: Constante) {
        let valeur = match constante {
            Constante::Pi => std::f64::consts::PI.to_string(),
            Constante::E => std::f64::consts::E.to_string(),
        };

        if self.affichage == AFFICHAGE_ZERO || self.affichage == JETON_ERREUR {
            self.affichage = valeur;
            return;
        }

        if self.affichage.chars().last().is_some_and(|c| OPERATEURS.contains(c)) {
            let expression = format!("{}{}", self.affichage, valeur);
            self.evaluer_texte(&expression);
            return;
        }

        // après '(' ou un chiffre : simple concaténation
        self.affichage.push_str(&valeur);
    }

    /// C : remet l'affichage à zéro.
    pub fn effacer(&mut self) {
        self.affichage = AFFICHAGE_ZERO.to_string();
    }

    /// DEL : retire le dernier caractère, plancher "0".
    pub fn retour_arriere(&mut self) {
        if self.affichage.chars().count() > 1 {
            self.affichage.pop();
        } else {
            self.affichage = AFFICHAGE_ZERO.to_string();
        }
    }

    /// ± : bascule le signe par préfixe '-'.
    pub fn basculer_signe(&mut self) {
        if self.affichage == JETON_ERREUR {
            return;
        }
        if let Some(reste) = self.affichage.strip_prefix('-') {
            self.affichage = reste.to_string();
        } else {
            self.affichage = format!("-{}", self.affichage);
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue l'affichage complet via le noyau.
    pub fn evaluer(&mut self) {
        let expression = self.affichage.clone();
        if expression.is_empty() || expression == JETON_ERREUR {
            return;
        }
        self.evaluer_texte(&expression);
    }

    fn evaluer_texte(&mut self, expression: &str) {
        log::debug!("évaluation: {expression:?} ({})", self.mode_angle);

        let (resultat, historique) = eval_expression(expression, self.mode_angle);
        if let Err(e) = &resultat {
            log::warn!("évaluation échouée: {expression:?}: {e}");
        }

        self.affichage = affichage_resultat(&resultat);
        if let Some(entree) = historique {
            self.pousser_historique(entree);
        }
    }

    /// Applique un opérateur unaire à l'affichage courant (x², √x, n!, ...).
    pub fn appliquer_unaire(&mut self, op: OpUnaire) {
        let courant = self.affichage.clone();
        let (resultat, historique) = applique_unaire(&courant, op, self.mode_angle);

        if let Err(e) = &resultat {
            if courant != JETON_ERREUR {
                log::warn!("opération unaire {op:?} échouée sur {courant:?}: {e}");
            }
        }

        self.affichage = affichage_resultat(&resultat);
        if let Some(entree) = historique {
            self.pousser_historique(entree);
        }
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_efface(&mut self) {
        self.memoire = 0.0;
    }

    pub fn memoire_rappel(&mut self) {
        self.affichage = format_reel(self.memoire);
    }

    pub fn memoire_ajoute(&mut self) {
        match self.valeur_affichee() {
            Some(v) => self.memoire += v,
            None => self.affichage = JETON_ERREUR.to_string(),
        }
    }

    pub fn memoire_soustrait(&mut self) {
        match self.valeur_affichee() {
            Some(v) => self.memoire -= v,
            None => self.affichage = JETON_ERREUR.to_string(),
        }
    }

    pub fn memoire_range(&mut self) {
        match self.valeur_affichee() {
            Some(v) => self.memoire = v,
            None => self.affichage = JETON_ERREUR.to_string(),
        }
    }

    fn valeur_affichee(&self) -> Option<f64> {
        self.affichage.parse::<f64>().ok()
    }

    /* ------------------------ Historique + mode ------------------------ */

    pub fn bascule_mode_angle(&mut self) {
        self.mode_angle = self.mode_angle.bascule();
    }

    pub fn effacer_historique(&mut self) {
        self.historique.clear();
    }

    fn pousser_historique(&mut self, entree: String) {
        self.historique.push_back(entree);
        while self.historique.len() > HISTORIQUE_MAX {
            self.historique.pop_front();
        }
    }
}
