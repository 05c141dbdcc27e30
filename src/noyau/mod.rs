//! Noyau d'évaluation de la calculatrice scientifique
//!
//! Organisation interne :
//! - jetons.rs    : normalisation des glyphes + découpe du résiduel
//! - rpn.rs       : shunting-yard + évaluation RPN
//! - fonctions.rs : résolution texte des appels de fonction (interne d'abord)
//! - trig.rs      : mode d'angle DEG/RAD + les six fonctions trig
//! - valeur.rs    : réel ou complexe, normalisation
//! - format.rs    : affichage canonique (entier / 10 chiffres / complexe)
//! - unaire.rs    : opérateurs à opérande unique sur l'affichage courant
//! - eval.rs      : pipeline complet
//!
//! Le noyau est pur et réentrant : aucun état, aucune E/S. L'état de
//! session (affichage, mémoire, historique, mode d'angle) vit côté app
//! et entre ici en instantané à chaque appel.

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;
pub mod unaire;
pub mod valeur;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurEval, JETON_ERREUR};
pub use eval::{affichage_resultat, eval_expression};
pub use format::{format_reel, format_valeur};
pub use trig::{FnTrig, ModeAngle};
pub use unaire::{applique_unaire, OpUnaire};
pub use valeur::Valeur;
