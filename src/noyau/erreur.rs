// src/noyau/erreur.rs

use thiserror::Error;

/// Jeton d'erreur affiché. L'appelant le garde tel quel (état collant)
/// jusqu'au prochain effacement ou insertion.
pub const JETON_ERREUR: &str = "Error";

/// Erreurs du noyau. Toujours retournées en valeur, jamais propagées
/// en panique au-delà de la frontière du noyau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Structure invalide : parenthèses non appariées, opérande vide,
    /// caractère inconnu, affichage non numérique.
    #[error("expression invalide")]
    Syntaxe,

    #[error("division par zéro")]
    DivisionParZero,

    /// Précondition mathématique violée : factorielle d'un négatif ou
    /// d'un non-entier, inverse de zéro, asin/acos hors [-1, 1].
    #[error("hors domaine")]
    Domaine,

    /// Le résultat final déborde (infini) ou n'est pas un nombre.
    #[error("résultat non fini")]
    NonFini,
}
