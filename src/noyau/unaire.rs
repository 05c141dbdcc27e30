// src/noyau/unaire.rs
//
// Opérateurs à opérande unique, appliqués directement à l'affichage
// courant (sans repasser par le pipeline d'expression). Partagent la
// conversion d'angle et le format du résultat avec le reste du noyau,
// et synthétisent l'entrée d'historique de l'opération.

use super::erreur::{ErreurEval, JETON_ERREUR};
use super::fonctions::factorielle;
use super::format::format_reel;
use super::trig::{FnTrig, ModeAngle};
use super::valeur::Valeur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUnaire {
    Carre,
    Racine, // racine carrée de la valeur absolue
    Log10,
    Ln,
    Exp,
    DixPuissance,
    Factorielle,
    Abs,
    Inverse,
    Trig(FnTrig),
}

/// Applique `op` à l'affichage courant.
///
/// - "0" et le jeton d'erreur sont des non-opérations : valeur rendue
///   telle quelle, pas d'historique (l'affichage ne bouge pas) ;
/// - un affichage non numérique vaut une erreur de syntaxe ;
/// - les violations de domaine (factorielle d'un négatif/non-entier,
///   inverse de zéro, asin/acos hors [-1, 1]) sortent en Domaine,
///   sans historique.
pub fn applique_unaire(
    courant: &str,
    op: OpUnaire,
    mode: ModeAngle,
) -> (Result<Valeur, ErreurEval>, Option<String>) {
    if courant == JETON_ERREUR {
        return (Err(ErreurEval::Syntaxe), None);
    }
    if courant == "0" {
        return (Ok(Valeur::Reel(0.0)), None);
    }

    let Ok(x) = courant.parse::<f64>() else {
        return (Err(ErreurEval::Syntaxe), None);
    };

    let resultat = match op {
        OpUnaire::Carre => Ok(x * x),
        OpUnaire::Racine => Ok(x.abs().sqrt()),
        OpUnaire::Log10 => domaine(x > 0.0, x.log10()),
        OpUnaire::Ln => domaine(x > 0.0, x.ln()),
        OpUnaire::Exp => Ok(x.exp()),
        OpUnaire::DixPuissance => Ok(10f64.powf(x)),
        OpUnaire::Factorielle => factorielle(x).ok_or(ErreurEval::Domaine),
        OpUnaire::Abs => Ok(x.abs()),
        OpUnaire::Inverse => domaine(x != 0.0, 1.0 / x),
        OpUnaire::Trig(f) => match f {
            FnTrig::Asin | FnTrig::Acos => {
                domaine(x.abs() <= 1.0, f.applique(x, mode))
            }
            _ => Ok(f.applique(x, mode)),
        },
    };

    let y = match resultat {
        Ok(y) if y.is_finite() => y,
        Ok(_) => return (Err(ErreurEval::NonFini), None),
        Err(e) => return (Err(e), None),
    };

    let texte = format_reel(y);
    let historique = historique_unaire(courant, op, &texte, mode);
    (Ok(Valeur::Reel(y)), Some(historique))
}

/* ------------------------ Historique ------------------------ */

/// Entrée d'historique avec le symbole d'affichage de l'opération.
fn historique_unaire(courant: &str, op: OpUnaire, resultat: &str, mode: ModeAngle) -> String {
    match op {
        OpUnaire::Carre => format!("{courant}² = {resultat}"),
        OpUnaire::Racine => format!("√{courant} = {resultat}"),
        OpUnaire::Log10 => format!("log({courant}) = {resultat}"),
        OpUnaire::Ln => format!("ln({courant}) = {resultat}"),
        OpUnaire::Exp => format!("exp({courant}) = {resultat}"),
        OpUnaire::DixPuissance => format!("10^{courant} = {resultat}"),
        OpUnaire::Factorielle => format!("{courant}! = {resultat}"),
        OpUnaire::Abs => format!("|{courant}| = {resultat}"),
        OpUnaire::Inverse => format!("1/({courant}) = {resultat}"),
        OpUnaire::Trig(f) => format!("{}({courant}) = {resultat} ({mode})", f.nom()),
    }
}

fn domaine(ok: bool, v: f64) -> Result<f64, ErreurEval> {
    if ok {
        Ok(v)
    } else {
        Err(ErreurEval::Domaine)
    }
}
