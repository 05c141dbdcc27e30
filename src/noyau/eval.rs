//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> résolution des fonctions (texte, du plus interne au plus
//! externe) -> '^' devient '**' -> jetons -> RPN -> Valeur -> format
//!
//! Le tout est pur et sans état : (expression, mode d'angle) en entrée,
//! (résultat, entrée d'historique) en sortie. L'évaluation passe par un
//! vrai parseur, jamais par un évaluateur de code dynamique.

use super::erreur::{ErreurEval, JETON_ERREUR};
use super::fonctions::resoudre_fonctions;
use super::format::format_valeur;
use super::jetons::{normalise, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use super::trig::ModeAngle;
use super::valeur::Valeur;

/// API publique : évalue une expression complète et retourne :
/// - le résultat (valeur normalisée, ou erreur typée)
/// - l'entrée d'historique "<expression> = <résultat>" (succès seulement)
pub fn eval_expression(
    expr: &str,
    mode: ModeAngle,
) -> (Result<Valeur, ErreurEval>, Option<String>) {
    if expr.trim().is_empty() {
        return (Err(ErreurEval::Syntaxe), None);
    }

    let resultat = eval_interne(expr, mode);

    let historique = match &resultat {
        Ok(v) => Some(format!("{expr} = {}", format_valeur(*v))),
        Err(_) => None,
    };
    (resultat, historique)
}

/// Affichage d'un résultat : la valeur formatée, ou le jeton d'erreur.
/// Toutes les erreurs s'affichent pareil, le détail reste dans le Result.
pub fn affichage_resultat(resultat: &Result<Valeur, ErreurEval>) -> String {
    match resultat {
        Ok(v) => format_valeur(*v),
        Err(_) => JETON_ERREUR.to_string(),
    }
}

fn eval_interne(expr: &str, mode: ModeAngle) -> Result<Valeur, ErreurEval> {
    // 1) glyphes d'affichage (× ÷) -> opérateurs canoniques
    let s = normalise(expr);

    // 2) réduction des appels de fonction, du plus interne au plus externe
    let s = resoudre_fonctions(&s, mode);

    // 3) '^' ne devient l'opérateur puissance qu'une fois les formes
    //    "10^(" consommées
    let s = s.replace('^', "**");

    // 4) parseur réel sur le résiduel : plus que de l'arithmétique
    let jetons = tokenize(&s)?;
    let rpn = to_rpn(&jetons)?;
    let v = eval_rpn(&rpn)?.normalise();

    // 5) un résultat non fini n'est pas affichable
    if !v.est_finie() {
        return Err(ErreurEval::NonFini);
    }
    Ok(v)
}
