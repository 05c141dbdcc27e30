// src/noyau/fonctions.rs
//
// Résolution des appels de fonction dans le texte de l'expression
// ---------------------------------------------------------------
// Balayage répété du motif le plus interne / le plus à gauche : un nom de
// fonction (ou un préfixe √( , 10^( , 1/( ) suivi d'un argument parenthésé
// SANS parenthèse imbriquée. L'argument est évalué par le vrai parseur,
// puis l'appel entier est remplacé par la forme canonique du réel calculé.
// Les appels profonds se résolvent donc forcément avant les appels
// englobants.
//
// Politique permissive (voir DESIGN.md) : un argument qui
// n'aboutit pas à un réel fini remplace l'appel par "0" au lieu
// d'interrompre le balayage ; seule l'expression résiduelle finale
// décide du succès global.

use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};
use super::trig::{FnTrig, ModeAngle};

/// Fonctions à argument parenthésé reconnues par nom.
const NOMS_FONCTIONS: [&str; 10] = [
    "sin", "cos", "tan", "asin", "acos", "atan", "log", "ln", "exp", "abs",
];

/// 170! est la dernière factorielle finie en f64.
const FACTORIELLE_MAX: f64 = 170.0;

/// Réduit tous les appels de fonction de `expr`, puis les factorielles
/// postfixes. Retourne l'expression résiduelle (arithmétique pure).
pub fn resoudre_fonctions(expr: &str, mode: ModeAngle) -> String {
    let mut s = expr.to_string();

    // chaque réduction consomme exactement une paire de parenthèses
    let max_reductions = s.matches('(').count() + 1;
    for _ in 0..max_reductions {
        match reduit_une_fois(&s, mode) {
            Some(suivante) => s = suivante,
            None => break,
        }
    }

    resoudre_factorielles(&s)
}

/* ------------------------ Une réduction ------------------------ */

/// Cherche le premier appel reconnu dont l'argument est sans parenthèses,
/// le réduit, et retourne le texte substitué. None si plus rien à réduire.
fn reduit_une_fois(s: &str, mode: ModeAngle) -> Option<String> {
    let chars: Vec<char> = s.chars().collect();

    // dernière '(' vue, remise à zéro après chaque ')' examinée :
    // une paire déjà écartée ne doit pas servir d'ouvrante à la suivante
    let mut ouvre: Option<usize> = None;

    for (i, &c) in chars.iter().enumerate() {
        if c == '(' {
            ouvre = Some(i);
            continue;
        }
        if c != ')' {
            continue;
        }

        let Some(deb) = ouvre.take() else {
            continue; // ')' orpheline : laissée au parseur
        };
        let interieur: String = chars[deb + 1..i].iter().collect();

        // 1) nom alphabétique collé à la parenthèse ?
        let mut n0 = deb;
        while n0 > 0 && chars[n0 - 1].is_ascii_alphabetic() {
            n0 -= 1;
        }
        if n0 < deb {
            let nom: String = chars[n0..deb].iter().collect();
            if let Some(rempl) = applique_fonction_nommee(&nom, &interieur, mode) {
                return Some(remplace(&chars, n0, i + 1, &rempl));
            }
            // nom inconnu : groupe laissé au parseur (qui signalera l'erreur)
            continue;
        }

        // 2) racine carrée : √(x)
        if deb >= 1 && chars[deb - 1] == '√' {
            let r = eval_argument(&interieur)
                .map(f64::sqrt)
                .filter(|r| r.is_finite());
            return Some(remplace(&chars, deb - 1, i + 1, &substitution(r)));
        }

        // 3) puissance de dix : 10^(x), le "10" n'étant pas la fin
        //    d'un nombre plus long
        if deb >= 3
            && chars[deb - 3] == '1'
            && chars[deb - 2] == '0'
            && chars[deb - 1] == '^'
            && !precede_par_chiffre(&chars, deb - 3)
        {
            let r = eval_argument(&interieur)
                .map(|x| 10f64.powf(x))
                .filter(|r| r.is_finite());
            return Some(remplace(&chars, deb - 3, i + 1, &substitution(r)));
        }

        // 4) inverse : 1/(x), même garde sur le "1"
        if deb >= 2
            && chars[deb - 2] == '1'
            && chars[deb - 1] == '/'
            && !precede_par_chiffre(&chars, deb - 2)
        {
            let r = eval_argument(&interieur)
                .filter(|&x| x != 0.0)
                .map(|x| 1.0 / x)
                .filter(|r| r.is_finite());
            return Some(remplace(&chars, deb - 2, i + 1, &substitution(r)));
        }

        // parenthèses simples : laissées au parseur
    }

    None
}

fn applique_fonction_nommee(nom: &str, arg: &str, mode: ModeAngle) -> Option<String> {
    if !NOMS_FONCTIONS.contains(&nom) {
        return None;
    }

    let resultat = eval_argument(arg).map(|x| match FnTrig::depuis_nom(nom) {
        Some(f) => f.applique(x, mode),
        None => match nom {
            "log" => x.log10(),
            "ln" => x.ln(),
            "exp" => x.exp(),
            _ => x.abs(), // "abs", seul nom restant
        },
    });

    Some(substitution(resultat.filter(|r| r.is_finite())))
}

/* ------------------------ Argument + substitution ------------------------ */

/// Évalue un argument (déjà sans parenthèses) en réel fini.
/// Échec, complexe ou non-fini => None, l'appelant substitue "0".
fn eval_argument(arg: &str) -> Option<f64> {
    // un argument peut contenir ses propres factorielles ("sin(5!)")
    // et son propre '^' (traité en puissance)
    let s = resoudre_factorielles(arg).replace('^', "**");
    let jetons = tokenize(&s).ok()?;
    let rpn = to_rpn(&jetons).ok()?;
    eval_rpn(&rpn).ok()?.reel_fini()
}

/// Forme canonique substituée dans le texte ("0" si l'étape a échoué).
fn substitution(v: Option<f64>) -> String {
    match v {
        Some(x) => format!("{x}"),
        None => "0".to_string(),
    }
}

fn precede_par_chiffre(chars: &[char], i: usize) -> bool {
    i > 0 && (chars[i - 1].is_ascii_digit() || chars[i - 1] == '.')
}

fn remplace(chars: &[char], de: usize, a: usize, par: &str) -> String {
    let mut out: String = chars[..de].iter().collect();
    out.push_str(par);
    out.extend(chars[a..].iter());
    out
}

/* ------------------------ Factorielle postfixe ------------------------ */

/// Réduit les factorielles postfixes "<littéral>!" : balayages gauche-droite
/// sur les motifs disjoints, répétés jusqu'au point fixe ("3!!" vaut
/// (3!)! = 720). Hors domaine (négatif, non-entier, débordement) =>
/// substitution "0", même politique que le reste de la résolution.
/// Un '!' sans littéral devant est laissé au parseur.
pub(super) fn resoudre_factorielles(expr: &str) -> String {
    let mut s = expr.to_string();

    // chaque balayage fructueux consomme au moins un '!'
    let max_balayages = s.matches('!').count();
    for _ in 0..max_balayages {
        let chars: Vec<char> = s.chars().collect();
        match balaye_factorielles(&chars) {
            Some(suivante) => s = suivante,
            None => break,
        }
    }
    s
}

/// Un balayage : remplace chaque "<littéral>!" rencontré, sans revenir en
/// arrière sur le texte déjà produit. None si aucun motif trouvé.
fn balaye_factorielles(chars: &[char]) -> Option<String> {
    let mut out = String::new();
    let mut i = 0usize;
    let mut trouve = false;

    while i < chars.len() {
        if chars[i].is_ascii_digit() || chars[i] == '.' {
            let deb = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            if i < chars.len() && chars[i] == '!' {
                let litteral: String = chars[deb..i].iter().collect();
                let v = litteral.parse::<f64>().ok().and_then(factorielle);
                out.push_str(&substitution(v));
                i += 1; // consomme le '!'
                trouve = true;
            } else {
                out.extend(chars[deb..i].iter());
            }
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }

    trouve.then_some(out)
}

/// n! pour un réel valant un entier non négatif ; None sinon.
pub(crate) fn factorielle(x: f64) -> Option<f64> {
    if !x.is_finite() || x < 0.0 || x.fract() != 0.0 || x > FACTORIELLE_MAX {
        return None;
    }

    let n = x as u64;
    let mut acc = 1f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Some(acc)
}
