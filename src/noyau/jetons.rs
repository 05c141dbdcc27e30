// src/noyau/jetons.rs

use super::erreur::ErreurEval;

/// Jetons de l'expression résiduelle (après résolution des fonctions,
/// il ne reste que de l'arithmétique).
///
/// NOTE: `Neg` n'est jamais produit par `tokenize` ; il est injecté par
/// `to_rpn` pour le moins unaire (prioritaire sur la puissance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // **
    Neg, // moins unaire

    LPar,
    RPar,
}

/// Normalisation d'affichage : glyphes × et ÷ vers les opérateurs canoniques.
///
/// Le '^' reste tel quel à ce stade : il ne devient '**' qu'une fois les
/// fonctions résolues, sinon il entrerait en collision avec "10^(".
/// Aucune erreur ici, le parseur tranchera sur le résiduel.
pub fn normalise(brut: &str) -> String {
    brut.replace('×', "*").replace('÷', "/")
}

/// Découpe une expression résiduelle en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 4.5, .5)
/// - notation scientifique (ex: 6.12e-17), forme substituée par la
///   résolution des fonctions
/// - opérateurs + - * / **
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                // "**" = puissance, '*' seul = multiplication
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::Pow);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : chiffres + point, exposant optionnel e/E[+-]ddd
        if c.is_ascii_digit() || c == '.' {
            let debut = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }
            let texte: String = chars[debut..i].iter().collect();
            let n: f64 = texte.parse().map_err(|_| ErreurEval::Syntaxe)?;
            out.push(Tok::Num(n));
            continue;
        }

        // caractère inattendu ('√' hors motif, lettre orpheline, '%', ...)
        return Err(ErreurEval::Syntaxe);
    }

    Ok(out)
}
