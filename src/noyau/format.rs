// src/noyau/format.rs
//
// Affichage canonique d'une Valeur :
// - réel entier        -> entier sans point ("1024")
// - réel non entier    -> au plus 10 chiffres significatifs, zéros finaux retirés
// - complexe           -> "<re>+<im>j" (mêmes 10 chiffres sur chaque partie)
// - non fini (inf/NaN) -> jeton d'erreur

use super::erreur::JETON_ERREUR;
use super::valeur::Valeur;

/// Chiffres significatifs de l'affichage décimal.
pub const CHIFFRES_SIGNIFICATIFS: usize = 10;

pub fn format_valeur(v: Valeur) -> String {
    match v.normalise() {
        Valeur::Reel(x) => format_reel(x),
        Valeur::Complexe(z) => {
            if !z.re.is_finite() || !z.im.is_finite() {
                return JETON_ERREUR.to_string();
            }
            // la partie imaginaire garde son propre signe ("1+-2j")
            format!("{}+{}j", format_reel(z.re), format_reel(z.im))
        }
    }
}

/// Réel : entier "aplati" sans point, sinon 10 chiffres significatifs.
pub fn format_reel(x: f64) -> String {
    if !x.is_finite() {
        return JETON_ERREUR.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.fract() == 0.0 {
        return format!("{x:.0}");
    }
    format_significatif(x, CHIFFRES_SIGNIFICATIFS)
}

/* ------------------------ %g maison ------------------------ */

/// Rend `x` avec au plus `sig` chiffres significatifs, zéros finaux retirés.
/// Notation positionnelle pour les exposants dans [-4, sig), scientifique
/// au-delà ("1.23456789e+10", "1.23e-07"), exposant sur 2 chiffres minimum.
fn format_significatif(x: f64, sig: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let negatif = x < 0.0;
    // "d.ddddddddde<exp>" : l'arrondi (et sa retenue éventuelle sur
    // l'exposant) est fait par le formateur exponentiel de Rust
    let expo = format!("{:.*e}", sig - 1, x.abs());
    let (mantisse, exposant) = match expo.split_once('e') {
        Some(parts) => parts,
        None => return expo, // jamais atteint : {:e} émet toujours un exposant
    };
    let exp: i32 = exposant.parse().unwrap_or(0);
    let chiffres: String = mantisse.chars().filter(char::is_ascii_digit).collect();

    let corps = if exp < -4 || exp >= sig as i32 {
        // scientifique : "d.fffe±XX", fraction sans zéros finaux
        let utiles = chiffres.trim_end_matches('0');
        let utiles = if utiles.is_empty() { "0" } else { utiles };
        let m = if utiles.len() == 1 {
            utiles.to_string()
        } else {
            format!("{}.{}", &utiles[..1], &utiles[1..])
        };
        let signe = if exp < 0 { '-' } else { '+' };
        format!("{m}e{signe}{:02}", exp.abs())
    } else if exp >= 0 {
        // positionnel, point au milieu des chiffres significatifs
        let coupe = (exp as usize) + 1;
        let entier = &chiffres[..coupe];
        let frac = chiffres[coupe..].trim_end_matches('0');
        if frac.is_empty() {
            entier.to_string()
        } else {
            format!("{entier}.{frac}")
        }
    } else {
        // "0.0...ddd" : |exp|-1 zéros de tête
        let zeros = "0".repeat((-exp - 1) as usize);
        let frac = chiffres.trim_end_matches('0');
        format!("0.{zeros}{frac}")
    };

    if negatif {
        format!("-{corps}")
    } else {
        corps
    }
}
