//! Tests scientifiques (campagne) : propriétés du pipeline + format.
//!
//! But : vérifier les lois observables de bout en bout, sans redécouper
//! les modules.
//! - aller-retour format/parse (10 chiffres significatifs)
//! - idempotence du format
//! - trig selon le mode d'angle
//! - résolution imbriquée + politique "argument fautif => 0"
//! - frontières (factorielle, complexes, notation scientifique)

use super::erreur::ErreurEval;
use super::eval::{affichage_resultat, eval_expression};
use super::format::{format_reel, format_valeur};
use super::trig::ModeAngle;
use super::unaire::{applique_unaire, OpUnaire};
use super::valeur::Valeur;

fn affiche(expr: &str, mode: ModeAngle) -> String {
    let (res, _h) = eval_expression(expr, mode);
    affichage_resultat(&res)
}

fn reel(expr: &str, mode: ModeAngle) -> f64 {
    let (res, _h) = eval_expression(expr, mode);
    match res {
        Ok(Valeur::Reel(x)) => x,
        autre => panic!("attendu un réel pour {expr:?}, obtenu {autre:?}"),
    }
}

/* ------------------------ Lois format <-> parse ------------------------ */

const ECHANTILLON: [f64; 12] = [
    0.5,
    -0.5,
    1.0 / 3.0,
    123.456,
    -2.5e-7,
    1024.0,
    9.999_999_999,
    0.000_123_4,
    12_345_678_901.5,
    1e15,
    -1e15,
    170.0,
];

#[test]
fn sci_aller_retour_format() {
    // évaluer le texte affiché redonne la valeur, à l'arrondi
    // des 10 chiffres significatifs près
    for &x in &ECHANTILLON {
        let texte = format_reel(x);
        let y = reel(&texte, ModeAngle::Degres);
        let tolerance = x.abs().max(1e-300) * 1e-9;
        assert!(
            (y - x).abs() <= tolerance,
            "aller-retour: x={x} texte={texte} y={y}"
        );
    }
}

#[test]
fn sci_format_idempotent() {
    // NOTE: un non-entier que l'arrondi à 10 chiffres rend entier
    // (ex. 12345678901.5) change de forme au second passage à cause de
    // l'aplatissement entier ; la loi vaut hors de cette frontière.
    for &x in &ECHANTILLON {
        let texte = format_reel(x);
        let relu: f64 = texte.parse().unwrap_or_else(|_| panic!("parse de {texte:?}"));
        if x.fract() != 0.0 && relu.fract() == 0.0 {
            continue;
        }
        assert_eq!(format_reel(relu), texte, "x={x}");
    }
}

#[test]
fn sci_format_frontieres() {
    // entiers aplatis sans point
    assert_eq!(format_reel(1024.0), "1024");
    assert_eq!(format_reel(-3.0), "-3");
    assert_eq!(format_reel(0.0), "0");
    assert_eq!(format_reel(1e15), "1000000000000000");

    // 10 chiffres significatifs, zéros finaux retirés
    assert_eq!(format_reel(0.1 + 0.2), "0.3");
    assert_eq!(format_reel(1.0 / 3.0), "0.3333333333");
    assert_eq!(format_reel(2.0 / 3.0), "0.6666666667");

    // bascule en notation scientifique hors [-4, 10)
    assert_eq!(format_reel(12_345_678_901.5), "1.23456789e+10");
    assert_eq!(format_reel(1.23e-7), "1.23e-07");
    assert_eq!(format_reel(-1.23e-7), "-1.23e-07");

    // non fini => jeton d'erreur
    assert_eq!(format_reel(f64::INFINITY), "Error");
    assert_eq!(format_reel(f64::NAN), "Error");
}

#[test]
fn sci_format_complexe() {
    use num_complex::Complex64;

    // partie imaginaire nulle : renormalisé en réel
    assert_eq!(format_valeur(Valeur::Complexe(Complex64::new(2.5, 0.0))), "2.5");

    // forme "<re>+<im>j", signe de l'imaginaire conservé
    assert_eq!(format_valeur(Valeur::Complexe(Complex64::new(1.0, 2.0))), "1+2j");
    assert_eq!(format_valeur(Valeur::Complexe(Complex64::new(1.0, -2.0))), "1+-2j");
}

/* ------------------------ Trig + mode d'angle ------------------------ */

#[test]
fn sci_trig_degres_vs_radians() {
    assert_eq!(affiche("sin(30)", ModeAngle::Degres), "0.5");
    assert_eq!(affiche("cos(60)", ModeAngle::Degres), "0.5");

    let x = reel("sin(30)", ModeAngle::Radians);
    assert!((x - (-0.988_031_624_092_861_8)).abs() < 1e-12, "x={x}");

    // inverses : conversion de la SORTIE
    assert_eq!(affiche("asin(0.5)", ModeAngle::Degres), "30");
    let x = reel("asin(0.5)", ModeAngle::Radians);
    assert!((x - std::f64::consts::FRAC_PI_6).abs() < 1e-12, "x={x}");
}

#[test]
fn sci_trig_imbriquee() {
    // cos(90°) est un epsilon, sin(epsilon) aussi : tout doit rester fini
    let x = reel("sin(cos(90))", ModeAngle::Degres);
    assert!(x.abs() < 1e-15, "x={x}");
}

/* ------------------------ Résolution imbriquée ------------------------ */

#[test]
fn sci_resolution_imbriquee() {
    assert_eq!(affiche("√(16)+1/(2)", ModeAngle::Degres), "4.5");
    assert_eq!(affiche("exp(ln(5))", ModeAngle::Degres), "5");
    assert_eq!(affiche("abs(0-3)*2", ModeAngle::Degres), "6");
    assert_eq!(affiche("10^(1/(2))*10^(1/(2))", ModeAngle::Degres), "10");
}

#[test]
fn sci_prefixes_colles_a_un_nombre() {
    // "21/(3)" est une division, pas l'inverse de 3
    assert_eq!(affiche("21/(3)", ModeAngle::Degres), "7");
    // "210^(2)" est une puissance de 210, pas 2*10^(2)
    assert_eq!(affiche("210^(2)", ModeAngle::Degres), "44100");
}

#[test]
fn sci_argument_fautif_degrade_en_zero() {
    assert_eq!(affiche("3+√(0-1)", ModeAngle::Degres), "3");
    assert_eq!(affiche("1/(0)+9", ModeAngle::Degres), "9");
    assert_eq!(affiche("log(0-10)+4", ModeAngle::Degres), "4");

    // mais une faute dans le résiduel final reste une erreur
    assert_eq!(affiche("√(4)+", ModeAngle::Degres), "Error");
}

/* ------------------------ Factorielle ------------------------ */

#[test]
fn sci_factorielle_bornes() {
    assert_eq!(affiche("0!", ModeAngle::Degres), "1");
    assert_eq!(affiche("170!-170!", ModeAngle::Degres), "0");
    // 171! déborde f64 : hors domaine => 0
    assert_eq!(affiche("171!+2", ModeAngle::Degres), "2");
}

/* ------------------------ Unaires (contrats observables) ------------------------ */

#[test]
fn sci_unaires_contrats() {
    let (res, h) = applique_unaire("5", OpUnaire::Factorielle, ModeAngle::Degres);
    assert_eq!(res, Ok(Valeur::Reel(120.0)));
    assert_eq!(h.as_deref(), Some("5! = 120"));

    let (res, h) = applique_unaire("-3", OpUnaire::Factorielle, ModeAngle::Degres);
    assert_eq!(res, Err(ErreurEval::Domaine));
    assert!(h.is_none());

    let (res, h) = applique_unaire("0", OpUnaire::Racine, ModeAngle::Degres);
    assert_eq!(res, Ok(Valeur::Reel(0.0)));
    assert!(h.is_none());
}

/* ------------------------ Notation scientifique en entrée ------------------------ */

#[test]
fn sci_notation_scientifique_acceptee() {
    assert_eq!(affiche("1e3+1", ModeAngle::Degres), "1001");
    assert_eq!(affiche("2.5e-1*4", ModeAngle::Degres), "1");
}
