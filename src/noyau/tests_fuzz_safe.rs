//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toutes les erreurs sortent typées (jamais de panique)
//! - invariants clés : Ok => valeur finie ; même graine => mêmes sorties ;
//!   une erreur n'émet jamais d'entrée d'historique

use std::time::{Duration, Instant};

use super::eval::{affichage_resultat, eval_expression};
use super::trig::ModeAngle;
use super::valeur::Valeur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atome(rng: &mut Rng) -> String {
    // le zéro est surreprésenté : c'est lui qui provoque les divisions
    // par zéro au niveau du résiduel
    match rng.pick(8) {
        0 | 1 => "0".to_string(),
        2 => "2.5".to_string(),
        3 => "7".to_string(),
        4 => "3".to_string(),
        5 => "1".to_string(),
        6 => "4".to_string(),
        _ => "9".to_string(),
    }
}

/// Argument plat (sans parenthèses) : résolvable au premier passage.
fn gen_argument(rng: &mut Rng) -> String {
    match rng.pick(3) {
        0 => gen_atome(rng),
        1 => format!("{}+{}", gen_atome(rng), gen_atome(rng)),
        _ => format!("{}*{}", gen_atome(rng), gen_atome(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(12) {
        0 => gen_atome(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        // dénominateur atomique : garantit des divisions par zéro visibles
        // au sommet (jamais avalées par un argument de fonction)
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_atome(rng)),
        5 => format!("sin({})", gen_argument(rng)),
        6 => format!("cos({})", gen_argument(rng)),
        7 => format!("tan({})", gen_argument(rng)),
        8 => format!("√({})", gen_argument(rng)),
        9 => format!("ln({})", gen_argument(rng)),
        10 => format!("{}!", rng.pick(8)),
        _ => format!("1/({})", gen_argument(rng)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let campagne = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        let mut sorties = Vec::new();

        for _ in 0..150 {
            let expr = gen_expr(&mut rng, 4);
            let (res, hist) = eval_expression(&expr, ModeAngle::Degres);

            match &res {
                Ok(v) => {
                    assert!(v.est_finie(), "Ok non fini: expr={expr:?}");
                    assert!(hist.is_some(), "succès sans historique: expr={expr:?}");
                }
                Err(_) => {
                    assert!(hist.is_none(), "erreur avec historique: expr={expr:?}");
                }
            }

            sorties.push(affichage_resultat(&res));
        }
        sorties
    };

    let a = campagne(0xC0FFEE);
    budget(t0, max);
    let b = campagne(0xC0FFEE);
    assert_eq!(a, b, "même graine => mêmes sorties");

    // un mix succès/erreurs, sinon le fuzz ne balaye rien
    let erreurs = a.iter().filter(|s| s.as_str() == "Error").count();
    assert!(erreurs > 0, "aucune erreur vue: fuzz trop sage");
    assert!(a.len() - erreurs > 10, "trop peu de succès: {}", a.len() - erreurs);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    // sin(sin(...sin(1)...)) : la résolution est itérative, une passe
    // par niveau, pas de récursion sur la profondeur
    let mut expr = "1".to_string();
    for _ in 0..80 {
        expr = format!("sin({expr})");
    }

    let (res, _h) = eval_expression(&expr, ModeAngle::Radians);
    match res {
        Ok(Valeur::Reel(x)) => assert!(x.is_finite() && x.abs() <= 1.0, "x={x}"),
        autre => panic!("attendu un réel, obtenu {autre:?}"),
    }
    budget(t0, max);
}

#[test]
fn fuzz_safe_somme_longue_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    // shunting-yard + RPN itératifs : une somme plate de 2000 termes passe
    let expr = vec!["1"; 2000].join("+");
    let (res, _h) = eval_expression(&expr, ModeAngle::Degres);
    assert_eq!(res, Ok(Valeur::Reel(2000.0)));
    budget(t0, max);
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let expr = format!("{}7{}", "(".repeat(500), ")".repeat(500));
    let (res, _h) = eval_expression(&expr, ModeAngle::Degres);
    assert_eq!(res, Ok(Valeur::Reel(7.0)));
    budget(t0, max);
}

#[test]
fn fuzz_safe_entrees_brutales() {
    // du texte hostile ou tronqué : toujours une erreur typée, jamais
    // de panique, jamais d'historique
    let brutales = [
        "", " ", ")(", "((", "++", "--", "**", "5**", "*5", "/",
        "sin(", "1/(", "10^(", "√", "√(", "!", "5!!!!", "..", ".",
        "×", "÷", "1e", "e5", "sin()", "foo(3)", "(2+3)!",
    ];

    for expr in brutales {
        let (res, hist) = eval_expression(expr, ModeAngle::Degres);
        if res.is_err() {
            assert!(hist.is_none(), "erreur avec historique: {expr:?}");
        }
    }
}
