// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> Valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN directement en Valeur (pas d'AST : le résiduel
//   est purement numérique)
//
// Règles:
// - Précédence : moins unaire > puissance > * / > + -
// - Puissance et moins unaire associatifs à droite, le reste à gauche
// - Moins unaire : un '-' qui arrive quand on n'attend PAS une valeur
//   devient l'opérateur dédié `Neg` (ainsi "-2**2" vaut 4, pas -4)

use super::erreur::ErreurEval;
use super::jetons::Tok;
use super::valeur::Valeur;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Pow => 3,
        Tok::Neg => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Pow | Tok::Neg)
}

/// Dépile vers la sortie tant que la précédence/associativité l'exige
/// (on ne traverse jamais une parenthèse ouvrante).
fn depile_operateurs(ops: &mut Vec<Tok>, out: &mut Vec<Tok>, tok: &Tok) {
    while let Some(top) = ops.last() {
        if matches!(top, Tok::LPar) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence(tok);

        let doit_pop = if is_right_associative(tok) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            out.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Pow, Num(10)]
///   rpn:    [Num(2), Num(10), Pow]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // "valeur" = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut fermee = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        fermee = true;
                        break;
                    }
                    out.push(top);
                }
                if !fermee {
                    return Err(ErreurEval::Syntaxe);
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                let op = if matches!(tok, Tok::Minus) && !prev_was_value {
                    Tok::Neg
                } else {
                    tok
                };
                depile_operateurs(&mut ops, &mut out, &op);
                ops.push(op);
                prev_was_value = false;
            }

            // jamais émis par tokenize
            Tok::Neg => return Err(ErreurEval::Syntaxe),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::Syntaxe);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN numérique.
///
/// La division par zéro est signalée ici (pas d'infini silencieux) ;
/// les opérandes manquants ou surnuméraires sont des erreurs de syntaxe.
pub fn eval_rpn(rpn: &[Tok]) -> Result<Valeur, ErreurEval> {
    let mut st: Vec<Valeur> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(n) => st.push(Valeur::Reel(n)),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurEval::Syntaxe)?;
                st.push(x.oppose());
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                let b = st.pop().ok_or(ErreurEval::Syntaxe)?;
                let a = st.pop().ok_or(ErreurEval::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a.ajoute(b),
                    Tok::Minus => a.soustrait(b),
                    Tok::Star => a.multiplie(b),
                    Tok::Slash => a.divise(b)?,
                    Tok::Pow => a.puissance(b),
                    _ => unreachable!(),
                };

                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurEval::Syntaxe),
        }
    }

    if st.len() != 1 {
        return Err(ErreurEval::Syntaxe);
    }
    Ok(st.pop().unwrap())
}
