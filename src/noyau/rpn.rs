// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de valeurs
//
// Règles:
// - Moins unaire:
//    - un '-' est UNAIRE ssi il est le premier jeton, ou si le jeton
//      précédent est un opérateur (binaire ou unaire) ou '('
//    - la classification se fait sur le FLUX DE JETONS, pas sur le texte
//    - il devient l'opérateur synthétique MoinsU dans la table de précédence
// - '%' postfixé:
//    - opérateur ordinaire de la table (pas de cas spécial syntaxique)
//    - MoinsU et Pct lient le plus fort et sont associatifs à droite :
//      ils ne portent que sur l'opérande immédiat

use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::MoinsU | Tok::Pct => 3,
        _ => 0,
    }
}

fn est_associatif_droite(t: &Tok) -> bool {
    matches!(t, Tok::MoinsU | Tok::Pct)
}

/// Le jeton précédent force-t-il la lecture UNAIRE d'un '-' ?
fn moins_est_unaire(prec: Option<&Tok>) -> bool {
    match prec {
        None => true,
        Some(Tok::Plus | Tok::Minus | Tok::MoinsU | Tok::Star | Tok::Slash | Tok::LPar) => true,
        _ => false,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn en_rpn(jetons: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Dernier jeton CLASSIFIÉ (Minus déjà reclassé en MoinsU le cas échéant).
    let mut prec: Option<Tok> = None;

    for tok in jetons.iter().copied() {
        let tok = match tok {
            Tok::Minus if moins_est_unaire(prec.as_ref()) => Tok::MoinsU,
            autre => autre,
        };

        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu'à '('
                let mut ouvrante_vue = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante_vue = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante_vue {
                    return Err("parenthèse fermante en trop".into());
                }
            }

            Tok::Plus | Tok::Minus | Tok::MoinsU | Tok::Star | Tok::Slash | Tok::Pct => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if est_associatif_droite(&tok) {
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

                ops.push(tok);
            }
        }

        prec = Some(tok);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de valeurs f64.
///
/// Division par zéro : sémantique flottante native (la valeur non finie
/// est rejetée par le contrôle final, pas par l'opération elle-même).
pub fn evalue_rpn(rpn: &[Tok]) -> Result<f64, String> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::MoinsU => {
                let x = pile.pop().ok_or("expression invalide")?;
                pile.push(-x);
            }

            Tok::Pct => {
                let x = pile.pop().ok_or("expression invalide")?;
                pile.push(x / 100.0);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = pile.pop().ok_or("expression invalide")?;
                let a = pile.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    // Succès ssi EXACTEMENT une valeur reste et qu'elle est FINIE.
    // Rejette à la fois "trop d'opérandes", "trop d'opérateurs",
    // la division par zéro et tout débordement.
    if pile.len() != 1 {
        return Err("expression invalide".into());
    }

    let v = pile.pop().unwrap();
    if !v.is_finite() {
        return Err("résultat non fini".into());
    }

    Ok(v)
}
