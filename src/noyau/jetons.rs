// src/noyau/jetons.rs

/// Jeton lexical produit à partir du texte canonisé.
///
/// `MoinsU` (moins unaire) n’est JAMAIS produit ici : c’est le passage en RPN
/// qui reclasse un `Minus` d’après sa position dans le flux de jetons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    MoinsU,
    Star,
    Slash,

    // '%' postfixé (s’applique à l’opérande qui précède)
    Pct,

    LPar,
    RPar,
}

/// Tokenize une chaîne canonisée en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 7.)
/// - opérateurs + - * /
/// - '%' postfixé
/// - parenthèses ( )
///
/// Politique permissive (assumée, voir doc du module eval) :
/// - le tokenizer n’échoue JAMAIS : tout caractère non reconnu est ignoré
/// - un nombre s’arrête au DEUXIÈME point décimal ; le point surnuméraire
///   sera relu puis abandonné au tour suivant
/// - une suite qui ne se lit pas en nombre (ex: "." seul) est abandonnée
///
/// Une entrée malformée produit donc une suite de jetons que l’évaluation
/// RPN rejettera elle-même (opérandes en trop, etc.).
pub fn decoupe(s: &str) -> Vec<Tok> {
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

        // Opérateurs + '%'
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
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '%' => {
                out.push(Tok::Pct);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre décimal : chiffres + au plus UN point.
        // Un point de tête compte comme le point du nombre (".5" -> 0.5).
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            let mut point_vu = false;

            while i < chars.len() {
                let d = chars[i];
                if d.is_ascii_digit() {
                    i += 1;
                } else if d == '.' && !point_vu {
                    point_vu = true;
                    i += 1;
                } else {
                    // deuxième point ou autre caractère : fin du nombre
                    break;
                }
            }

            let texte: String = chars[start..i].iter().collect();
            if let Ok(v) = texte.parse::<f64>() {
                out.push(Tok::Num(v));
            }
            // sinon ("." seul) : abandon silencieux
            continue;
        }

        // Caractère non reconnu : ignoré (jamais d’erreur ici).
        i += 1;
    }

    out
}
