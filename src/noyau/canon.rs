// src/noyau/canon.rs
//
// Canonicalisation de l’entrée (déterministe) :
// - réécriture des glyphes d’affichage : '×' -> '*', '÷' -> '/'
// - liste blanche de caractères : chiffres, '.', '(', ')', '%', espace,
//   '+', '-', '*', '/'
// - tout le reste est SUPPRIMÉ en silence (politique permissive assumée :
//   le bruit lexical ne remonte jamais à l’utilisateur)
//
// Propriétés : pure, totale, idempotente (canonise(canonise(s)) == canonise(s)).

/// Caractère accepté dans l’alphabet d’évaluation (après réécriture des glyphes).
fn est_accepte(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '(' | ')' | '%' | ' ' | '+' | '-' | '*' | '/')
}

/// Canonise une expression brute pour le pipeline d’évaluation.
///
/// Exemple : `"3×abc2÷4"` -> `"3*2/4"`.
pub fn canonise(brut: &str) -> String {
    let mut out = String::with_capacity(brut.len());

    for c in brut.chars() {
        let c = match c {
            '×' => '*',
            '÷' => '/',
            autre => autre,
        };

        if est_accepte(c) {
            out.push(c);
        }
    }

    out
}
