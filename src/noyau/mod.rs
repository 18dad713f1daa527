//! Noyau expression
//!
//! Organisation interne :
//! - canon.rs   : canonisation (alphabet + glyphes × ÷)
//! - jetons.rs  : tokenisation permissive
//! - rpn.rs     : shunting-yard + évaluation postfixée
//! - eval.rs    : pipeline complet (API sans état)
//! - format.rs  : affichage du résultat
//! - saisie.rs  : modèle de saisie (tampon + drapeau "vient d'évaluer")

pub mod canon;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use eval::evalue_expression;
pub use format::format_valeur;
pub use saisie::Saisie;
