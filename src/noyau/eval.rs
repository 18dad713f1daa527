//! Noyau — évaluation (pipeline réel)
//!
//! canonise -> jetons -> RPN -> valeur finie
//!
//! Politique permissive (assumée, ne pas "corriger") :
//! - les caractères hors alphabet sont supprimés par canonise, jamais signalés
//! - le tokenizer n'échoue jamais ; c'est l'évaluation RPN qui rejette les
//!   suites malformées (opérandes en trop / manquants)
//! - un deuxième point décimal casse le nombre en silence : certaines entrées
//!   forgées à la main s'évaluent donc au lieu d'échouer franchement
//!
//! Toute défaillance (structurelle ou numérique) sort par le MÊME marqueur
//! Err : l'appelant ne distingue que "valeur finie" / "erreur".

use super::canon::canonise;
use super::jetons::decoupe;
use super::rpn::{en_rpn, evalue_rpn};

/// Garde-fou : longueur d'entrée maximale (anti-abus / anti-gel).
/// L'UI borne déjà la saisie en pratique ; on se défend quand même.
const LONGUEUR_MAX: usize = 4096;

/// API publique : évalue une expression et retourne sa valeur FINIE.
///
/// Sans état : appelable indépendamment du modèle de saisie (tests compris).
/// Déterministe et idempotente : deux appels sur la même chaîne donnent
/// le même résultat.
pub fn evalue_expression(expr_str: &str) -> Result<f64, String> {
    if expr_str.len() > LONGUEUR_MAX {
        return Err("entrée trop longue".into());
    }

    // 1) Canonisation (alphabet + glyphes d'affichage)
    let propre = canonise(expr_str);

    // 2) Jetons
    let jetons = decoupe(&propre);

    // 3) RPN
    let rpn = en_rpn(&jetons)?;

    // 4) Valeur (contrôle de finitude inclus)
    evalue_rpn(&rpn)
}
