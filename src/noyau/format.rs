// src/noyau/format.rs

/// Formate une valeur finie pour l'affichage résultat.
///
/// Le `{}` de f64 donne la plus courte écriture décimale qui se relit
/// exactement (14 -> "14", 0.05 -> "0.05") ; seul le zéro signé est
/// normalisé en "0".
pub fn format_valeur(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
