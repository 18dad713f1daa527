//! src/app/etat.rs
//!
//! État UI (sans vue, sans arithmétique).
//!
//! Rôle : contenir l'état de la calculatrice (session de saisie + dernier
//! résultat affiché) et offrir des opérations simples sans logique
//! d'affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : l'évaluation passe par la session (vue.rs).
//! - Le tampon et le résultat affiché sont INDÉPENDANTS : un échec
//!   d'évaluation n'altère jamais le texte en cours.

use crate::noyau::{format_valeur, Saisie};

/// Texte affiché quand l'évaluation échoue (structurel ou numérique :
/// un seul marqueur pour l'utilisateur).
pub const AFFICHAGE_ERREUR: &str = "Error";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- session d'édition (une par fenêtre) ---
    pub saisie: Saisie,

    // --- sortie ---
    pub resultat: String, // dernier résultat affiché ("0" au départ)
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            saisie: Saisie::nouvelle(),
            resultat: "0".to_string(),
        }
    }
}

impl AppCalc {
    /// AC : remise à zéro totale (tampon + résultat affiché).
    pub fn efface_tout(&mut self) {
        self.saisie.efface_tout();
        self.resultat = "0".to_string();
    }

    /// Dépose un résultat numérique (valeur finie garantie par le noyau).
    pub fn depose_valeur(&mut self, v: f64) {
        self.resultat = format_valeur(v);
    }

    /// Dépose le marqueur d'erreur unique.
    pub fn depose_erreur(&mut self) {
        self.resultat = AFFICHAGE_ERREUR.to_string();
    }
}
