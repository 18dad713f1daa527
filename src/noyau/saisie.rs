//! src/noyau/saisie.rs
//!
//! Modèle de saisie : le tampon d'expression en cours de construction.
//!
//! Rôle : appliquer les frappes (chiffre, opérateur, %, +/-, retour,
//! effacement) en maintenant les invariants textuels sur lesquels
//! l'évaluation peut compter :
//! - jamais vide : l'état "vide" canonique est la chaîne "0"
//! - jamais deux caractères d'opérateur consécutifs en fin de tampon
//!   (une nouvelle frappe d'opérateur REMPLACE l'opérateur final)
//! - au plus un point décimal par nombre courant
//! - au plus un '%' final par frappe (répéter '%' est sans effet)
//!
//! Contrats :
//! - Aucune arithmétique ici : l'évaluation passe par le pipeline du noyau
//!   (canonise -> jetons -> RPN), jamais autrement.
//! - Chaque session possède SA PROPRE Saisie : aucun état partagé,
//!   plusieurs sessions indépendantes peuvent coexister.
//! - Actions déterministes, sans effet de bord caché.

use super::eval::evalue_expression;

/// Caractère d'opérateur binaire tel qu'il peut apparaître DANS le tampon
/// (formes canoniques + glyphes d'affichage insérés par l'UI).
fn est_char_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '×' | '÷')
}

/// Plage (octets) du nombre final du tampon : la suite maximale de
/// chiffres/points en fin de chaîne, en sautant AU PLUS un espace final.
/// Tout autre caractère non numérique arrête la lecture.
///
/// Fonction pure : c'est elle qui porte la logique "dernier nombre"
/// (garde du point décimal + bascule de signe), testable isolément.
fn plage_nombre_final(s: &str) -> Option<(usize, usize)> {
    let mut it = s.char_indices().rev().peekable();

    // un seul espace final est toléré
    let mut fin = s.len();
    if let Some(&(i, ' ')) = it.peek() {
        fin = i;
        it.next();
    }

    let mut debut = fin;
    for (i, c) in it {
        if c.is_ascii_digit() || c == '.' {
            debut = i;
        } else {
            break;
        }
    }

    if debut == fin {
        None
    } else {
        Some((debut, fin))
    }
}

/// Tampon d'expression + drapeau "vient d'évaluer".
///
/// Cycle de vie : créé à "0", muté en place par chaque frappe, remis à "0"
/// par l'effacement ; jamais détruit tant que la session vit.
#[derive(Clone, Debug)]
pub struct Saisie {
    expr: String,
    vient_evaluer: bool,
}

impl Default for Saisie {
    fn default() -> Self {
        Self {
            expr: "0".to_string(),
            vient_evaluer: false,
        }
    }
}

impl Saisie {
    pub fn nouvelle() -> Self {
        Self::default()
    }

    /// Texte courant du tampon (toujours non vide).
    pub fn texte(&self) -> &str {
        &self.expr
    }

    /// Chiffre ou point décimal.
    ///
    /// - le point est d'abord contrôlé contre le nombre final du tampon
    ///   ACTUEL (même juste après '=') : refusé s'il en contient déjà un
    /// - après '=' ou sur le tampon "0", la frappe REMPLACE tout le tampon
    ///   (une nouvelle expression commence)
    pub fn ajoute_chiffre(&mut self, c: char) {
        if !c.is_ascii_digit() && c != '.' {
            return;
        }

        if c == '.' {
            if let Some((i, j)) = plage_nombre_final(&self.expr) {
                if self.expr[i..j].contains('.') {
                    return;
                }
            }
        }

        if self.vient_evaluer || self.expr == "0" {
            self.expr.clear();
        }
        self.expr.push(c);
        self.vient_evaluer = false;
    }

    /// Opérateur binaire (+ - * / et glyphes × ÷).
    ///
    /// Règle de fusion : si le tampon se termine déjà par un opérateur,
    /// la nouvelle frappe le REMPLACE (seul le dernier opérateur survit).
    /// Sinon on étend le tampon — y compris un "0" seul ou un résultat
    /// fraîchement évalué (le drapeau n'est levé que sur ce chemin-là).
    pub fn ajoute_operateur(&mut self, op: char) {
        if !est_char_operateur(op) {
            return;
        }

        if self.expr.chars().last().is_some_and(est_char_operateur) {
            self.expr.pop();
            self.expr.push(op);
            return;
        }

        self.expr.push(op);
        self.vient_evaluer = false;
    }

    /// AC : retour à l'état canonique "0".
    pub fn efface_tout(&mut self) {
        self.expr.clear();
        self.expr.push('0');
        self.vient_evaluer = false;
    }

    /// Retour arrière, un caractère à la fois.
    ///
    /// Juste après '=', la première frappe ne fait que DÉVERROUILLER
    /// l'édition (drapeau baissé, texte intact). Le tampon ne descend
    /// jamais sous "0".
    pub fn retour_arriere(&mut self) {
        if self.vient_evaluer {
            self.vient_evaluer = false;
            return;
        }

        self.expr.pop();
        if self.expr.is_empty() {
            self.expr.push('0');
        }
    }

    /// +/- : enrobe le nombre final dans un groupe de négation "(-n)",
    /// ou déplie ce groupe s'il est déjà là (aller-retour exact).
    /// Sans effet s'il n'y a pas de nombre final.
    pub fn bascule_signe(&mut self) {
        // Groupe déjà replié en fin de tampon : "(-<nombre>)" -> "<nombre>".
        if let Some(reste) = self.expr.strip_suffix(')') {
            if let Some((i, j)) = plage_nombre_final(reste) {
                if j == reste.len() && reste[..i].ends_with("(-") {
                    let nombre = self.expr[i..j].to_string();
                    self.expr.truncate(i - 2);
                    self.expr.push_str(&nombre);
                    return;
                }
            }
        }

        let Some((i, j)) = plage_nombre_final(&self.expr) else {
            return;
        };

        let nombre = self.expr[i..j].to_string();
        let apres = self.expr[j..].to_string();

        if self.expr[..i].ends_with("(-") {
            // forme forgée sans fermante ("(-12") : on retire l'enrobage
            self.expr.truncate(i - 2);
            self.expr.push_str(&nombre);
        } else {
            self.expr.truncate(i);
            self.expr.push_str("(-");
            self.expr.push_str(&nombre);
            self.expr.push(')');
        }
        self.expr.push_str(&apres);
    }

    /// % : au plus un '%' final (répéter la frappe est sans effet).
    pub fn ajoute_pourcent(&mut self) {
        if self.expr.ends_with('%') {
            return;
        }
        self.expr.push('%');
    }

    /// '=' : évalue le tampon via le pipeline du noyau et lève le drapeau.
    ///
    /// Le texte n'est PAS modifié — seule une frappe de chiffre ultérieure
    /// démarre une nouvelle expression. Un échec laisse tout intact ;
    /// l'utilisateur continue d'éditer.
    pub fn evalue(&mut self) -> Result<f64, String> {
        let resultat = evalue_expression(&self.expr);
        self.vient_evaluer = true;
        resultat
    }
}
