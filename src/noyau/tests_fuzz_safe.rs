//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le modèle de saisie et le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - nombre de frappes borné
//! - budget temps global
//! - invariants clés après CHAQUE frappe :
//!     * le tampon n'est jamais vide
//!     * jamais deux caractères d'opérateur consécutifs en fin de tampon
//!     * au plus un point décimal dans le nombre final
//! - l'évaluation ne panique jamais ; un succès est toujours FINI

use std::time::{Duration, Instant};

use super::eval::evalue_expression;
use super::saisie::Saisie;

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

/* ------------------------ Frappes aléatoires ------------------------ */

const CHIFFRES: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '.'];
const OPERATEURS: [char; 6] = ['+', '-', '*', '/', '×', '÷'];

fn frappe_aleatoire(rng: &mut Rng, s: &mut Saisie) {
    match rng.pick(10) {
        // majorité de chiffres pour produire des expressions "réalistes"
        0..=4 => s.ajoute_chiffre(CHIFFRES[rng.pick(11) as usize]),
        5 | 6 => s.ajoute_operateur(OPERATEURS[rng.pick(6) as usize]),
        7 => s.bascule_signe(),
        8 => s.ajoute_pourcent(),
        _ => match rng.pick(3) {
            0 => s.retour_arriere(),
            1 => {
                let _ = s.evalue();
            }
            _ => s.efface_tout(),
        },
    }
}

/* ------------------------ Invariants du tampon ------------------------ */

fn est_char_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '×' | '÷')
}

fn verifie_invariants(s: &Saisie) {
    let t = s.texte();

    assert!(!t.is_empty(), "tampon vide");

    // jamais deux opérateurs consécutifs en fin de tampon
    let fin: Vec<char> = t.chars().rev().take(2).collect();
    if fin.len() == 2 {
        assert!(
            !(est_char_operateur(fin[0]) && est_char_operateur(fin[1])),
            "deux opérateurs en fin de tampon: {t:?}"
        );
    }

    // au plus un point dans le nombre final
    let points = t
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .filter(|c| *c == '.')
        .count();
    assert!(points <= 1, "deux points dans le nombre final: {t:?}");
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_saisie_invariants() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut s = Saisie::nouvelle();

    for _ in 0..4000 {
        budget(t0, max);
        frappe_aleatoire(&mut rng, &mut s);
        verifie_invariants(&s);
    }
}

#[test]
fn fuzz_safe_determinisme_des_sessions() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes frappes => mêmes tampons, pas d'état global caché.
    let mut rng_a = Rng::new(0xBADC0DE_u64);
    let mut rng_b = Rng::new(0xBADC0DE_u64);
    let mut a = Saisie::nouvelle();
    let mut b = Saisie::nouvelle();

    for _ in 0..1500 {
        budget(t0, max);
        frappe_aleatoire(&mut rng_a, &mut a);
        frappe_aleatoire(&mut rng_b, &mut b);
        assert_eq!(a.texte(), b.texte());
    }
}

#[test]
fn fuzz_safe_evaluation_jamais_de_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFACADE_u64);
    let mut s = Saisie::nouvelle();

    let mut vus_ok = 0usize;
    let mut vus_err = 0usize;

    for _ in 0..2500 {
        budget(t0, max);
        frappe_aleatoire(&mut rng, &mut s);

        match evalue_expression(s.texte()) {
            Ok(v) => {
                assert!(v.is_finite(), "succès non fini pour {:?}", s.texte());
                vus_ok += 1;
            }
            Err(_) => vus_err += 1,
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(vus_ok > 50, "trop peu de succès: {vus_ok}");
    assert!(vus_err > 50, "trop peu d'erreurs: {vus_err}");
}
