//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'interpréteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - tailles bornées
//! - budget temps global
//! - invariants clés :
//!   * succès => longueur du résultat == position d'arrêt
//!   * échec sur opérande => c'est bien la PREMIÈRE position fautive, et opérande consommé
//!   * texte et API directe donnent la même chose

use std::time::{Duration, Instant};

use super::erreur::{ErreurAires, ErreurProgramme, Malformation};
use super::eval_programme;
use super::figure::{Figure, Operande};
use super::interpreteur::{evaluer, position_arret};

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
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
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

/* ------------------------ Génération de programmes (bornée) ------------------------ */

struct Cas {
    codes: Vec<char>,
    a: Vec<f64>,
    b: Vec<f64>,
    h: Vec<f64>,
}

fn gen_code(rng: &mut Rng) -> char {
    // surtout des figures, un peu de 'E' et de codes inconnus
    match rng.pick(20) {
        0..=5 => 'S',
        6..=11 => 'T',
        12..=16 => 'P',
        17 | 18 => 'E',
        _ => 'X',
    }
}

fn gen_valeur(rng: &mut Rng) -> f64 {
    match rng.pick(16) {
        0 => 0.0,
        1 => -1.0,
        2 => f64::NAN,
        3 => 0.5,
        4 => 0.25,
        k => f64::from(k - 4),
    }
}

fn gen_cas(rng: &mut Rng) -> Cas {
    let n = 1 + rng.pick(8) as usize;
    let codes: Vec<char> = (0..n).map(|_| gen_code(rng)).collect();

    // flux parfois un peu trop courts
    let flux = |rng: &mut Rng| -> Vec<f64> {
        let len = if rng.pick(10) == 0 {
            n.saturating_sub(1)
        } else {
            n
        };
        (0..len).map(|_| gen_valeur(rng)).collect()
    };

    let a = flux(rng);
    let b = flux(rng);
    let h = flux(rng);
    Cas { codes, a, b, h }
}

fn valeur_texte(v: f64) -> String {
    if v.is_nan() {
        "None".to_string()
    } else {
        format!("{v}")
    }
}

fn cas_texte(c: &Cas) -> String {
    let codes: Vec<String> = c.codes.iter().map(|c| format!("'{c}'")).collect();
    let flux = |v: &[f64]| {
        v.iter()
            .map(|&x| valeur_texte(x))
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        "[[{}],[{}],[{}],[{}]]",
        codes.join(","),
        flux(&c.a),
        flux(&c.b),
        flux(&c.h)
    )
}

fn operande_valide(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Première position (avant l'arrêt) dont un opérande consommé est invalide.
fn premiere_fautive(c: &Cas, arret: usize) -> Option<usize> {
    (0..arret).find(|&i| {
        let fig = match Figure::depuis_code(c.codes[i]) {
            Some(f) => f,
            None => return false,
        };
        fig.operandes_requis().iter().any(|op| {
            let v = match op {
                Operande::A => c.a[i],
                Operande::B => c.b[i],
                Operande::H => c.h[i],
            };
            !operande_valide(v)
        })
    })
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_invariants_interpreteur() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_operande = 0usize;
    let mut seen_malforme = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let c = gen_cas(&mut rng);
        let arret = position_arret(&c.codes);

        match evaluer(&c.codes, &c.a, &c.b, &c.h) {
            Ok(aires) => {
                assert_eq!(aires.len(), arret, "codes={:?}", c.codes);
                assert!(aires.iter().all(|v| v.is_finite() && *v > 0.0));
                assert_eq!(premiere_fautive(&c, arret), None);
                seen_ok += 1;
            }
            Err(ErreurProgramme::OperandeInvalide {
                position, operande, ..
            }) => {
                assert!(position < arret);
                assert_eq!(premiere_fautive(&c, arret), Some(position));
                let fig = Figure::depuis_code(c.codes[position]).unwrap();
                assert!(fig.consomme(operande), "opérande non consommé rapporté");
                seen_operande += 1;
            }
            Err(ErreurProgramme::Malforme(m)) => {
                match m {
                    Malformation::ProgrammeVide => panic!("jamais vide ici"),
                    Malformation::CodeInconnu { position, code } => {
                        assert!(position < arret);
                        assert_eq!(c.codes[position], code);
                    }
                    Malformation::FluxTropCourt {
                        longueur, requis, ..
                    } => {
                        assert_eq!(requis, arret);
                        assert!(longueur < requis);
                    }
                }
                seen_malforme += 1;
            }
        }
    }

    // On veut voir un mix des trois, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_operande > 10, "trop peu d'opérandes invalides: {seen_operande}");
    assert!(seen_malforme > 0, "aucun programme malformé vu");
}

#[test]
fn fuzz_safe_texte_equivaut_api() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let c = gen_cas(&mut rng);
        let texte = cas_texte(&c);

        let direct = evaluer(&c.codes, &c.a, &c.b, &c.h);
        let via_texte = eval_programme(&texte).map(|(aires, _d)| aires);

        match (direct, via_texte) {
            (Ok(x), Ok(y)) => assert_eq!(x, y, "texte={texte}"),
            (Err(e), Err(ErreurAires::Programme(f))) => {
                // NaN != NaN : on compare les messages
                assert_eq!(e.to_string(), f.to_string(), "texte={texte}")
            }
            (x, y) => panic!("divergence texte={texte}: {x:?} / {y:?}"),
        }
    }
}

#[test]
fn fuzz_safe_determinisme() {
    let mut r1 = Rng::new(42);
    let mut r2 = Rng::new(42);
    for _ in 0..50 {
        let c1 = gen_cas(&mut r1);
        let c2 = gen_cas(&mut r2);
        assert_eq!(cas_texte(&c1), cas_texte(&c2));
    }
}
