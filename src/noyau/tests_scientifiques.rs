//! Tests scientifiques (campagne) : propriétés de l'interpréteur d'aires.
//!
//! - troncature au premier 'E'
//! - tolérance des opérandes non consommés
//! - tout ou rien : validation complète AVANT le calcul
//! - formules
//! - programmes malformés (code inconnu, flux trop courts)
//!
//! Chaque propriété est vérifiée sur l'API directe (evaluer) et,
//! quand c'est exprimable en texte, sur le pipeline complet (eval_programme).

use std::time::{Duration, Instant};

use super::erreur::{ErreurAires, ErreurProgramme, Malformation, Raison};
use super::eval_programme;
use super::figure::Operande;
use super::interpreteur::evaluer;

fn aires_ok(texte: &str) -> Vec<f64> {
    eval_programme(texte)
        .unwrap_or_else(|e| panic!("programme={texte:?} err={e}"))
        .0
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Troncature 'E' ------------------------ */

#[test]
fn sci_troncature_e() {
    let aires = evaluer(&['S', 'E', 'T'], &[2.0, 0.0, 5.0], &[0.0; 3], &[0.0; 3]).unwrap();
    assert_eq!(aires, vec![4.0]);

    assert_eq!(aires_ok("[['S','E','T'],[2,0,5],[0,0,0],[0,0,0]]"), vec![4.0]);
}

#[test]
fn sci_longueur_sans_e() {
    let codes = ['S', 'T', 'P', 'S'];
    let un = [1.0; 4];
    let aires = evaluer(&codes, &un, &un, &un).unwrap();
    assert_eq!(aires.len(), codes.len());
}

#[test]
fn sci_flux_courts_apres_e_acceptes() {
    // stop = 1 : un seul élément suffit par flux
    let aires = evaluer(&['T', 'E', 'T', 'T'], &[1.0], &[1.0], &[2.0]).unwrap();
    assert_eq!(aires, vec![2.0]);
}

/* ------------------------ Opérandes non consommés ------------------------ */

#[test]
fn sci_operandes_inutilises_jamais_valides() {
    let aires = evaluer(&['S'], &[3.0], &[-999.0], &[f64::NAN]).unwrap();
    assert_eq!(aires, vec![9.0]);

    assert_eq!(aires_ok("[['S'],[3],[-999],[nan]]"), vec![9.0]);
    assert_eq!(aires_ok("[['P'],[6],[None],[2]]"), vec![12.0]);
}

/* ------------------------ Tout ou rien ------------------------ */

#[test]
fn sci_validation_avant_calcul() {
    let err = evaluer(&['S', 'T'], &[2.0, 3.0], &[0.0, 4.0], &[0.0, -1.0]).unwrap_err();
    assert_eq!(
        err,
        ErreurProgramme::OperandeInvalide {
            position: 1,
            operande: Operande::H,
            valeur: -1.0,
            raison: Raison::NonPositif,
        }
    );

    // même chose en texte : aucune aire, pas même la position 0
    match eval_programme("[['S','T'],[2,3],[0,4],[0,-1]]") {
        Err(ErreurAires::Programme(ErreurProgramme::OperandeInvalide { position, .. })) => {
            assert_eq!(position, 1)
        }
        autre => panic!("attendu OperandeInvalide: {autre:?}"),
    }
}

#[test]
fn sci_premiere_position_fautive_rapportee() {
    let err = evaluer(
        &['S', 'S', 'S'],
        &[1.0, 0.0, f64::INFINITY],
        &[0.0; 3],
        &[0.0; 3],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ErreurProgramme::OperandeInvalide {
            position: 1,
            raison: Raison::NonPositif,
            ..
        }
    ));
}

#[test]
fn sci_infini_refuse() {
    let err = evaluer(&['P'], &[f64::INFINITY], &[0.0], &[1.0]).unwrap_err();
    assert!(matches!(
        err,
        ErreurProgramme::OperandeInvalide {
            operande: Operande::A,
            raison: Raison::NonFini,
            ..
        }
    ));
    assert!(err.to_string().contains("position 0"));
}

/* ------------------------ Formules ------------------------ */

#[test]
fn sci_formules() {
    let aires = evaluer(
        &['S', 'T', 'P'],
        &[5.0, 2.0, 6.0],
        &[0.0, 4.0, 0.0],
        &[0.0, 3.0, 2.0],
    )
    .unwrap();
    assert_eq!(aires, vec![25.0, 9.0, 12.0]);
}

#[test]
fn sci_trapeze_fraction_exacte() {
    // (1/2 + 3/2) * 1/4 / 2 = 1/4
    assert_eq!(aires_ok("[['T'],[1/2],[3/2],[1/4]]"), vec![0.25]);
}

/* ------------------------ Malformés ------------------------ */

#[test]
fn sci_code_inconnu() {
    let un = [1.0, 1.0];
    assert_eq!(
        evaluer(&['S', 'X'], &un, &un, &un),
        Err(ErreurProgramme::Malforme(Malformation::CodeInconnu {
            position: 1,
            code: 'X'
        }))
    );
}

#[test]
fn sci_code_minuscule_inconnu() {
    let un = [1.0];
    assert!(matches!(
        evaluer(&['s'], &un, &un, &un),
        Err(ErreurProgramme::Malforme(Malformation::CodeInconnu { .. }))
    ));
}

#[test]
fn sci_flux_trop_court() {
    assert_eq!(
        evaluer(&['S', 'S'], &[1.0], &[], &[]),
        Err(ErreurProgramme::Malforme(Malformation::FluxTropCourt {
            flux: Operande::A,
            longueur: 1,
            requis: 2
        }))
    );
}

#[test]
fn sci_programme_vide() {
    assert!(matches!(
        eval_programme("[[],[],[],[]]"),
        Err(ErreurAires::Programme(ErreurProgramme::Malforme(
            Malformation::ProgrammeVide
        )))
    ));
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_long_programme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let n = 10_000;
    let codes: Vec<char> = (0..n).map(|i| ['S', 'T', 'P'][i % 3]).collect();
    let a: Vec<f64> = (0..n).map(|i| (i % 7 + 1) as f64).collect();
    let b = vec![2.0; n];
    let h = vec![4.0; n];

    let aires = evaluer(&codes, &a, &b, &h).unwrap();
    budget(t0, max);

    assert_eq!(aires.len(), n);
    assert_eq!(aires[0], 1.0); // S(1)
    assert_eq!(aires[1], 8.0); // T(2, 2, 4)
    assert_eq!(aires[2], 12.0); // P(3, 4)
}
