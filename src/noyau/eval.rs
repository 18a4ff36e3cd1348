//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> Valeur -> Entree -> contrôles structurels
//!       -> validation des opérandes -> aires
//!
//! Remarque : aucune journalisation ici, l'appelant décide quoi afficher.

use super::erreur::ErreurAires;
use super::figure::Figure;
use super::format::format_codes;
use super::interpreteur::{position_arret, Programme};
use super::jetons::{format_tokens, tokenize};
use super::lecture::lire_entree;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub codes: String,
    pub arret: usize,
    pub operations: String,
    pub note: String,
}

/// API publique : évalue un programme texte et retourne:
/// - les aires (dans l'ordre des codes jusqu'à 'E')
/// - la démarche (jetons, codes, arrêt, opérations)
pub fn eval_programme(texte: &str) -> Result<(Vec<f64>, DemarcheNoyau), ErreurAires> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurAires::EntreeVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) Entree (codes + a, b, h)
    let entree = lire_entree(&jetons)?;
    let arret = position_arret(&entree.codes);

    // 3) Contrôles + validation (tout le préfixe avant le calcul)
    let programme = Programme::compiler(&entree.codes, &entree.a, &entree.b, &entree.h)?;

    // 4) Aires
    let aires = programme.executer();

    let operations = programme
        .instructions()
        .iter()
        .map(|inst| match inst.figure {
            Figure::Carre => format!("S({})", inst.a),
            Figure::Trapeze => format!("T({}, {}, {})", inst.a, inst.b, inst.h),
            Figure::Parallelogramme => format!("P({}, {})", inst.a, inst.h),
        })
        .collect::<Vec<_>>()
        .join(" ; ");

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        codes: format_codes(&entree.codes),
        arret,
        operations,
        note: "Pipeline: jetons → entrée → contrôles structurels → validation (tout le préfixe) → aires.".into(),
    };

    Ok((aires, d))
}
