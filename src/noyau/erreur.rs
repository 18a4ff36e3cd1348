//! Erreurs du noyau.
//!
//! Deux familles pour l'interpréteur (fatales, pas de résultat partiel) :
//! - programme malformé (structure) : l'utilisateur doit ressaisir l'entrée
//! - opérande invalide (domaine)    : on signale la position et la valeur fautives
//!
//! Plus les erreurs de lecture du littéral texte et l'erreur du pipeline complet.

use thiserror::Error;

use super::figure::Operande;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Malformation {
    #[error("programme vide")]
    ProgrammeVide,

    #[error("code de figure inconnu '{code}' en position {position} (admis : S, T, P, E)")]
    CodeInconnu { position: usize, code: char },

    #[error("flux '{flux}' trop court : {longueur} valeur(s) pour {requis} opération(s) avant 'E'")]
    FluxTropCourt {
        flux: Operande,
        longueur: usize,
        requis: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Raison {
    NonFini,
    NonPositif,
}

impl std::fmt::Display for Raison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Raison::NonFini => f.write_str("valeur absente ou non finie"),
            Raison::NonPositif => f.write_str("doit être strictement positive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurProgramme {
    #[error("programme malformé : {0}")]
    Malforme(#[from] Malformation),

    #[error("opérande invalide en position {position} : {operande} = {valeur} ({raison})")]
    OperandeInvalide {
        position: usize,
        operande: Operande,
        valeur: f64,
        raison: Raison,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurLecture {
    #[error("caractère inattendu '{c}' en colonne {colonne}")]
    CaractereInattendu { c: char, colonne: usize },

    #[error("chaîne non fermée (ouverte en colonne {colonne})")]
    ChaineNonFermee { colonne: usize },

    #[error("nombre invalide : {0}")]
    NombreInvalide(String),

    #[error("fin d'entrée inattendue")]
    FinInattendue,

    #[error("attendu {attendu}, trouvé {trouve}")]
    JetonInattendu { attendu: &'static str, trouve: String },

    #[error("{0}")]
    Structure(String),
}

/// Erreur du pipeline complet (texte -> aires).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurAires {
    #[error("entrée vide")]
    EntreeVide,

    #[error("lecture : {0}")]
    Lecture(#[from] ErreurLecture),

    #[error(transparent)]
    Programme(#[from] ErreurProgramme),
}
