//! src/app/etat.rs
//!
//! État de la session console (sans rendu, sans noyau).
//!
//! Rôle : contenir l'état (entrée, aires, erreur, précision, démarche)
//! et offrir des opérations simples (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Précision bornée (CHIFFRES_MAX).

use crate::noyau::format::CHIFFRES_MAX;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub codes: String,
    pub arret: usize,
    pub operations: String,
    pub note: String,
}

#[derive(Clone, Debug, Default)]
pub struct SessionAires {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub aires: Vec<f64>,
    pub erreur: String,
    pub resultat_dispo: bool, // false si erreur / rien évalué

    // --- démarche ---
    pub demarche: Demarche,
    pub afficher_demarche: bool,

    // --- paramètres ---
    pub chiffres: Option<usize>, // None = forme courte (4.0)
}

impl SessionAires {
    pub fn new(chiffres: Option<usize>, afficher_demarche: bool) -> Self {
        let mut s = Self {
            afficher_demarche,
            ..Self::default()
        };
        s.set_chiffres(chiffres);
        s
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + précision par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.chiffres = None;
    }

    /// C : effacer seulement l'entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.aires.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
    }

    /// Une erreur efface le résultat précédent : jamais d'aires périmées à l'écran.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.aires.clear();
        self.resultat_dispo = false;
        self.demarche = Demarche::default();
    }

    pub fn set_resultats(&mut self, aires: Vec<f64>, demarche: Demarche) {
        self.erreur.clear();
        self.aires = aires;
        self.demarche = demarche;
        self.resultat_dispo = true;
    }

    pub fn set_chiffres(&mut self, chiffres: Option<usize>) {
        self.chiffres = chiffres.map(|d| d.min(CHIFFRES_MAX));
    }
}
