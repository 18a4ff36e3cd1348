// src/app.rs
//
// Calculatrice d'aires — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter SessionAires (pour main.rs)
//
// Important:
// - Le rendu et les commandes console sont dans vue.rs.
// - etat.rs ne connaît ni le noyau ni l'affichage.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use calculatrice_aires::app::SessionAires;`
pub use etat::SessionAires;
pub use vue::Suite;
