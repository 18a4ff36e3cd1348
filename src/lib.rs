//! Calculatrice d'aires — bibliothèque
//!
//! - noyau : interpréteur de flux de figures (pur, sans I/O)
//! - app   : session console (état + rendu texte)

pub mod app;
pub mod noyau;
