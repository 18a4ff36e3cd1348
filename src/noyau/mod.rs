//! Noyau Q-pur des aires
//!
//! Organisation interne :
//! - figure.rs       : figures S/T/P + masque des opérandes + formules
//! - interpreteur.rs : contrôles structurels -> validation -> évaluation
//! - erreur.rs       : erreurs structurées (programme, lecture, pipeline)
//! - jetons.rs       : tokenisation du littéral [[codes],[a],[b],[h]]
//! - lecture.rs      : jetons -> Entree
//! - format.rs       : affichage des aires
//! - formule.rs      : formule scalaire à domaine contrôlé
//! - eval.rs         : pipeline complet

pub mod erreur;
pub mod eval;
pub mod figure;
pub mod format;
pub mod formule;
pub mod interpreteur;
pub mod jetons;
pub mod lecture;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{ErreurAires, ErreurLecture, ErreurProgramme, Malformation, Raison};
pub use eval::eval_programme;
pub use figure::{Figure, Operande};
pub use formule::{evaluer_formule, ErreurFormule};
pub use interpreteur::{evaluer, Programme};
