// src/app/vue.rs
//
// Vue console
// -----------
// - Rendu texte de l'état (une aire par ligne, ou l'erreur telle quelle)
// - Lignes de commande du mode interactif (:c, :clr, :ac, :q, ...)
// - Appel du noyau + journalisation (le noyau, lui, ne journalise rien)

use std::fmt::Write as _;

use tracing::{debug, info, warn};

use super::etat::{Demarche, SessionAires};
use crate::noyau::format::format_aires;

/// Ce que la boucle interactive doit faire après une ligne.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Suite {
    Afficher,
    Silence,
    Quitter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    BasculerDemarche,
    Chiffres(Option<usize>),
    Quitter,
}

fn action_depuis(ligne: &str) -> Option<Result<Action, String>> {
    let reste = ligne.strip_prefix(':')?;
    let mut mots = reste.split_whitespace();
    let cmd = mots.next().unwrap_or("");

    let a = match cmd {
        "c" => Ok(Action::ClearEntree),
        "clr" => Ok(Action::ClearResultats),
        "ac" => Ok(Action::ResetTotal),
        "demarche" => Ok(Action::BasculerDemarche),
        "q" | "quit" => Ok(Action::Quitter),
        "chiffres" => match mots.next() {
            None | Some("court") => Ok(Action::Chiffres(None)),
            Some(n) => n
                .parse::<usize>()
                .map(|d| Action::Chiffres(Some(d)))
                .map_err(|_| format!("précision invalide : {n}")),
        },
        autre => Err(format!("commande inconnue : :{autre}")),
    };
    Some(a)
}

impl SessionAires {
    /// Évalue `entree` via le noyau et range le résultat dans l'état.
    pub fn eval_via_noyau(&mut self) {
        let s = self.entree.trim();
        debug!(entree = %s, "évaluation du programme");

        match crate::noyau::eval_programme(s) {
            Ok((aires, d_noyau)) => {
                info!(aires = aires.len(), arret = d_noyau.arret, "aires calculées");
                let d = Demarche {
                    jetons: d_noyau.jetons,
                    codes: d_noyau.codes,
                    arret: d_noyau.arret,
                    operations: d_noyau.operations,
                    note: d_noyau.note,
                };
                self.set_resultats(aires, d);
            }
            Err(e) => {
                warn!(erreur = %e, "programme refusé");
                self.set_erreur(e.to_string());
            }
        }
    }

    /// Une ligne du mode interactif : commande ':...' ou programme à évaluer.
    pub fn traiter_ligne(&mut self, ligne: &str) -> Suite {
        let ligne = ligne.trim();
        if ligne.is_empty() {
            return Suite::Silence;
        }

        match action_depuis(ligne) {
            Some(Ok(action)) => self.appliquer(action),
            Some(Err(msg)) => {
                self.set_erreur(msg);
                Suite::Afficher
            }
            None => {
                self.entree = ligne.to_string();
                self.eval_via_noyau();
                Suite::Afficher
            }
        }
    }

    fn appliquer(&mut self, action: Action) -> Suite {
        debug!(?action, "commande");
        match action {
            Action::ClearEntree => {
                self.clear_entree();
                Suite::Silence
            }
            Action::ClearResultats => {
                self.clear_resultats();
                Suite::Silence
            }
            Action::ResetTotal => {
                self.reset_total();
                Suite::Silence
            }
            Action::BasculerDemarche => {
                self.afficher_demarche = !self.afficher_demarche;
                Suite::Afficher
            }
            Action::Chiffres(d) => {
                self.set_chiffres(d);
                Suite::Afficher
            }
            Action::Quitter => Suite::Quitter,
        }
    }

    /// Rendu texte complet (résultat OU erreur, puis démarche si demandée).
    pub fn rendu(&self) -> String {
        let mut out = String::new();

        if !self.erreur.is_empty() {
            let _ = writeln!(out, "Erreur : {}", self.erreur);
            return out;
        }
        if !self.resultat_dispo {
            return out;
        }

        out.push_str("Aires (dans l'ordre des codes, jusqu'à 'E') :\n");
        let lignes = format_aires(&self.aires, self.chiffres);
        if !lignes.is_empty() {
            out.push_str(&lignes);
            out.push('\n');
        }

        if self.afficher_demarche {
            out.push_str(&self.rendu_demarche());
        }
        out
    }

    fn rendu_demarche(&self) -> String {
        let d = &self.demarche;
        let mut out = String::from("--- Démarche ---\n");
        let _ = writeln!(out, "Jetons     : {}", d.jetons);
        let _ = writeln!(out, "Codes      : {}", d.codes);
        let _ = writeln!(out, "Arrêt      : {}", d.arret);
        let _ = writeln!(out, "Opérations : {}", d.operations);
        let _ = writeln!(out, "Note       : {}", d.note);
        out
    }
}
