// src/noyau/lecture.rs
//
// Jetons -> Valeur (arbre de listes) -> Entree (codes + flux a, b, h)
//
// Règles de structure:
// - racine : liste d'au moins 2 éléments, tous des listes
// - premier élément : les codes, chacun une chaîne d'un seul caractère
// - au moins trois flux numériques ensuite (a, b, h) ; les flux en trop sont ignorés
// - None dans un flux => NaN (refusé seulement si l'opérande est consommé)

use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::erreur::ErreurLecture;
use super::jetons::Tok;

#[derive(Clone, Debug, PartialEq)]
pub enum Valeur {
    Liste(Vec<Valeur>),
    Texte(String),
    Nombre(f64),
}

impl Valeur {
    fn genre(&self) -> &'static str {
        match self {
            Valeur::Liste(_) => "une liste",
            Valeur::Texte(_) => "une chaîne",
            Valeur::Nombre(_) => "un nombre",
        }
    }
}

/// Programme lu : codes + trois flux.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entree {
    pub codes: Vec<char>,
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub h: Vec<f64>,
}

fn decrire(t: Option<&Tok>) -> String {
    match t {
        None => "fin d'entrée".into(),
        Some(Tok::Num(r)) => format!("nombre {r}"),
        Some(Tok::Texte(s)) => format!("chaîne '{s}'"),
        Some(Tok::Nan) => "nan".into(),
        Some(Tok::Inf) => "inf".into(),
        Some(Tok::Rien) => "None".into(),
        Some(Tok::Plus) => "'+'".into(),
        Some(Tok::Moins) => "'-'".into(),
        Some(Tok::Virgule) => "','".into(),
        Some(Tok::LCro) => "'['".into(),
        Some(Tok::RCro) => "']'".into(),
    }
}

/// Imbrication maximale des listes (la forme attendue n'en demande que 2).
pub const PROFONDEUR_MAX: usize = 32;

/// Descente récursive sur les jetons.
struct Lecteur<'t> {
    toks: &'t [Tok],
    i: usize,
    profondeur: usize,
}

impl<'t> Lecteur<'t> {
    fn suivant(&mut self) -> Option<&'t Tok> {
        let t = self.toks.get(self.i);
        if t.is_some() {
            self.i += 1;
        }
        t
    }

    fn regarde(&self) -> Option<&'t Tok> {
        self.toks.get(self.i)
    }

    fn valeur(&mut self) -> Result<Valeur, ErreurLecture> {
        match self.suivant() {
            None => Err(ErreurLecture::FinInattendue),
            Some(Tok::LCro) => {
                if self.profondeur >= PROFONDEUR_MAX {
                    return Err(ErreurLecture::Structure(format!(
                        "imbrication trop profonde (max {PROFONDEUR_MAX})"
                    )));
                }
                self.profondeur += 1;
                let l = self.liste();
                self.profondeur -= 1;
                l
            }
            Some(Tok::Texte(s)) => Ok(Valeur::Texte(s.clone())),
            Some(Tok::Num(r)) => Ok(Valeur::Nombre(vers_f64(r)?)),
            Some(Tok::Nan) | Some(Tok::Rien) => Ok(Valeur::Nombre(f64::NAN)),
            Some(Tok::Inf) => Ok(Valeur::Nombre(f64::INFINITY)),
            Some(Tok::Moins) => match self.suivant() {
                Some(Tok::Num(r)) => Ok(Valeur::Nombre(-vers_f64(r)?)),
                Some(Tok::Inf) => Ok(Valeur::Nombre(f64::NEG_INFINITY)),
                Some(Tok::Nan) => Ok(Valeur::Nombre(f64::NAN)),
                autre => Err(ErreurLecture::JetonInattendu {
                    attendu: "un nombre après '-'",
                    trouve: decrire(autre),
                }),
            },
            Some(Tok::Plus) => match self.suivant() {
                Some(Tok::Num(r)) => Ok(Valeur::Nombre(vers_f64(r)?)),
                Some(Tok::Inf) => Ok(Valeur::Nombre(f64::INFINITY)),
                Some(Tok::Nan) => Ok(Valeur::Nombre(f64::NAN)),
                autre => Err(ErreurLecture::JetonInattendu {
                    attendu: "un nombre après '+'",
                    trouve: decrire(autre),
                }),
            },
            autre => Err(ErreurLecture::JetonInattendu {
                attendu: "une valeur",
                trouve: decrire(autre),
            }),
        }
    }

    /// Après '[' : éléments séparés par ',' ; virgule finale tolérée.
    fn liste(&mut self) -> Result<Valeur, ErreurLecture> {
        let mut items = Vec::new();

        loop {
            if let Some(Tok::RCro) = self.regarde() {
                self.i += 1;
                return Ok(Valeur::Liste(items));
            }

            items.push(self.valeur()?);

            match self.suivant() {
                Some(Tok::Virgule) => {}
                Some(Tok::RCro) => return Ok(Valeur::Liste(items)),
                None => return Err(ErreurLecture::FinInattendue),
                autre => {
                    return Err(ErreurLecture::JetonInattendu {
                        attendu: "',' ou ']'",
                        trouve: decrire(autre),
                    })
                }
            }
        }
    }
}

fn vers_f64(r: &BigRational) -> Result<f64, ErreurLecture> {
    r.to_f64()
        .ok_or_else(|| ErreurLecture::NombreInvalide(format!("{r} hors limites")))
}

/// Jetons -> Valeur. Tout le flux de jetons doit être consommé.
pub fn lire_valeur(toks: &[Tok]) -> Result<Valeur, ErreurLecture> {
    let mut l = Lecteur {
        toks,
        i: 0,
        profondeur: 0,
    };
    let v = l.valeur()?;
    if let Some(t) = l.regarde() {
        return Err(ErreurLecture::JetonInattendu {
            attendu: "fin d'entrée",
            trouve: decrire(Some(t)),
        });
    }
    Ok(v)
}

fn structure(msg: impl Into<String>) -> ErreurLecture {
    ErreurLecture::Structure(msg.into())
}

fn flux_numerique(v: &Valeur, nom: &str) -> Result<Vec<f64>, ErreurLecture> {
    let Valeur::Liste(items) = v else {
        return Err(structure(format!("flux '{nom}' : liste attendue")));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, x)| match x {
            Valeur::Nombre(n) => Ok(*n),
            autre => Err(structure(format!(
                "flux '{nom}', position {i} : nombre attendu, trouvé {}",
                autre.genre()
            ))),
        })
        .collect()
}

/// Valeur -> Entree (contrôle de la forme [[codes], [a], [b], [h], ...]).
pub fn entree_depuis_valeur(v: &Valeur) -> Result<Entree, ErreurLecture> {
    let forme = "attendu [ [codes], [a...], [b...], [h...] ]";

    let racine = match v {
        Valeur::Liste(items) if items.len() >= 2 => items,
        _ => return Err(structure(forme)),
    };
    if racine.iter().any(|x| !matches!(x, Valeur::Liste(_))) {
        return Err(structure(forme));
    }
    if racine.len() < 4 {
        return Err(structure(
            "trois flux numériques au minimum sont requis : a, b, h",
        ));
    }

    let Valeur::Liste(codes_v) = &racine[0] else {
        return Err(structure(forme));
    };
    let mut codes = Vec::with_capacity(codes_v.len());
    for (i, c) in codes_v.iter().enumerate() {
        let mut it = match c {
            Valeur::Texte(s) => s.chars(),
            autre => {
                return Err(structure(format!(
                    "code en position {i} : chaîne attendue, trouvé {}",
                    autre.genre()
                )))
            }
        };
        match (it.next(), it.next()) {
            (Some(ch), None) => codes.push(ch),
            _ => {
                return Err(structure(format!(
                    "code en position {i} : un seul caractère attendu"
                )))
            }
        }
    }

    Ok(Entree {
        codes,
        a: flux_numerique(&racine[1], "a")?,
        b: flux_numerique(&racine[2], "b")?,
        h: flux_numerique(&racine[3], "h")?,
    })
}

pub fn lire_entree(toks: &[Tok]) -> Result<Entree, ErreurLecture> {
    entree_depuis_valeur(&lire_valeur(toks)?)
}
