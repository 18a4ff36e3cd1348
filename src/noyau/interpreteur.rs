// src/noyau/interpreteur.rs
//
// Interpréteur de flux de figures.
//
// Entrée : codes + trois flux parallèles (a, b, h).
// Sortie : aires dans l'ordre des codes, jusqu'au premier 'E' exclu.
//
// Trois phases, dans cet ordre strict :
//   0) contrôles structurels (liste ordonnée, le premier qui échoue gagne)
//   1) validation des opérandes consommés, position par position
//   2) évaluation
// La phase 2 ne démarre qu'après la phase 1 complète : une erreur en position k
// supprime aussi les aires déjà calculables en 0..k (tout ou rien).

use num_traits::Float;

use super::erreur::{ErreurProgramme, Malformation, Raison};
use super::figure::{Figure, Operande, CODE_FIN};

/// Index du premier 'E', ou longueur du programme si absent.
pub fn position_arret(codes: &[char]) -> usize {
    codes
        .iter()
        .position(|&c| c == CODE_FIN)
        .unwrap_or(codes.len())
}

/// Une opération validée : figure + ses trois valeurs (seules celles du masque comptent).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instruction<F> {
    pub figure: Figure,
    pub a: F,
    pub b: F,
    pub h: F,
}

impl<F: Float> Instruction<F> {
    pub fn operande(&self, op: Operande) -> F {
        match op {
            Operande::A => self.a,
            Operande::B => self.b,
            Operande::H => self.h,
        }
    }

    /// Valide uniquement les opérandes du masque, dans l'ordre a, b, h.
    fn valider(&self, position: usize) -> Result<(), ErreurProgramme> {
        for &op in self.figure.operandes_requis() {
            let v = self.operande(op);

            let raison = if !v.is_finite() {
                Raison::NonFini
            } else if v <= F::zero() {
                Raison::NonPositif
            } else {
                continue;
            };

            return Err(ErreurProgramme::OperandeInvalide {
                position,
                operande: op,
                valeur: v.to_f64().unwrap_or(f64::NAN),
                raison,
            });
        }
        Ok(())
    }

    pub fn aire(&self) -> F {
        self.figure.aire(self.a, self.b, self.h)
    }
}

/* ------------------------ Contrôles structurels (phase 0) ------------------------ */

struct Vue<'p, F> {
    codes: &'p [char],
    flux: [&'p [F]; 3],
    arret: usize,
}

type Controle<F> = for<'p> fn(&Vue<'p, F>) -> Result<(), Malformation>;

fn controle_non_vide<F>(v: &Vue<'_, F>) -> Result<(), Malformation> {
    if v.codes.is_empty() {
        return Err(Malformation::ProgrammeVide);
    }
    Ok(())
}

fn controle_codes_connus<F>(v: &Vue<'_, F>) -> Result<(), Malformation> {
    match v.codes[..v.arret]
        .iter()
        .position(|&c| Figure::depuis_code(c).is_none())
    {
        Some(position) => Err(Malformation::CodeInconnu {
            position,
            code: v.codes[position],
        }),
        None => Ok(()),
    }
}

fn controle_longueurs<F>(v: &Vue<'_, F>) -> Result<(), Malformation> {
    for (flux, valeurs) in Operande::TOUS.into_iter().zip(v.flux) {
        if valeurs.len() < v.arret {
            return Err(Malformation::FluxTropCourt {
                flux,
                longueur: valeurs.len(),
                requis: v.arret,
            });
        }
    }
    Ok(())
}

/* ------------------------ Programme validé ------------------------ */

/// Programme entièrement validé (phases 0 et 1). L'exécution ne peut plus échouer.
#[derive(Clone, Debug, PartialEq)]
pub struct Programme<F> {
    instructions: Vec<Instruction<F>>,
}

impl<F: Float> Programme<F> {
    pub fn compiler(codes: &[char], a: &[F], b: &[F], h: &[F]) -> Result<Self, ErreurProgramme> {
        let vue = Vue {
            codes,
            flux: [a, b, h],
            arret: position_arret(codes),
        };

        let controles: [Controle<F>; 3] = [
            controle_non_vide,
            controle_codes_connus,
            controle_longueurs,
        ];
        for controle in controles {
            controle(&vue)?;
        }

        let mut instructions = Vec::with_capacity(vue.arret);
        for (i, &code) in codes[..vue.arret].iter().enumerate() {
            let figure = Figure::depuis_code(code)
                .ok_or(Malformation::CodeInconnu { position: i, code })?;

            let inst = Instruction {
                figure,
                a: a[i],
                b: b[i],
                h: h[i],
            };
            inst.valider(i)?;
            instructions.push(inst);
        }

        Ok(Self { instructions })
    }

    pub fn instructions(&self) -> &[Instruction<F>] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn executer(&self) -> Vec<F> {
        self.instructions.iter().map(Instruction::aire).collect()
    }
}

/// API principale : valide tout le préfixe évalué, PUIS calcule.
pub fn evaluer<F: Float>(
    codes: &[char],
    a: &[F],
    b: &[F],
    h: &[F],
) -> Result<Vec<F>, ErreurProgramme> {
    Ok(Programme::compiler(codes, a, b, h)?.executer())
}
