// src/noyau/figure.rs
//
// Figures + table statique des opérandes consommés.
//
// Codes:
// - 'S' : carré           (a)       -> a²
// - 'T' : trapèze         (a, b, h) -> (a+b)·h/2
// - 'P' : parallélogramme (a, h)    -> a·h
// - 'E' : fin (sentinelle, pas une figure)

use std::fmt;

use num_traits::Float;

/// Code sentinelle : rien n'est évalué (ni validé) à partir du premier 'E'.
pub const CODE_FIN: char = 'E';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Figure {
    Carre,
    Trapeze,
    Parallelogramme,
}

/// Les trois flux parallèles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operande {
    A,
    B,
    H,
}

impl Operande {
    /// Ordre de validation (a, puis b, puis h).
    pub const TOUS: [Operande; 3] = [Operande::A, Operande::B, Operande::H];

    pub fn nom(self) -> &'static str {
        match self {
            Operande::A => "a",
            Operande::B => "b",
            Operande::H => "h",
        }
    }
}

impl fmt::Display for Operande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

impl Figure {
    /// Décode un code de figure. 'E' et tout le reste => None.
    pub fn depuis_code(c: char) -> Option<Figure> {
        match c {
            'S' => Some(Figure::Carre),
            'T' => Some(Figure::Trapeze),
            'P' => Some(Figure::Parallelogramme),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Figure::Carre => 'S',
            Figure::Trapeze => 'T',
            Figure::Parallelogramme => 'P',
        }
    }

    /// Masque des opérandes consommés (dans l'ordre de validation).
    /// Un opérande absent d'ici n'est jamais lu ni validé.
    pub fn operandes_requis(self) -> &'static [Operande] {
        match self {
            Figure::Carre => &[Operande::A],
            Figure::Trapeze => &[Operande::A, Operande::B, Operande::H],
            Figure::Parallelogramme => &[Operande::A, Operande::H],
        }
    }

    pub fn consomme(self, op: Operande) -> bool {
        self.operandes_requis().contains(&op)
    }

    /// Formule d'aire. Ne lit que les opérandes du masque.
    pub fn aire<F: Float>(self, a: F, b: F, h: F) -> F {
        match self {
            Figure::Carre => a * a,
            Figure::Trapeze => (a + b) * h / (F::one() + F::one()),
            Figure::Parallelogramme => a * h,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nom = match self {
            Figure::Carre => "carré",
            Figure::Trapeze => "trapèze",
            Figure::Parallelogramme => "parallélogramme",
        };
        f.write_str(nom)
    }
}
