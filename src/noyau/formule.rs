// src/noyau/formule.rs
//
// Formule scalaire à domaine contrôlé :
//   sqrt( |cos x|^n + exp(n³)/ln(x) + |sin x|^(1/n) )
//
// Contrôles de domaine : liste ordonnée et nommée, évaluée dans l'ordre,
// le premier contrôle qui échoue est rapporté.

use num_traits::Float;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurFormule {
    #[error("hors du domaine de définition : {controle}")]
    HorsDomaine { controle: &'static str },

    #[error("radicande négatif : {valeur}")]
    RadicandNegatif { valeur: f64 },

    #[error("dépassement de capacité : {terme}")]
    Debordement { terme: &'static str },
}

fn fini<F: Float>(v: F, terme: &'static str) -> Result<F, ErreurFormule> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurFormule::Debordement { terme })
    }
}

type Controle<F> = (&'static str, fn(F, F) -> bool);

fn controles<F: Float>() -> [Controle<F>; 6] {
    [
        ("x et n finis", |x, n| x.is_finite() && n.is_finite()),
        ("x > 0", |x, _| x > F::zero()),
        ("ln(x) ≠ 0", |x, _| x.ln() != F::zero()),
        ("n ≠ 0", |_, n| n != F::zero()),
        // 0 puissance négative interdit
        ("|sin x| > 0 ou n > 0", |x, n| {
            x.sin().abs() > F::zero() || n > F::zero()
        }),
        ("|cos x| > 0 ou n ≥ 0", |x, n| {
            x.cos().abs() > F::zero() || n >= F::zero()
        }),
    ]
}

/// Noms des contrôles, dans l'ordre d'application.
pub fn noms_controles() -> [&'static str; 6] {
    controles::<f64>().map(|(nom, _)| nom)
}

pub fn evaluer_formule<F: Float>(x: F, n: F) -> Result<F, ErreurFormule> {
    for (controle, ok) in controles::<F>() {
        if !ok(x, n) {
            return Err(ErreurFormule::HorsDomaine { controle });
        }
    }

    // chaque terme doit rester fini : exp(n³) déborde vite
    let t1 = fini(x.cos().abs().powf(n), "|cos x|^n")?;
    let e = fini((n * n * n).exp(), "exp(n³)")?;
    let t2 = fini(e / x.ln(), "exp(n³)/ln(x)")?;
    let t3 = fini(x.sin().abs().powf(n.recip()), "|sin x|^(1/n)")?;

    let radicande = t1 + t2 + t3;
    if radicande.is_infinite() {
        return Err(ErreurFormule::Debordement { terme: "radicande" });
    }

    if !(radicande >= F::zero()) {
        return Err(ErreurFormule::RadicandNegatif {
            valeur: radicande.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(radicande.sqrt())
}
