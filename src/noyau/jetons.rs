// src/noyau/jetons.rs
//
// Tokenisation du littéral de programme :
//   [['S','T','E'],[2,3,0],[0,7,0],[0,4,0]]

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::ErreurLecture;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),
    Texte(String),

    // nan / inf / None : pas de valeur rationnelle
    Nan,
    Inf,
    Rien,

    Plus,
    Moins,
    Virgule,
    LCro, // [
    RCro, // ]
}

/// Tokenize le littéral.
/// Supporte:
/// - entiers (12), décimaux (3.5, 2., .5), fractions littérales sans espaces (12/34)
/// - exposant décimal (1e3, 2.5E-2), lu exactement dans le rationnel
/// - chaînes entre apostrophes ou guillemets ('S', "T")
/// - nan, inf (insensibles à la casse), None
/// - crochets, virgules, plus et moins (le signe est rattaché au nombre par la lecture)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurLecture> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '[' => {
                out.push(Tok::LCro);
                i += 1;
                continue;
            }
            ']' => {
                out.push(Tok::RCro);
                i += 1;
                continue;
            }
            ',' => {
                out.push(Tok::Virgule);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Moins);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Chaînes : pas d'échappement (les codes sont des lettres)
        if c == '\'' || c == '"' {
            let start = i + 1;
            let mut j = start;
            while j < chars.len() && chars[j] != c {
                j += 1;
            }
            if j >= chars.len() {
                return Err(ErreurLecture::ChaineNonFermee { colonne: i });
            }
            out.push(Tok::Texte(chars[start..j].iter().collect()));
            i = j + 1;
            continue;
        }

        // Identifiants : nan, inf, None
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            match word.to_lowercase().as_str() {
                "nan" => out.push(Tok::Nan),
                "inf" | "infinity" => out.push(Tok::Inf),
                "none" => out.push(Tok::Rien),
                _ => {
                    return Err(ErreurLecture::NombreInvalide(format!(
                        "identifiant inconnu '{word}'"
                    )))
                }
            }
            continue;
        }

        let point_chiffre =
            c == '.' && chars.get(i + 1).map_or(false, |d| d.is_ascii_digit());
        if c.is_ascii_digit() || point_chiffre {
            let (rat, suite) = lire_nombre(&chars, i)?;
            out.push(Tok::Num(rat));
            i = suite;
            continue;
        }

        return Err(ErreurLecture::CaractereInattendu { c, colonne: i });
    }

    Ok(out)
}

fn lire_chiffres(chars: &[char], mut i: usize) -> usize {
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    i
}

fn big(chiffres: &[char]) -> Result<BigInt, ErreurLecture> {
    let txt: String = chiffres.iter().collect();
    BigInt::parse_bytes(txt.as_bytes(), 10).ok_or(ErreurLecture::NombreInvalide(txt))
}

/// Borne sur l'exposant décimal : 10^1000 reste calculable exactement et
/// dépasse déjà f64.
pub const EXPOSANT_MAX: u32 = 1000;

/// Suffixe `e[+-]chiffres` éventuel. Retourne (exposant, index après).
fn lire_exposant(chars: &[char], i: usize) -> Result<(i64, usize), ErreurLecture> {
    if !matches!(chars.get(i), Some('e') | Some('E')) {
        return Ok((0, i));
    }
    let mut j = i + 1;
    let negatif = match chars.get(j) {
        Some('-') => {
            j += 1;
            true
        }
        Some('+') => {
            j += 1;
            false
        }
        _ => false,
    };
    let fin = lire_chiffres(chars, j);
    if fin == j {
        return Err(ErreurLecture::NombreInvalide(
            "exposant sans chiffres après 'e'".into(),
        ));
    }
    let txt: String = chars[j..fin].iter().collect();
    let e = match txt.parse::<u32>() {
        Ok(e) if e <= EXPOSANT_MAX => i64::from(e),
        _ => {
            return Err(ErreurLecture::NombreInvalide(format!(
                "exposant hors limites : {txt} (max {EXPOSANT_MAX})"
            )))
        }
    };
    Ok((if negatif { -e } else { e }, fin))
}

fn puissance_de_dix(e: u32) -> BigInt {
    BigInt::from(10).pow(e)
}

/// Nombre exact : entier, décimal (12.5, 12., .5), avec exposant éventuel
/// (1e3, 2.5e-2), ou fraction littérale (12/34).
/// Retourne (valeur, index après le nombre).
fn lire_nombre(chars: &[char], start: usize) -> Result<(BigRational, usize), ErreurLecture> {
    let mut i = lire_chiffres(chars, start);
    let entier = if i == start {
        // ".5" : partie entière absente
        BigInt::zero()
    } else {
        big(&chars[start..i])?
    };

    // décimal : partie fractionnaire éventuellement vide ("2." comme en Python)
    if i < chars.len() && chars[i] == '.' {
        let start_f = i + 1;
        i = lire_chiffres(chars, start_f);

        // 12.34 -> 1234 / 10^2
        let mantisse = if i == start_f {
            BigRational::from_integer(entier)
        } else {
            let frac = big(&chars[start_f..i])?;
            let scale = puissance_de_dix((i - start_f) as u32);
            BigRational::new(entier * &scale + frac, scale)
        };
        let (e, fin) = lire_exposant(chars, i)?;
        return Ok((mise_a_l_echelle(mantisse, e), fin));
    }

    let (e, fin) = lire_exposant(chars, i)?;
    if fin != i {
        return Ok((mise_a_l_echelle(BigRational::from_integer(entier), e), fin));
    }

    // fraction immédiate : 12/34 (pas d'espaces)
    if i < chars.len() && chars[i] == '/' {
        let start_d = i + 1;
        let fin = lire_chiffres(chars, start_d);
        if fin == start_d {
            return Err(ErreurLecture::NombreInvalide(
                "dénominateur manquant après '/'".into(),
            ));
        }
        let d = big(&chars[start_d..fin])?;
        if d.is_zero() {
            return Err(ErreurLecture::NombreInvalide(
                "division par zéro dans une fraction".into(),
            ));
        }
        return Ok((BigRational::new(entier, d), fin));
    }

    Ok((BigRational::from_integer(entier), i))
}

/// m * 10^e, exact.
fn mise_a_l_echelle(m: BigRational, e: i64) -> BigRational {
    let p = BigRational::from_integer(puissance_de_dix(e.unsigned_abs() as u32));
    if e < 0 {
        m / p
    } else {
        m * p
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    fn format_rat(r: &BigRational) -> String {
        let n = r.numer();
        let d = r.denom();
        if d.is_one() {
            format!("{n}")
        } else {
            format!("{n}/{d}")
        }
    }

    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => format_rat(r),
            Tok::Texte(txt) => format!("'{txt}'"),

            Tok::Nan => "nan".to_string(),
            Tok::Inf => "inf".to_string(),
            Tok::Rien => "None".to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Moins => "-".to_string(),
            Tok::Virgule => ",".to_string(),
            Tok::LCro => "[".to_string(),
            Tok::RCro => "]".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
