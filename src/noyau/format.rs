// src/noyau/format.rs

/// Précision maximale acceptée en affichage fixe (au-delà, f64 n'a plus de chiffres utiles).
pub const CHIFFRES_MAX: usize = 17;

/// Une aire en texte.
/// - None    : forme la plus courte qui relit la même valeur, ".0" gardé pour les entiers (4.0) ;
///   hors de [1e-4, 1e16) notation scientifique au format Python (1e+16, 1.5e-05)
/// - Some(d) : d décimales fixes (borné à CHIFFRES_MAX)
pub fn format_aire(v: f64, chiffres: Option<usize>) -> String {
    match chiffres {
        None => format_court(v),
        Some(d) => format!("{:.*}", d.min(CHIFFRES_MAX), v),
    }
}

/// `{:?}` bascule en notation scientifique aux mêmes seuils que Python ;
/// seul l'exposant diffère (signe explicite, deux chiffres au moins).
fn format_court(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    let s = format!("{v:?}");
    let Some((mantisse, exposant)) = s.split_once('e') else {
        return s;
    };
    let (signe, chiffres) = match exposant.strip_prefix('-') {
        Some(c) => ('-', c),
        None => ('+', exposant),
    };
    format!("{mantisse}e{signe}{chiffres:0>2}")
}

/// Une aire par ligne, dans l'ordre d'évaluation.
pub fn format_aires(aires: &[f64], chiffres: Option<usize>) -> String {
    aires
        .iter()
        .map(|&v| format_aire(v, chiffres))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Codes séparés par des espaces (démarche).
pub fn format_codes(codes: &[char]) -> String {
    let mut out = String::with_capacity(codes.len() * 2);
    for (i, c) in codes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}
