// src/noyau/format.rs
//
// Affichage canonique d’un résultat numérique.
//
// Ordre des règles :
// 1) erreur            -> "Error"
// 2) non fini          -> "Error"
// 3) |x| > borne       -> "Error"
// 4) 0 < |x| < seuil   -> "0"
// 5) entier            -> sans point décimal
// 6) sinon             -> N décimales fixes, puis zéros finaux (et point nu) retirés

use super::erreur::{ErreurCalcul, MARQUEUR_ERREUR};
use super::reglages::Reglages;

/// Version typée : l’échec reste une erreur (utilisée par la machine à états).
pub fn formater(valeur: f64, reglages: &Reglages) -> Result<String, ErreurCalcul> {
    if !valeur.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }

    let abs = valeur.abs();
    if abs > reglages.borne_affichage {
        return Err(ErreurCalcul::Debordement {
            valeur,
            borne: reglages.borne_affichage,
        });
    }
    if valeur == 0.0 || abs < reglages.seuil_zero {
        return Ok("0".to_string());
    }

    if valeur.fract() == 0.0 {
        return Ok(format!("{valeur}"));
    }

    let fixe = format!("{:.*}", reglages.decimales, valeur);
    Ok(normalise_zero(retire_zeros_finaux(&fixe)))
}

/// Comme `formater`, mais l’erreur devient le marqueur "Error".
pub fn format_resultat(valeur: Result<f64, ErreurCalcul>, reglages: &Reglages) -> String {
    valeur
        .and_then(|v| formater(v, reglages))
        .unwrap_or_else(|_| MARQUEUR_ERREUR.to_string())
}

/// Réglages par défaut (10 décimales, borne 1e16).
pub fn format_number(valeur: Result<f64, ErreurCalcul>) -> String {
    format_resultat(valeur, &Reglages::default())
}

/// Écriture « courte » d’un nombre lu (pour la ligne d’expression : "5." -> "5").
pub fn texte_court(valeur: f64) -> String {
    if valeur == 0.0 {
        return "0".to_string();
    }
    format!("{valeur}")
}

/// "1.5000" -> "1.5" ; "2.000" -> "2" ; "100" -> "100" (pas de point : rien à retirer).
fn retire_zeros_finaux(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// "-0" (petit négatif arrondi) -> "0".
fn normalise_zero(s: String) -> String {
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}
