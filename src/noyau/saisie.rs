// src/noyau/saisie.rs
//
// Composition de l’opérande, touche par touche.
// Une saisie refusée renvoie l’opérande inchangé (jamais d’erreur).

use super::reglages::CHIFFRES_MAX_DEFAUT;

/// Nombre de chiffres (point décimal et signe exclus).
pub fn nb_chiffres(operande: &str) -> usize {
    operande.chars().filter(char::is_ascii_digit).count()
}

/// Texte encore acceptable comme nombre (éventuellement partiel : "5.", ".", "-.").
pub fn est_nombre_valide(texte: &str) -> bool {
    if texte == "." || texte == "-." {
        return true;
    }
    matches!(texte.parse::<f64>(), Ok(v) if v.is_finite())
}

/// Ajoute `saisie` (un chiffre ou ".") à `courant`, plafonné à `chiffres_max` chiffres.
pub fn valider_saisie(courant: &str, saisie: &str, chiffres_max: usize) -> String {
    if courant == "0" && saisie != "." {
        return saisie.to_string();
    }
    if saisie == "." && courant.contains('.') {
        return courant.to_string();
    }
    if courant == "0" && saisie == "." {
        return "0.".to_string();
    }
    if nb_chiffres(courant) >= chiffres_max {
        return courant.to_string();
    }

    let nouveau = format!("{courant}{saisie}");
    if est_nombre_valide(&nouveau) {
        nouveau
    } else {
        courant.to_string()
    }
}

/// Plafond par défaut (16 chiffres).
pub fn validate_numeric_input(courant: &str, saisie: &str) -> String {
    valider_saisie(courant, saisie, CHIFFRES_MAX_DEFAUT)
}
