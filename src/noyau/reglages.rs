//! Réglages numériques de la calculatrice.
//!
//! Les valeurs par défaut sont celles du comportement de référence :
//! 16 chiffres saisis, 10 décimales, débordement au-delà de 1e16,
//! zéro d’affichage en dessous de 1e-16.
//!
//! Un fichier TOML peut en surcharger une partie (champs absents => défaut).

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Chiffres maximum d’un opérande saisi (point décimal exclu).
pub const CHIFFRES_MAX_DEFAUT: usize = 16;

/// Décimales fixées avant suppression des zéros finaux.
pub const DECIMALES_DEFAUT: usize = 10;

/// Au-delà : "Error".
pub const BORNE_AFFICHAGE_DEFAUT: f64 = 1e16;

/// En dessous (et non nul) : "0".
pub const SEUIL_ZERO_DEFAUT: f64 = 1e-16;

/// Garde-fou : un f64 n’a pas plus de 17 chiffres significatifs.
const DECIMALES_MAX: usize = 17;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub chiffres_max: usize,
    pub decimales: usize,
    pub borne_affichage: f64,
    pub seuil_zero: f64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres_max: CHIFFRES_MAX_DEFAUT,
            decimales: DECIMALES_DEFAUT,
            borne_affichage: BORNE_AFFICHAGE_DEFAUT,
            seuil_zero: SEUIL_ZERO_DEFAUT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {chemin}: {source}")]
    Lecture {
        chemin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),

    #[error("réglage invalide: {0}")]
    Invalide(String),
}

impl Reglages {
    /// Lit et valide un fichier de réglages.
    pub fn charger(chemin: impl AsRef<Path>) -> Result<Self, ErreurReglages> {
        let chemin = chemin.as_ref();
        let texte = std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
            chemin: chemin.display().to_string(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        r.valider()?;
        Ok(r)
    }

    pub fn valider(&self) -> Result<(), ErreurReglages> {
        if self.chiffres_max == 0 {
            return Err(ErreurReglages::Invalide(
                "chiffres_max doit être >= 1".into(),
            ));
        }
        if self.decimales > DECIMALES_MAX {
            return Err(ErreurReglages::Invalide(format!(
                "decimales doit être <= {DECIMALES_MAX}"
            )));
        }
        if !self.borne_affichage.is_finite() || self.borne_affichage <= 0.0 {
            return Err(ErreurReglages::Invalide(
                "borne_affichage doit être finie et > 0".into(),
            ));
        }
        if !self.seuil_zero.is_finite() || self.seuil_zero < 0.0 {
            return Err(ErreurReglages::Invalide(
                "seuil_zero doit être fini et >= 0".into(),
            ));
        }
        if self.seuil_zero >= self.borne_affichage {
            return Err(ErreurReglages::Invalide(
                "seuil_zero doit être < borne_affichage".into(),
            ));
        }
        Ok(())
    }
}
