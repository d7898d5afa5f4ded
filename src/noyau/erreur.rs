// src/noyau/erreur.rs
//
// Erreurs du noyau : toutes des valeurs, jamais de panique.
// Le texte affiché à l’utilisateur reste "Error" (voir MARQUEUR_ERREUR) ;
// le message détaillé sert au journal.

use thiserror::Error;

/// Marqueur textuel affiché à la place d’un résultat impossible.
pub const MARQUEUR_ERREUR: &str = "Error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    /// Texte d’opérande illisible (ou non fini).
    #[error("nombre illisible: {0:?}")]
    Analyse(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("racine carrée d’un nombre négatif: {0}")]
    RacineNegative(f64),

    /// Opérande ou résultat infini / NaN.
    #[error("résultat non fini")]
    NonFini,

    /// Résultat fini mais trop grand pour l’affichage.
    #[error("dépassement de capacité: |{valeur}| > {borne}")]
    Debordement { valeur: f64, borne: f64 },

    /// Incohérence interne (ne devrait jamais arriver).
    #[error("erreur interne: {0}")]
    Interne(String),
}

impl ErreurCalcul {
    /// Vrai pour les échecs « métier » (saisie, domaine) ; faux pour l’inattendu.
    pub fn est_attendue(&self) -> bool {
        !matches!(self, ErreurCalcul::Interne(_))
    }
}

/// Jeton hors alphabet (chaîne reçue de l’interface).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("jeton inconnu: {0:?}")]
pub struct ErreurJeton(pub String);
