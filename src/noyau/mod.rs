//! Noyau de la calculatrice (sans interface)
//!
//! Organisation interne :
//! - operations.rs : arithmétique f64, %, π, √, exécution d’un opérateur
//! - format.rs     : affichage canonique d’un résultat ("Error", 10 décimales…)
//! - saisie.rs     : composition de l’opérande (plafond 16 chiffres)
//! - jetons.rs     : alphabet des touches
//! - machine.rs    : machine à états (un jeton à la fois)
//! - reglages.rs   : limites numériques (TOML optionnel)
//! - erreur.rs     : erreurs typées

pub mod erreur;
pub mod format;
pub mod jetons;
pub mod machine;
pub mod operations;
pub mod reglages;
pub mod saisie;

#[cfg(test)]
mod tests_scenarios;



// API publique minimale
pub use erreur::{ErreurCalcul, ErreurJeton, MARQUEUR_ERREUR};
pub use format::format_number;
pub use jetons::Jeton;
pub use machine::{Affichage, Calculatrice, Observateur, Phase, Session};
pub use operations::{execute_calculation, Operateur};
pub use reglages::{ErreurReglages, Reglages};
pub use saisie::validate_numeric_input;
