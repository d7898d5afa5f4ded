//! Calculatrice directe : saisie touche par touche, évaluation immédiate
//! de gauche à droite, un seul opérateur en attente.
//!
//! - `noyau` : arithmétique, affichage, machine à états (aucune dépendance UI)
//! - `app`   : interface egui qui pilote le noyau par `handle_input`

pub mod app;
pub mod noyau;
