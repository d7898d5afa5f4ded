//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder la calculatrice du noyau et offrir à la vue ce qu’elle affiche
//! (ligne d’expression, écran, message d’erreur). Aucune arithmétique ici :
//! tout passe par des jetons.

use tracing::debug;

use crate::noyau::{Affichage, Calculatrice, ErreurCalcul, Jeton, Reglages};

use super::clavier::jeton_pour_touche;

/// Message montré pour une erreur inattendue (le détail part au journal).
const MESSAGE_GENERIQUE: &str = "Une erreur est survenue";

#[derive(Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            calc: Calculatrice::avec_reglages(reglages),
        }
    }

    /* ------------------------ Actions ------------------------ */

    /// Bouton cliqué.
    pub fn appuyer(&mut self, jeton: Jeton) {
        self.calc.traiter(jeton);
    }

    /// Touche clavier ; renvoie false si elle n’a pas de jeton.
    pub fn touche(&mut self, touche: &str) -> bool {
        match jeton_pour_touche(touche) {
            Some(j) => {
                self.appuyer(j);
                true
            }
            None => {
                debug!(touche, "touche sans jeton");
                false
            }
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> Affichage {
        self.calc.affichage()
    }

    /// Ligne du haut : l’expression, ou à défaut l’opérande.
    pub fn ligne_expression(&self) -> String {
        let a = self.calc.affichage();
        if a.expression.is_empty() {
            self.calc.operande().to_string()
        } else {
            a.expression
        }
    }

    pub fn message_erreur(&self) -> Option<String> {
        self.calc.erreur().map(|e| match e {
            ErreurCalcul::Interne(_) => MESSAGE_GENERIQUE.to_string(),
            autre => autre.to_string(),
        })
    }
}
