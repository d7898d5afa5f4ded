//! Scénarios de touches : séquences complètes, de l’état initial au résultat affiché.
//!
//! Chaque test rejoue une suite de jetons comme le ferait l’interface,
//! puis lit la projection (écran / expression / erreur).

use super::erreur::ErreurCalcul;
use super::machine::{Calculatrice, Phase};
use super::operations::Operateur;

fn rejoue(jetons: &[&str]) -> Calculatrice {
    let mut c = Calculatrice::new();
    for j in jetons {
        c.handle_input(j);
    }
    c
}

fn assert_etat(jetons: &[&str], operande: &str, expression: &str) {
    let c = rejoue(jetons);
    assert!(c.erreur().is_none(), "jetons={jetons:?} erreur={:?}", c.erreur());
    assert_eq!(c.operande(), operande, "jetons={jetons:?}");
    assert_eq!(c.expression(), expression, "jetons={jetons:?}");
}

/* ------------------------ Quatre opérations ------------------------ */

#[test]
fn addition_simple() {
    assert_etat(&["5", "+", "3", "="], "8", "5 + 3 = 8");
}

#[test]
fn soustraction_negative() {
    assert_etat(&["3", "-", "5", "="], "-2", "3 - 5 = -2");
}

#[test]
fn division_decimale() {
    assert_etat(&["1", "/", "3", "="], "0.3333333333", "1 / 3 = 0.3333333333");
}

#[test]
fn flottants_arrondis_a_l_affichage() {
    assert_etat(
        &["0", ".", "1", "+", "0", ".", "2", "="],
        "0.3",
        "0.1 + 0.2 = 0.3",
    );
}

#[test]
fn accumulateur_relu_depuis_l_affichage() {
    // 1/3 est conservé tel qu’affiché (10 décimales), pas en pleine précision.
    assert_etat(
        &["1", "/", "3", "=", "X", "3", "="],
        "0.9999999999",
        "0.3333333333 X 3 = 0.9999999999",
    );
}

/* ------------------------ Enchaînements ------------------------ */

#[test]
fn evaluation_chainee_gauche_a_droite() {
    // pas de priorité : (2 + 3) X 4
    let c = rejoue(&["2", "+", "3", "X"]);
    assert_eq!(c.operande(), "5");
    assert_eq!(c.expression(), "5 X");
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Fois));

    assert_etat(&["2", "+", "3", "X", "4", "="], "20", "5 X 4 = 20");
}

#[test]
fn resultat_puis_operateur_reprend_le_resultat() {
    assert_etat(&["5", "+", "3", "=", "+", "1", "="], "9", "8 + 1 = 9");
}

#[test]
fn resultat_puis_chiffre_repart_de_zero() {
    let c = rejoue(&["5", "+", "3", "=", "2"]);
    assert_eq!(c.operande(), "2");
    assert_eq!(c.expression(), "2");
    assert_eq!(c.phase(), Phase::SaisiePremier);
}

#[test]
fn egal_repete_sans_effet() {
    assert_etat(&["5", "+", "3", "=", "="], "8", "5 + 3 = 8");
}

#[test]
fn point_apres_operateur() {
    assert_etat(&["5", "+", ".", "5", "="], "5.5", "5 + 0.5 = 5.5");
}

#[test]
fn operande_partiel_garde_son_point() {
    let c = rejoue(&["5", ".", "+"]);
    assert_eq!(c.expression(), "5. +");
    assert_eq!(c.accumulateur(), 5.0);
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn zeros_de_tete_remplaces() {
    assert_etat(&["0", "0", "7"], "7", "7");
}

#[test]
fn double_point_ignore() {
    assert_etat(&["1", ".", ".", "5", "."], "1.5", "1.5");
}

#[test]
fn dix_septieme_chiffre_refuse() {
    let mut jetons = vec!["1"];
    jetons.extend(std::iter::repeat("6").take(16));
    let c = rejoue(&jetons);
    assert_eq!(c.operande(), "1666666666666666");
    assert_eq!(c.operande().len(), 16);
}

#[test]
fn plafond_aussi_pour_le_second_operande() {
    let mut jetons = vec!["2", "+"];
    jetons.extend(std::iter::repeat("9").take(20));
    let c = rejoue(&jetons);
    assert_eq!(c.operande(), "9999999999999999");
    assert_eq!(c.expression(), "2 + 9999999999999999");
}

/* ------------------------ Fonctions spéciales ------------------------ */

#[test]
fn racines_successives() {
    assert_etat(&["4", "sqrt"], "2", "√(4) = 2");
    assert_etat(&["4", "sqrt", "sqrt"], "1.4142135624", "√(2) = 1.4142135624");
}

#[test]
fn racine_de_zero_sans_effet() {
    assert_etat(&["0", "sqrt"], "0", "0");
}

#[test]
fn racine_negative_en_erreur() {
    let c = rejoue(&["5", "-", "9", "=", "sqrt"]);
    assert_eq!(c.erreur(), Some(&ErreurCalcul::RacineNegative(-4.0)));
    assert_eq!(c.operande(), "-4");
    assert_eq!(c.expression(), "5 - 9 = -4");
    assert_eq!(c.affichage().ecran, "Error");
}

#[test]
fn pourcentage_immediat() {
    assert_etat(&["5", "0", "%"], "0.5", "50% = 0.5");
    assert_etat(&["5", ".", "%"], "0.05", "5% = 0.05");
}

#[test]
fn pourcentage_de_zero_sans_effet() {
    assert_etat(&["0", "%"], "0", "0");
}

#[test]
fn pourcentage_garde_l_operateur_en_attente() {
    let c = rejoue(&["5", "+", "2", "0", "%"]);
    assert_eq!(c.operande(), "0.2");
    assert_eq!(c.expression(), "20% = 0.2");
    assert_eq!(c.accumulateur(), 0.2);
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Plus));
    assert!(c.attend_nouveau_nombre());

    // le nombre suivant est le second opérande : 0.2 + 3
    let c = rejoue(&["5", "+", "2", "0", "%", "3"]);
    assert_eq!(c.phase(), Phase::SaisieSecond(Operateur::Plus));
    assert_eq!(c.expression(), "20% = 0.2 3");

    let c = rejoue(&["5", "+", "2", "0", "%", "3", "+"]);
    assert_eq!(c.operande(), "3.2");
    assert_eq!(c.expression(), "3.2 +");
    assert_eq!(c.accumulateur(), 3.2);
}

#[test]
fn racine_garde_l_operateur_en_attente() {
    let c = rejoue(&["5", "+", "1", "6", "sqrt"]);
    assert_eq!(c.operande(), "4");
    assert_eq!(c.expression(), "√(16) = 4");
    assert_eq!(c.phase(), Phase::OperateurEnAttente(Operateur::Plus));

    let c = rejoue(&["5", "+", "1", "6", "sqrt", "2", "+"]);
    assert_eq!(c.operande(), "6");
    assert_eq!(c.expression(), "6 +");
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Plus));
}

#[test]
fn pourcentage_sans_operateur_reste_un_resultat() {
    let c = rejoue(&["2", "0", "%"]);
    assert_eq!(c.phase(), Phase::Resultat);
    assert_eq!(c.operateur_en_attente(), None);
}

#[test]
fn pi_seul() {
    let c = rejoue(&["π"]);
    assert_eq!(c.operande(), "3.1415926536");
    assert_eq!(c.expression(), "π = 3.1415926536");
    assert_eq!(c.accumulateur(), std::f64::consts::PI);
    assert_eq!(c.phase(), Phase::Resultat);
}

#[test]
fn pi_comme_second_operande() {
    let c = rejoue(&["2", "X", "π"]);
    assert_eq!(c.operande(), "3.1415926536");
    assert_eq!(c.expression(), "2 X 3.1415926536");
    assert_eq!(c.phase(), Phase::SaisieSecond(Operateur::Fois));

    assert_etat(
        &["2", "X", "π", "="],
        "6.2831853072",
        "2 X 3.1415926536 = 6.2831853072",
    );
}

#[test]
fn pi_pendant_la_saisie_evalue_aussitot() {
    // l’opérande tapé est remplacé par π et l’opération est conclue
    assert_etat(
        &["2", "X", "3", "π"],
        "6.2831853072",
        "2 X 3 3.1415926536 = 6.2831853072",
    );
}

#[test]
fn pi_se_prolonge_comme_un_nombre_tape() {
    let c = rejoue(&["1", "+", "π", "7"]);
    assert_eq!(c.operande(), "3.14159265367");
    assert_eq!(c.expression(), "1 + 3.14159265367");
}

/* ------------------------ Erreurs et remise à zéro ------------------------ */

#[test]
fn petit_negatif_affiche_zero_sans_signe() {
    // 0 - 0.000000000001 = -1e-12, arrondi à zéro : jamais "-0" à l’écran
    let mut jetons = vec!["0", "-", "0", "."];
    jetons.extend(std::iter::repeat("0").take(11));
    jetons.extend(["1", "="]);

    assert_etat(&jetons, "0", "0 - 0.000000000001 = 0");
    let c = rejoue(&jetons);
    assert_eq!(c.accumulateur().to_bits(), 0.0_f64.to_bits());
}

#[test]
fn division_par_zero_garde_l_operande() {
    let c = rejoue(&["9", "/", "0", "="]);
    assert_eq!(c.erreur(), Some(&ErreurCalcul::DivisionParZero));
    assert_eq!(c.operande(), "0");
    assert!(c.affichage().en_erreur);
}

#[test]
fn division_par_zero_en_chaine() {
    let c = rejoue(&["9", "/", "0", "+"]);
    assert_eq!(c.erreur(), Some(&ErreurCalcul::DivisionParZero));
    assert_eq!(c.operateur_en_attente(), Some(Operateur::Divise));
    assert_eq!(c.expression(), "9 / 0");
}

#[test]
fn erreur_effacee_sans_ac() {
    let c = rejoue(&["9", "/", "0", "=", "AC"]);
    assert!(c.erreur().is_none());

    let c = rejoue(&["9", "/", "0", "=", "π"]);
    assert!(c.erreur().is_none());
}

#[test]
fn ac_depuis_tous_les_etats() {
    let suites: [&[&str]; 7] = [
        &[],
        &["4"],
        &["4", "+"],
        &["4", "+", "2"],
        &["4", "+", "2", "="],
        &["9", "/", "0", "="],
        &["π", "sqrt", "%"],
    ];

    for suite in suites {
        let mut c = rejoue(suite);
        c.handle_input("AC");
        assert_eq!(c.operande(), "0", "suite={suite:?}");
        assert_eq!(c.expression(), "", "suite={suite:?}");
        assert_eq!(c.accumulateur(), 0.0, "suite={suite:?}");
        assert!(c.attend_nouveau_nombre(), "suite={suite:?}");
        assert!(c.erreur().is_none(), "suite={suite:?}");
        assert_eq!(c.phase(), Phase::Repos, "suite={suite:?}");
    }
}
