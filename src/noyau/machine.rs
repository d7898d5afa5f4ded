//! Noyau — machine à états de la saisie.
//!
//! Un jeton à la fois : `Calculatrice::traiter` calcule la session suivante
//! (fonction pure `transition`), puis la valide d’un bloc. Un échec laisse donc
//! opérande / accumulateur / expression intacts ; seule l’erreur est posée,
//! et elle disparaît au jeton suivant.
//!
//! Phases (l’erreur est une surcouche, pas une phase) :
//!
//! ```text
//! Repos ──chiffre──> SaisiePremier ──op──> OperateurEnAttente ──chiffre──> SaisieSecond
//!   ^                                          ^   |                          |   |
//!   |                                          |   +──────────π───────────────+   |
//!   |                                          +──────────────op (chaîné)─────────+
//!   +───AC (depuis partout)            Resultat <──── = / π / % / √ ──────────────+
//! ```
//!
//! % et √ gardent l’opérateur en attente : on repart en OperateurEnAttente.

use std::fmt;

use tracing::{debug, error, trace, warn};

use super::erreur::{ErreurCalcul, MARQUEUR_ERREUR};
use super::format::{formater, texte_court};
use super::jetons::Jeton;
use super::operations::{self, execute_calculation, lire_nombre, Operateur};
use super::reglages::Reglages;
use super::saisie::valider_saisie;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Démarrage / après AC : "0", prochain chiffre = nouveau nombre.
    Repos,
    /// Premier opérande en cours de saisie.
    SaisiePremier,
    /// Opérateur choisi, second opérande pas encore commencé.
    OperateurEnAttente(Operateur),
    /// Second opérande en cours de saisie.
    SaisieSecond(Operateur),
    /// Résultat affiché (=, π seul, % / √ sans opérateur).
    Resultat,
}

impl Phase {
    /// Le prochain chiffre commence-t-il un nouveau nombre ?
    pub fn attend_nouveau_nombre(self) -> bool {
        matches!(
            self,
            Phase::Repos | Phase::OperateurEnAttente(_) | Phase::Resultat
        )
    }

    pub fn operateur(self) -> Option<Operateur> {
        match self {
            Phase::OperateurEnAttente(op) | Phase::SaisieSecond(op) => Some(op),
            _ => None,
        }
    }
}

/// État de session (hors erreur).
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub operande: String,
    pub accumulateur: f64,
    pub expression: String,
    pub phase: Phase,
}

impl Session {
    pub fn initiale() -> Self {
        Self {
            operande: "0".to_string(),
            accumulateur: 0.0,
            expression: String::new(),
            phase: Phase::Repos,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::initiale()
    }
}

/// Projection lecture seule pour l’interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    /// Opérande, ou "Error".
    pub ecran: String,
    pub expression: String,
    pub en_erreur: bool,
}

/// Prévenu après chaque jeton traité.
pub trait Observateur: Send {
    fn notifier(&mut self, affichage: &Affichage);
}

impl<F> Observateur for F
where
    F: FnMut(&Affichage) + Send,
{
    fn notifier(&mut self, affichage: &Affichage) {
        self(affichage)
    }
}

/// Une calculatrice = une session. Pas de partage entre appelants.
pub struct Calculatrice {
    session: Session,
    erreur: Option<ErreurCalcul>,
    reglages: Reglages,
    observateurs: Vec<Box<dyn Observateur>>,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Calculatrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculatrice")
            .field("session", &self.session)
            .field("erreur", &self.erreur)
            .field("reglages", &self.reglages)
            .field("observateurs", &self.observateurs.len())
            .finish()
    }
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::avec_reglages(Reglages::default())
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            session: Session::initiale(),
            erreur: None,
            reglages,
            observateurs: Vec::new(),
        }
    }

    pub fn abonner(&mut self, observateur: impl Observateur + 'static) {
        self.observateurs.push(Box::new(observateur));
    }

    /* ------------------------ Entrées ------------------------ */

    /// Point d’entrée texte (alphabet des touches). Jeton inconnu : ignoré.
    pub fn handle_input(&mut self, jeton: &str) {
        match jeton.parse::<Jeton>() {
            Ok(j) => self.traiter(j),
            Err(e) => {
                warn!(erreur = %e, "jeton ignoré");
                self.erreur = None;
                self.notifier();
            }
        }
    }

    /// Point d’entrée typé.
    pub fn traiter(&mut self, jeton: Jeton) {
        self.erreur = None;
        trace!(%jeton, phase = ?self.session.phase, operande = %self.session.operande, "jeton");

        match transition(&self.session, jeton, &self.reglages) {
            Ok(suivante) => {
                if jeton == Jeton::ToutEffacer {
                    debug!("remise à zéro");
                }
                self.session = suivante;
            }
            Err(e) if e.est_attendue() => {
                debug!(%jeton, erreur = %e, "calcul impossible");
                self.erreur = Some(e);
            }
            Err(e) => {
                error!(%jeton, erreur = %e, session = ?self.session, "erreur inattendue");
                self.erreur = Some(e);
            }
        }

        self.notifier();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn affichage(&self) -> Affichage {
        Affichage {
            ecran: match self.erreur {
                Some(_) => MARQUEUR_ERREUR.to_string(),
                None => self.session.operande.clone(),
            },
            expression: self.session.expression.clone(),
            en_erreur: self.erreur.is_some(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn operande(&self) -> &str {
        &self.session.operande
    }

    pub fn expression(&self) -> &str {
        &self.session.expression
    }

    pub fn accumulateur(&self) -> f64 {
        self.session.accumulateur
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn operateur_en_attente(&self) -> Option<Operateur> {
        self.session.phase.operateur()
    }

    pub fn attend_nouveau_nombre(&self) -> bool {
        self.session.phase.attend_nouveau_nombre()
    }

    pub fn erreur(&self) -> Option<&ErreurCalcul> {
        self.erreur.as_ref()
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    fn notifier(&mut self) {
        if self.observateurs.is_empty() {
            return;
        }
        let a = self.affichage();
        for o in &mut self.observateurs {
            o.notifier(&a);
        }
    }
}

/* ------------------------ Transitions (pures) ------------------------ */

/// Session suivante pour `jeton`, ou l’erreur qui empêche la transition.
pub fn transition(s: &Session, jeton: Jeton, r: &Reglages) -> Result<Session, ErreurCalcul> {
    match jeton {
        Jeton::Chiffre(_) | Jeton::Point => saisie(s, jeton.texte(), r),
        Jeton::ToutEffacer => Ok(Session::initiale()),
        Jeton::Egal => egal(s, r),
        Jeton::Operateur(op) => operateur(s, op, r),
        Jeton::Pourcent => pourcent(s, r),
        Jeton::Pi => pi(s, r),
        Jeton::Racine => racine(s, r),
    }
}

fn saisie(s: &Session, texte: &str, r: &Reglages) -> Result<Session, ErreurCalcul> {
    let en_attente = s.phase.operateur();

    if s.phase.attend_nouveau_nombre() {
        let nouveau = if texte == "." { "0." } else { texte }.to_string();
        let expression = match en_attente {
            Some(_) => format!("{} {}", s.expression, nouveau),
            None => nouveau.clone(),
        };
        let phase = match en_attente {
            Some(op) => Phase::SaisieSecond(op),
            None => Phase::SaisiePremier,
        };
        return Ok(Session {
            operande: nouveau,
            expression,
            phase,
            ..s.clone()
        });
    }

    let nouveau = valider_saisie(&s.operande, texte, r.chiffres_max);
    let expression = match en_attente {
        Some(_) => {
            // l’opérande en cours termine toujours l’expression
            let tete = s
                .expression
                .strip_suffix(s.operande.as_str())
                .ok_or_else(|| {
                    ErreurCalcul::Interne(format!(
                        "expression {:?} ne finit pas par l’opérande {:?}",
                        s.expression, s.operande
                    ))
                })?;
            format!("{tete}{nouveau}")
        }
        None => nouveau.clone(),
    };

    Ok(Session {
        operande: nouveau,
        expression,
        ..s.clone()
    })
}

fn egal(s: &Session, r: &Reglages) -> Result<Session, ErreurCalcul> {
    let Some(op) = s.phase.operateur() else {
        return Ok(s.clone());
    };

    let texte = calcule(op, s.accumulateur, &s.operande, r)?;
    Ok(Session {
        accumulateur: relire(&texte)?,
        expression: format!("{} = {}", s.expression, texte),
        operande: texte,
        phase: Phase::Resultat,
    })
}

fn operateur(s: &Session, nouveau: Operateur, r: &Reglages) -> Result<Session, ErreurCalcul> {
    let phase = Phase::OperateurEnAttente(nouveau);

    if let Phase::SaisieSecond(op) = s.phase {
        // évaluation chaînée : 5 + 3 X  ->  8 X
        let texte = calcule(op, s.accumulateur, &s.operande, r)?;
        return Ok(Session {
            accumulateur: relire(&texte)?,
            expression: format!("{texte} {nouveau}"),
            operande: texte,
            phase,
        });
    }

    Ok(Session {
        accumulateur: lire_nombre(&s.operande)?,
        expression: format!("{} {}", s.operande, nouveau),
        operande: s.operande.clone(),
        phase,
    })
}

fn pourcent(s: &Session, r: &Reglages) -> Result<Session, ErreurCalcul> {
    let x = lire_nombre(&s.operande)?;
    if x == 0.0 {
        return Ok(s.clone());
    }

    let texte = formater(operations::percentage(x)?, r)?;
    Ok(Session {
        accumulateur: relire(&texte)?,
        expression: format!("{}% = {}", texte_court(x), texte),
        operande: texte,
        phase: apres_fonction(s.phase),
    })
}

fn pi(s: &Session, r: &Reglages) -> Result<Session, ErreurCalcul> {
    let texte_pi = formater(operations::pi(), r)?;

    match s.phase {
        Phase::SaisieSecond(op) => {
            let texte = calcule(op, s.accumulateur, &texte_pi, r)?;
            Ok(Session {
                accumulateur: relire(&texte)?,
                expression: format!("{} {} = {}", s.expression, texte_pi, texte),
                operande: texte,
                phase: Phase::Resultat,
            })
        }
        Phase::OperateurEnAttente(op) => Ok(Session {
            expression: format!("{} {}", s.expression, texte_pi),
            operande: texte_pi,
            phase: Phase::SaisieSecond(op),
            ..s.clone()
        }),
        Phase::Repos | Phase::SaisiePremier | Phase::Resultat => Ok(Session {
            expression: format!("π = {texte_pi}"),
            operande: texte_pi,
            accumulateur: operations::pi(),
            phase: Phase::Resultat,
        }),
    }
}

fn racine(s: &Session, r: &Reglages) -> Result<Session, ErreurCalcul> {
    let x = lire_nombre(&s.operande)?;
    if x == 0.0 {
        return Ok(s.clone());
    }

    let texte = formater(operations::sqrt(x)?, r)?;
    Ok(Session {
        accumulateur: relire(&texte)?,
        expression: format!("√({}) = {}", texte_court(x), texte),
        operande: texte,
        phase: apres_fonction(s.phase),
    })
}

/// Après % ou √ : l’opérateur en attente survit (5 + 20 % 3 +  ->  0.2 + 3).
fn apres_fonction(phase: Phase) -> Phase {
    match phase.operateur() {
        Some(op) => Phase::OperateurEnAttente(op),
        None => Phase::Resultat,
    }
}

/// `a op b`, déjà formaté pour l’affichage.
fn calcule(op: Operateur, a: f64, b: &str, r: &Reglages) -> Result<String, ErreurCalcul> {
    let v = execute_calculation(op, a, b)?;
    formater(v, r)
}

/// Relit un résultat que l’on vient de formater (ne peut pas échouer).
fn relire(texte: &str) -> Result<f64, ErreurCalcul> {
    lire_nombre(texte)
        .map_err(|_| ErreurCalcul::Interne(format!("résultat formaté illisible: {texte:?}")))
}
