// src/noyau/operations.rs
//
// Arithmétique f64 (IEEE-754 double) + opérations spéciales.
//
// Contrat :
// - les 4 opérations binaires renvoient NaN (sentinelle) au lieu d’un infini / NaN,
//   et NaN pour une division par zéro ;
// - tout le reste renvoie Result<f64, ErreurCalcul> ;
// - rien ne panique.

use std::fmt;

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole de la touche (et de la ligne d’expression).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "X",
            Operateur::Divise => "/",
        }
    }

    /// Applique l’opération brute (sentinelle NaN en cas d’échec).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => add(a, b),
            Operateur::Moins => subtract(a, b),
            Operateur::Fois => multiply(a, b),
            Operateur::Divise => divide(a, b),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

fn fini_ou_nan(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        f64::NAN
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    fini_ou_nan(a + b)
}

pub fn subtract(a: f64, b: f64) -> f64 {
    fini_ou_nan(a - b)
}

pub fn multiply(a: f64, b: f64) -> f64 {
    fini_ou_nan(a * b)
}

pub fn divide(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }
    fini_ou_nan(a / b)
}

/// a / 100.
pub fn percentage(a: f64) -> Result<f64, ErreurCalcul> {
    if !a.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }
    let r = a / 100.0;
    if r.is_finite() {
        Ok(r)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}

pub fn pi() -> f64 {
    std::f64::consts::PI
}

/// Racine carrée principale ; négatif ou non fini => erreur.
pub fn sqrt(a: f64) -> Result<f64, ErreurCalcul> {
    if a < 0.0 {
        return Err(ErreurCalcul::RacineNegative(a));
    }
    if !a.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }
    let r = a.sqrt();
    if r.is_finite() {
        Ok(r)
    } else {
        Err(ErreurCalcul::NonFini)
    }
}

/// Lit un nombre décimal fini ("5", "5.", ".5", "-2.25").
pub fn lire_nombre(texte: &str) -> Result<f64, ErreurCalcul> {
    let t = texte.trim();
    match t.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurCalcul::Analyse(t.to_string())),
    }
}

/// `a <op> b` avec `b` sous forme texte (l’opérande en cours de saisie).
pub fn execute_calculation(op: Operateur, a: f64, b: &str) -> Result<f64, ErreurCalcul> {
    let nb = lire_nombre(b)?;
    if !a.is_finite() {
        return Err(ErreurCalcul::NonFini);
    }

    let r = op.appliquer(a, nb);
    if r.is_nan() {
        if op == Operateur::Divise && nb == 0.0 {
            return Err(ErreurCalcul::DivisionParZero);
        }
        return Err(ErreurCalcul::NonFini);
    }
    Ok(r)
}
