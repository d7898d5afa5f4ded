// src/noyau/jetons.rs
//
// Alphabet des touches : "0".."9", ".", "AC", "=", "+", "-", "X", "/", "%", "π", "sqrt".
// Deux classes : saisie numérique (chiffre ou point) et commandes.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurJeton;
use super::operations::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Jeton {
    /// 0..=9
    Chiffre(u8),
    Point,

    ToutEffacer, // AC
    Egal,
    Operateur(Operateur),
    Pourcent,
    Pi,
    Racine, // sqrt
}

impl Jeton {
    /// Les 20 touches, dans l’ordre du pavé.
    pub const TOUTES: [Jeton; 20] = [
        Jeton::ToutEffacer,
        Jeton::Pi,
        Jeton::Pourcent,
        Jeton::Operateur(Operateur::Divise),
        Jeton::Chiffre(7),
        Jeton::Chiffre(8),
        Jeton::Chiffre(9),
        Jeton::Operateur(Operateur::Fois),
        Jeton::Chiffre(4),
        Jeton::Chiffre(5),
        Jeton::Chiffre(6),
        Jeton::Operateur(Operateur::Moins),
        Jeton::Chiffre(1),
        Jeton::Chiffre(2),
        Jeton::Chiffre(3),
        Jeton::Operateur(Operateur::Plus),
        Jeton::Chiffre(0),
        Jeton::Point,
        Jeton::Racine,
        Jeton::Egal,
    ];

    pub fn texte(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Jeton::Chiffre(d) => CHIFFRES.get(d as usize).copied().unwrap_or("0"),
            Jeton::Point => ".",
            Jeton::ToutEffacer => "AC",
            Jeton::Egal => "=",
            Jeton::Operateur(op) => op.symbole(),
            Jeton::Pourcent => "%",
            Jeton::Pi => "π",
            Jeton::Racine => "sqrt",
        }
    }
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.texte())
    }
}

impl FromStr for Jeton {
    type Err = ErreurJeton;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let j = match s {
            "." => Jeton::Point,
            "AC" => Jeton::ToutEffacer,
            "=" => Jeton::Egal,
            "+" => Jeton::Operateur(Operateur::Plus),
            "-" => Jeton::Operateur(Operateur::Moins),
            "X" => Jeton::Operateur(Operateur::Fois),
            "/" => Jeton::Operateur(Operateur::Divise),
            "%" => Jeton::Pourcent,
            "π" => Jeton::Pi,
            "sqrt" => Jeton::Racine,
            _ => {
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c), None) if c.is_ascii_digit() => Jeton::Chiffre(c as u8 - b'0'),
                    _ => return Err(ErreurJeton(s.to_string())),
                }
            }
        };
        Ok(j)
    }
}
