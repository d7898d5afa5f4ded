// src/app/clavier.rs
//
// Clavier -> jeton. Fonction pure (testable sans egui).
//
// Correspondances :
//   0..9 .        -> saisie
//   + - /         -> opérateurs ; * -> X
//   enter / =     -> =
//   escape        -> AC
//   p -> π ; s -> sqrt ; % -> %
//
// La touche est comparée en minuscules ("Enter", "P" fonctionnent aussi).

use crate::noyau::{Jeton, Operateur};

pub fn jeton_pour_touche(touche: &str) -> Option<Jeton> {
    let t = touche.to_lowercase();

    let j = match t.as_str() {
        "." => Jeton::Point,
        "+" => Jeton::Operateur(Operateur::Plus),
        "-" => Jeton::Operateur(Operateur::Moins),
        "*" => Jeton::Operateur(Operateur::Fois),
        "/" => Jeton::Operateur(Operateur::Divise),
        "enter" | "=" => Jeton::Egal,
        "escape" => Jeton::ToutEffacer,
        "p" => Jeton::Pi,
        "%" => Jeton::Pourcent,
        "s" => Jeton::Racine,
        _ => {
            let mut it = t.chars();
            match (it.next(), it.next()) {
                (Some(c), None) if c.is_ascii_digit() => Jeton::Chiffre(c as u8 - b'0'),
                _ => return None,
            }
        }
    };
    Some(j)
}
