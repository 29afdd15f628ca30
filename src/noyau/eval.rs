//! Noyau — évaluation (pipeline réel)
//!
//! lire -> [paire intérieure -> évaluer l’intérieur -> substituer]* -> + - (opérandes * /)
//!
//! Sortie : un nombre, ou du texte. Le texte est soit l’entrée renvoyée telle
//! quelle (expression mal formée), soit le message d’une erreur levée
//! (division par zéro). L’appelant affiche les deux de la même façon.

use std::fmt;

use tracing::debug;

use super::crochets::crochets_internes;
use super::erreur::ErreurCalcul;
use super::format::formater_nombre;
use super::jetons::Expression;
use super::niveau::calculer_as;

#[derive(Clone, Debug, PartialEq)]
pub enum Sortie {
    Nombre(f64),
    Texte(String),
}

impl fmt::Display for Sortie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sortie::Nombre(v) => f.write_str(&formater_nombre(*v)),
            Sortie::Texte(t) => f.write_str(t),
        }
    }
}

/// API publique : évalue une expression.
pub fn calculer(expr_str: &str) -> Sortie {
    calculer_avec_demarche(expr_str).0
}

/// Comme `calculer`, avec la démarche : l’expression réécrite après chaque
/// substitution de parenthèses (vide si aucune parenthèse résolue).
pub fn calculer_avec_demarche(expr_str: &str) -> (Sortie, Vec<String>) {
    let mut etapes = Vec::new();

    let sortie = match evaluer(Expression::lire(expr_str), &mut etapes) {
        Ok(Some(v)) => Sortie::Nombre(v),
        Ok(None) => {
            debug!(entree = expr_str, "expression mal formée, renvoyée telle quelle");
            Sortie::Texte(expr_str.to_string())
        }
        Err(e) => {
            debug!(entree = expr_str, erreur = %e, "évaluation interrompue");
            Sortie::Texte(e.to_string())
        }
    };

    (sortie, etapes)
}

/// Résout les parenthèses de l’intérieur vers l’extérieur, puis l’expression plate.
///
/// `Ok(None)` : quelque part, un opérande n’est pas un nombre (l’entrée sera renvoyée).
pub fn evaluer(expr: Expression, etapes: &mut Vec<String>) -> Result<Option<f64>, ErreurCalcul> {
    let mut courant = expr;

    while let Some(paire) = crochets_internes(&courant) {
        let Some(valeur) = evaluer(courant.interieur(paire), etapes)? else {
            return Ok(None);
        };

        courant.substituer(paire, valeur);

        let rendu = courant.to_string();
        debug!(expression = %rendu, "parenthèses résolues");
        etapes.push(rendu);
    }

    calculer_as(courant.morceaux())
}
