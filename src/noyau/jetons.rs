// src/noyau/jetons.rs
//
// Expression = suite de morceaux.
// - Car    : caractère tapé (chiffre, '.', opérateur, parenthèse… ou n’importe quoi)
// - Valeur : résultat d’une paire de parenthèses déjà calculée
//
// Aucune validation à la lecture : un caractère inconnu reste un Car et fera
// échouer le niveau qui le rencontre (renvoi de l’entrée telle quelle).

use std::fmt;

use super::crochets::Paire;
use super::format::formater_nombre;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Morceau {
    Car(char),
    Valeur(f64),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression {
    morceaux: Vec<Morceau>,
}

impl Expression {
    /// Lit une chaîne caractère par caractère (pas d’espaces ignorés).
    pub fn lire(s: &str) -> Self {
        Self {
            morceaux: s.chars().map(Morceau::Car).collect(),
        }
    }

    pub fn morceaux(&self) -> &[Morceau] {
        &self.morceaux
    }

    /// Contenu strictement entre les deux parenthèses de la paire.
    pub fn interieur(&self, paire: Paire) -> Expression {
        Self {
            morceaux: self.morceaux[paire.ouvrante + 1..paire.fermante].to_vec(),
        }
    }

    /// Remplace `(`…`)` (parenthèses comprises) par une seule valeur.
    pub fn substituer(&mut self, paire: Paire, valeur: f64) {
        self.morceaux.drain(paire.ouvrante + 1..=paire.fermante);
        self.morceaux[paire.ouvrante] = Morceau::Valeur(valeur);
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.morceaux {
            match m {
                Morceau::Car(c) => write!(f, "{c}")?,
                Morceau::Valeur(v) => f.write_str(&formater_nombre(*v))?,
            }
        }
        Ok(())
    }
}
