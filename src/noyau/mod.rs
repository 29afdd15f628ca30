//! Noyau — évaluateur quatre opérations avec parenthèses
//!
//! Organisation interne :
//! - jetons.rs   : Expression = suite de morceaux (caractère tapé / valeur calculée)
//! - crochets.rs : paire de parenthèses la plus intérieure
//! - niveau.rs   : opérateurs + résolution d’un niveau de précédence (* / puis + -)
//! - eval.rs     : pipeline complet + démarche
//! - format.rs   : affichage d’un résultat flottant
//! - erreur.rs   : erreurs levées (division par zéro)

pub mod crochets;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod niveau;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use eval::{calculer, calculer_avec_demarche};
