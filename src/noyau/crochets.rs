// src/noyau/crochets.rs
//
// Recherche de la paire de parenthèses la plus intérieure.
//
// Balayage de droite à gauche : la première '(' rencontrée est la dernière
// ouverte ; la première ')' qui la suit la ferme forcément (aucune '(' entre
// les deux). Une ')' orpheline n’est jamais détectée ici.

use super::jetons::{Expression, Morceau};

/// Positions (dans la suite de morceaux) d’une paire `(`…`)`.
/// Invariant : `ouvrante < fermante`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paire {
    pub ouvrante: usize,
    pub fermante: usize,
}

/// Paire la plus intérieure, ou `None` s’il n’y en a aucune complète.
///
/// Une '(' sans ')' après elle est sautée : on continue avec la '(' précédente.
pub fn crochets_internes(expr: &Expression) -> Option<Paire> {
    let morceaux = expr.morceaux();

    for (ouvrante, m) in morceaux.iter().enumerate().rev() {
        if *m != Morceau::Car('(') {
            continue;
        }

        let fermante = morceaux[ouvrante + 1..]
            .iter()
            .position(|m| *m == Morceau::Car(')'))
            .map(|p| ouvrante + 1 + p);

        if let Some(fermante) = fermante {
            return Some(Paire { ouvrante, fermante });
        }
    }

    None
}
