//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, démarche)
//! et offrir les actions des touches, sans logique d’affichage.
//!
//! Contrats :
//! - Une touche = un caractère ajouté, sans aucune validation.
//! - "=" passe l’entrée au noyau et affiche sa sortie telle quelle.
//! - "C" efface l’entrée, l’affichage et la démarche.

use tracing::info;

use crate::noyau::calculer_avec_demarche;

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String, // nombre formaté, entrée renvoyée, ou message d’erreur

    // --- démarche (expression après chaque parenthèse résolue) ---
    pub demarche: Vec<String>,
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// Chiffre, '.', opérateur ou parenthèse : ajouté tel quel.
    pub fn appuyer(&mut self, c: char) {
        self.entree.push(c);
    }

    /// C : remise à zéro (entrée + affichage + démarche).
    pub fn annuler(&mut self) {
        self.entree.clear();
        self.affichage.clear();
        self.demarche.clear();
    }

    /// DEL : retire le dernier caractère de l’entrée.
    pub fn effacer_dernier(&mut self) {
        self.entree.pop();
    }

    /// = : évalue l’entrée via le noyau. L’entrée est conservée.
    pub fn evaluer(&mut self) {
        let (sortie, demarche) = calculer_avec_demarche(&self.entree);
        self.affichage = sortie.to_string();
        self.demarche = demarche;

        info!(entree = %self.entree, affichage = %self.affichage, "évaluation");
    }
}
