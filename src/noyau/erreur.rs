//! Erreurs levées par le noyau.
//!
//! Seule la division par zéro est une vraie erreur : les expressions mal formées
//! ne lèvent rien, elles sont renvoyées telles quelles (voir eval.rs).

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("division par zéro")]
    DivisionParZero,
}
