// src/noyau/niveau.rs
//
// Résolution d’une expression plate (sans parenthèses), niveau par niveau.
//
// Règles:
// - Un niveau ne découpe QUE sur ses propres opérateurs ; tout le reste
//   (chiffres, '.', opérateurs de l’autre niveau, caractères inconnus)
//   s’accumule dans l’opérande courant.
// - Bas (+ -)  : chaque opérande est résolu au niveau Haut.
// - Haut (* /) : chaque opérande doit être un nombre (Valeur, ou ^[0-9.]*$ lisible en f64).
// - Opérande mal formé => Ok(None) : l’appelant renvoie l’entrée telle quelle.
// - Repli de gauche à droite (associativité gauche aux deux niveaux).

use num_traits::Zero;
use tracing::trace;

use super::erreur::ErreurCalcul;
use super::jetons::Morceau;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }

    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
        match self {
            Self::Plus => Ok(a + b),
            Self::Moins => Ok(a - b),
            Self::Fois => Ok(a * b),
            Self::Divise if b.is_zero() => Err(ErreurCalcul::DivisionParZero),
            Self::Divise => Ok(a / b),
        }
    }
}

/// Palier de précédence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Niveau {
    /// `*` et `/`
    Haut,
    /// `+` et `-`
    Bas,
}

impl Niveau {
    pub fn operateurs(self) -> &'static [Operateur] {
        match self {
            Self::Haut => &[Operateur::Fois, Operateur::Divise],
            Self::Bas => &[Operateur::Plus, Operateur::Moins],
        }
    }

    fn separateur(self, m: &Morceau) -> Option<Operateur> {
        match m {
            Morceau::Car(c) => {
                Operateur::depuis(*c).filter(|op| self.operateurs().contains(op))
            }
            Morceau::Valeur(_) => None,
        }
    }
}

/// Multiplications / divisions d’une expression plate.
pub fn calculer_md(morceaux: &[Morceau]) -> Result<Option<f64>, ErreurCalcul> {
    resoudre_niveau(morceaux, Niveau::Haut)
}

/// Additions / soustractions d’une expression plate (opérandes via `calculer_md`).
pub fn calculer_as(morceaux: &[Morceau]) -> Result<Option<f64>, ErreurCalcul> {
    resoudre_niveau(morceaux, Niveau::Bas)
}

/// Découpe sur les opérateurs du niveau, résout chaque opérande, puis replie.
pub fn resoudre_niveau(
    morceaux: &[Morceau],
    niveau: Niveau,
) -> Result<Option<f64>, ErreurCalcul> {
    let mut operandes: Vec<&[Morceau]> = Vec::new();
    let mut operateurs: Vec<Operateur> = Vec::new();

    let mut debut = 0;
    for (i, m) in morceaux.iter().enumerate() {
        if let Some(op) = niveau.separateur(m) {
            operandes.push(&morceaux[debut..i]);
            operateurs.push(op);
            debut = i + 1;
        }
    }
    operandes.push(&morceaux[debut..]);

    trace!(
        ?niveau,
        operandes = operandes.len(),
        operateurs = %operateurs.iter().map(|op| op.symbole()).collect::<String>(),
        "découpe d’un niveau"
    );

    let mut valeurs = Vec::with_capacity(operandes.len());
    for operande in operandes {
        let v = match niveau {
            Niveau::Bas => calculer_md(operande)?,
            Niveau::Haut => lire_nombre(operande),
        };
        match v {
            Some(v) => valeurs.push(v),
            None => return Ok(None),
        }
    }

    let mut valeurs = valeurs.into_iter();
    let Some(mut acc) = valeurs.next() else {
        return Ok(None);
    };
    for (op, v) in operateurs.into_iter().zip(valeurs) {
        acc = op.appliquer(acc, v)?;
    }

    Ok(Some(acc))
}

/// Opérande du niveau Haut : une valeur déjà calculée, ou un nombre tapé.
fn lire_nombre(operande: &[Morceau]) -> Option<f64> {
    match operande {
        [Morceau::Valeur(v)] => Some(*v),
        _ => {
            let mut texte = String::with_capacity(operande.len());
            for m in operande {
                match m {
                    Morceau::Car(c) if c.is_ascii_digit() || *c == '.' => texte.push(*c),
                    _ => return None,
                }
            }
            // "" et "1.2.3" passent le filtre mais pas la lecture
            texte.parse::<f64>().ok()
        }
    }
}
