// src/cli.rs
//
// Ligne de commande (natif seulement).
// - sans argument        : ouvre la fenêtre
// - --expression "2+2"   : affiche le résultat et sort, sans fenêtre
// - --log debug          : filtre de journalisation (sinon RUST_LOG, défaut warn)

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::noyau::{calculer, calculer_avec_demarche};

/// Filtre utilisé si ni --log ni RUST_LOG ne sont fournis.
const FILTRE_DEFAUT: &str = "warn";

/// Calculatrice quatre opérations avec parenthèses
#[derive(Parser, Debug)]
#[command(name = "calculatrice")]
#[command(version)]
pub struct Arguments {
    /// Expression à évaluer sans ouvrir la fenêtre (ex: "12*(12-(6+6))")
    #[arg(short, long)]
    pub expression: Option<String>,

    /// Affiche aussi la démarche (expression après chaque parenthèse résolue)
    #[arg(short, long)]
    pub demarche: bool,

    /// Filtre de journalisation (syntaxe RUST_LOG, ex: "debug")
    #[arg(long)]
    pub log: Option<String>,
}

/// Installe le journal sur stderr. Priorité : --log, puis RUST_LOG, puis "warn".
pub fn initialiser_journal(log: Option<&str>) {
    let filtre = match log {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILTRE_DEFAUT)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .init();
}

/// Texte imprimé en mode sans fenêtre : la démarche (si demandée), puis la sortie.
pub fn rendu_console(expression: &str, demarche: bool) -> String {
    if !demarche {
        return calculer(expression).to_string();
    }

    let (sortie, etapes) = calculer_avec_demarche(expression);

    let mut lignes = vec![expression.to_string()];
    lignes.extend(etapes.into_iter().map(|e| format!("= {e}")));
    lignes.push(sortie.to_string());
    lignes.join("\n")
}
