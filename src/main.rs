// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : ligne de commande (clap) + journal (tracing)
//                                 puis eframe::run_native, ou évaluation sans fenêtre
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : ton index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
#[cfg(not(target_arch = "wasm32"))]
mod cli;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Style (natif + web) ------------------------ */

/// Grosses touches, écran lisible.
fn installer_style(ctx: &egui::Context) {
    use egui::{FontFamily, FontId, TextStyle};

    ctx.style_mut(|style| {
        style
            .text_styles
            .insert(TextStyle::Button, FontId::new(22.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Heading, FontId::new(26.0, FontFamily::Proportional));
        style
            .text_styles
            .insert(TextStyle::Monospace, FontId::new(18.0, FontFamily::Monospace));
    });
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    let args = cli::Arguments::parse();
    cli::initialiser_journal(args.log.as_deref());

    // Mode sans fenêtre : une expression, une sortie.
    if let Some(expression) = args.expression.as_deref() {
        println!("{}", cli::rendu_console(expression, args.demarche));
        return Ok(());
    }

    tracing::info!("ouverture de la fenêtre");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 480.0])
            .with_min_inner_size([300.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            // Contexte egui prêt => style avant la première frame.
            installer_style(&cc.egui_ctx);
            Ok(Box::<AppCalc>::default())
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{installer_style, AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    installer_style(&cc.egui_ctx);
                    Ok(Box::<AppCalc>::default())
                }),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
