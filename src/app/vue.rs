// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pavé de touches : chiffres, '.', + - * /, ( ), C, DEL, =
// - Clavier : caractères du pavé ajoutés, Enter évalue, Backspace efface, Escape = C

use eframe::egui;

use super::etat::AppCalc;

#[derive(Clone, Copy, Debug)]
enum Touche {
    Car(char),
    Egal,
    Annuler,
    Effacer,
}

/// Pavé 4 colonnes, ligne par ligne.
const PAVE: [[(&str, Touche); 4]; 5] = [
    [
        ("(", Touche::Car('(')),
        (")", Touche::Car(')')),
        ("C", Touche::Annuler),
        ("DEL", Touche::Effacer),
    ],
    [
        ("7", Touche::Car('7')),
        ("8", Touche::Car('8')),
        ("9", Touche::Car('9')),
        ("/", Touche::Car('/')),
    ],
    [
        ("4", Touche::Car('4')),
        ("5", Touche::Car('5')),
        ("6", Touche::Car('6')),
        ("*", Touche::Car('*')),
    ],
    [
        ("1", Touche::Car('1')),
        ("2", Touche::Car('2')),
        ("3", Touche::Car('3')),
        ("-", Touche::Car('-')),
    ],
    [
        ("0", Touche::Car('0')),
        (".", Touche::Car('.')),
        ("=", Touche::Egal),
        ("+", Touche::Car('+')),
    ],
];

/// Caractères acceptés au clavier (ceux du pavé).
fn est_touche_clavier(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')')
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_clavier(ui);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_demarche(ui);
    }

    fn ui_clavier(&mut self, ui: &mut egui::Ui) {
        let evenements = ui.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => {
                    for c in texte.chars().filter(|c| est_touche_clavier(*c)) {
                        self.appuyer(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => self.evaluer(),
                    egui::Key::Backspace => self.effacer_dernier(),
                    egui::Key::Escape => self.annuler(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.monospace(&self.entree);
                    ui.label(egui::RichText::new(&self.affichage).monospace().heading());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (label, touche) in ligne {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                if self.demarche.is_empty() {
                    ui.weak("aucune parenthèse résolue");
                }
                for etape in &self.demarche {
                    ui.monospace(format!("= {etape}"));
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let resp = ui.add_sized([64.0, 44.0], egui::Button::new(label));
        if !resp.clicked() {
            return;
        }

        match touche {
            Touche::Car(c) => self.appuyer(c),
            Touche::Egal => self.evaluer(),
            Touche::Annuler => self.annuler(),
            Touche::Effacer => self.effacer_dernier(),
        }
    }
}
