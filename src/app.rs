// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter EtatCalc (pour main.rs: use crate::app::EtatCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Aucun champ de saisie libre : les raccourcis clavier sont donc gérés
//   ici, globalement, sans risque de double déclenchement.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::EtatCalc;`
pub use etat::EtatCalc;

use eframe::egui;

impl eframe::App for EtatCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourcis clavier minimaux (safe natif + web) :
        // Enter = "=", Backspace = DEL, ESC = C.
        let (entree, retour, esc) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if entree {
            self.evaluer();
        }
        if retour {
            self.retour_arriere();
        }
        if esc {
            self.effacer();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
