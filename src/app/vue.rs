// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même EtatCalc (etat.rs) pour natif + wasm
// - Clavier : géré globalement dans app.rs (Enter/Backspace/Escape)
// - Tactile : gros boutons type calculatrice de bureau
//
// Note :
// - Deux chemins vers le noyau : les rangées trig/math s'appliquent
//   DIRECTEMENT à l'affichage courant (opérateur unaire + ligne
//   d'historique), la rangée "sin( ... 10^(" INSÈRE du texte résolu
//   au moment du "=".

use eframe::egui;

use super::etat::{Constante, EtatCalc};
use crate::noyau::{FnTrig, ModeAngle, OpUnaire};

impl EtatCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice scientifique");
                ui.add_space(6.0);

                self.ui_affichage(ui);
                ui.add_space(8.0);

                self.ui_controles(ui);
                ui.add_space(6.0);

                self.ui_fonctions(ui);
                ui.add_space(6.0);

                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    /* ------------------------ Zones ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    ui.monospace(self.mode_angle.to_string());
                    if self.memoire != 0.0 {
                        ui.monospace("M");
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(egui::RichText::new(self.affichage.as_str()).size(26.0));
                });
            });
    }

    fn ui_controles(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            let mode = match self.mode_angle {
                ModeAngle::Degres => "DEG",
                ModeAngle::Radians => "RAD",
            };
            self.bouton(ui, mode, "Bascule degrés/radians", Commande::BasculeAngle);

            ui.separator();

            self.bouton(ui, "MC", "Efface la mémoire", Commande::MemEfface);
            self.bouton(ui, "MR", "Rappelle la mémoire", Commande::MemRappel);
            self.bouton(ui, "M+", "Ajoute l'affichage à la mémoire", Commande::MemPlus);
            self.bouton(ui, "M-", "Retire l'affichage de la mémoire", Commande::MemMoins);
            self.bouton(ui, "MS", "Range l'affichage en mémoire", Commande::MemRange);

            ui.separator();

            self.bouton(ui, "C", "Remet l'affichage à zéro", Commande::Effacer);
            self.bouton(ui, "DEL", "Efface le dernier caractère", Commande::RetourArriere);
            self.bouton(ui, "±", "Bascule le signe", Commande::Signe);
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        // trig : application directe à l'affichage courant, avec la
        // conversion du mode d'angle et sa ligne d'historique
        ui.horizontal_wrapped(|ui| {
            for f in [
                FnTrig::Sin,
                FnTrig::Cos,
                FnTrig::Tan,
                FnTrig::Asin,
                FnTrig::Acos,
                FnTrig::Atan,
            ] {
                self.bouton(
                    ui,
                    f.nom(),
                    "Applique à l'affichage (selon DEG/RAD)",
                    Commande::Unaire(OpUnaire::Trig(f)),
                );
            }
        });

        // fonctions mathématiques : application directe, même chemin
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "x²", "Carré de l'affichage", Commande::Unaire(OpUnaire::Carre));
            self.bouton(ui, "√x", "Racine de l'affichage", Commande::Unaire(OpUnaire::Racine));
            self.bouton(ui, "1/x", "Inverse de l'affichage", Commande::Unaire(OpUnaire::Inverse));
            self.bouton(ui, "n!", "Factorielle de l'affichage", Commande::Unaire(OpUnaire::Factorielle));
            self.bouton(ui, "|x|", "Valeur absolue", Commande::Unaire(OpUnaire::Abs));
        });

        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "log", "Log base 10 de l'affichage", Commande::Unaire(OpUnaire::Log10));
            self.bouton(ui, "ln", "Log naturel de l'affichage", Commande::Unaire(OpUnaire::Ln));
            self.bouton(ui, "exp", "e^affichage", Commande::Unaire(OpUnaire::Exp));
            self.bouton(ui, "10^x", "10^affichage", Commande::Unaire(OpUnaire::DixPuissance));
        });

        // insertion : construction d'expression, résolue par "="
        ui.horizontal_wrapped(|ui| {
            for (label, texte) in [
                ("sin(", "sin("),
                ("cos(", "cos("),
                ("tan(", "tan("),
                ("log(", "log("),
                ("ln(", "ln("),
                ("√(", "√("),
                ("10^(", "10^("),
            ] {
                self.bouton(ui, label, "Insère la fonction dans l'expression", Commande::Texte(texte));
            }
        });

        // constantes + structure d'expression
        ui.horizontal_wrapped(|ui| {
            self.bouton(ui, "π", "Insère π", Commande::Constante(Constante::Pi));
            self.bouton(ui, "e", "Insère e", Commande::Constante(Constante::E));
            self.bouton(ui, "^", "Puissance", Commande::Operateur("^"));
            self.bouton(ui, "(", "Parenthèse ouvrante", Commande::Texte("("));
            self.bouton(ui, ")", "Parenthèse fermante", Commande::Texte(")"));
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_sci")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_chiffre(ui, "7");
                self.bouton_chiffre(ui, "8");
                self.bouton_chiffre(ui, "9");
                self.bouton(ui, "÷", "Division", Commande::Operateur("÷"));
                ui.end_row();

                self.bouton_chiffre(ui, "4");
                self.bouton_chiffre(ui, "5");
                self.bouton_chiffre(ui, "6");
                self.bouton(ui, "×", "Multiplication", Commande::Operateur("×"));
                ui.end_row();

                self.bouton_chiffre(ui, "1");
                self.bouton_chiffre(ui, "2");
                self.bouton_chiffre(ui, "3");
                self.bouton(ui, "-", "Soustraction", Commande::Operateur("-"));
                ui.end_row();

                self.bouton_chiffre(ui, "0");
                self.bouton_chiffre(ui, ".");
                self.bouton(ui, "=", "Évalue l'expression", Commande::Evaluer);
                self.bouton(ui, "+", "Addition", Commande::Operateur("+"));
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                ui.label(format!(
                    "{} / {} entrées",
                    self.historique.len(),
                    super::etat::HISTORIQUE_MAX
                ));

                if self.historique.is_empty() {
                    ui.monospace("(vide)");
                } else {
                    // du plus récent au plus ancien
                    for entree in self.historique.iter().rev() {
                        ui.monospace(entree.as_str());
                    }
                }

                ui.add_space(4.0);
                if ui.button("Effacer l'historique").clicked() {
                    self.effacer_historique();
                }
            });
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, commande: Commande) {
        let resp = ui
            .add_sized([52.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.executer(commande);
        }
    }

    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, chiffre: &'static str) {
        let resp = ui.add_sized([52.0, 30.0], egui::Button::new(chiffre));
        if resp.clicked() {
            self.inserer_texte(chiffre);
        }
    }

    fn executer(&mut self, commande: Commande) {
        match commande {
            Commande::Texte(t) => self.inserer_texte(t),
            Commande::Operateur(op) => self.inserer_operateur(op),
            Commande::Constante(c) => self.inserer_constante(c),
            Commande::Unaire(op) => self.appliquer_unaire(op),
            Commande::Evaluer => self.evaluer(),
            Commande::Effacer => self.effacer(),
            Commande::RetourArriere => self.retour_arriere(),
            Commande::Signe => self.basculer_signe(),
            Commande::BasculeAngle => self.bascule_mode_angle(),
            Commande::MemEfface => self.memoire_efface(),
            Commande::MemRappel => self.memoire_rappel(),
            Commande::MemPlus => self.memoire_ajoute(),
            Commande::MemMoins => self.memoire_soustrait(),
            Commande::MemRange => self.memoire_range(),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Commande {
    Texte(&'static str),
    Operateur(&'static str),
    Constante(Constante),
    Unaire(OpUnaire),
    Evaluer,
    Effacer,
    RetourArriere,
    Signe,
    BasculeAngle,
    MemEfface,
    MemRappel,
    MemPlus,
    MemMoins,
    MemRange,
}
