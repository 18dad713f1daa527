// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Tactile : gros boutons, pavé 4 colonnes (rangée symboles + chiffres)
// - Chaque bouton passe par UNE opération du modèle de saisie : la vue
//   ne manipule jamais le tampon directement
//
// Note :
// - Les boutons × et ÷ insèrent les glyphes d'affichage ; c'est la
//   canonisation du noyau qui les réécrit en * et / à l'évaluation.

use eframe::egui;

use super::etat::AppCalc;

/// Une frappe du pavé, routée vers le modèle de saisie.
#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operateur(char),
    BasculeSigne,
    Pourcent,
    Retour,
    EffaceTout,
    Egal,
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité "calc"
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice de poche");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    /// Écran : expression en cours + dernier résultat.
    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        Self::champ_monospace(ui, "ecran_expression", self.saisie.texte());
        ui.add_space(4.0);
        Self::champ_monospace(ui, "ecran_resultat", &self.resultat);
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "AC", "Remise à zéro totale", Touche::EffaceTout);
                self.bouton(ui, "DEL", "Efface le dernier caractère", Touche::Retour);
                self.bouton(ui, "+/-", "Bascule le signe du nombre final", Touche::BasculeSigne);
                self.bouton(ui, "%", "Nombre final en centièmes", Touche::Pourcent);
                ui.end_row();

                self.bouton(ui, "7", "", Touche::Chiffre('7'));
                self.bouton(ui, "8", "", Touche::Chiffre('8'));
                self.bouton(ui, "9", "", Touche::Chiffre('9'));
                self.bouton(ui, "÷", "", Touche::Operateur('÷'));
                ui.end_row();

                self.bouton(ui, "4", "", Touche::Chiffre('4'));
                self.bouton(ui, "5", "", Touche::Chiffre('5'));
                self.bouton(ui, "6", "", Touche::Chiffre('6'));
                self.bouton(ui, "×", "", Touche::Operateur('×'));
                ui.end_row();

                self.bouton(ui, "1", "", Touche::Chiffre('1'));
                self.bouton(ui, "2", "", Touche::Chiffre('2'));
                self.bouton(ui, "3", "", Touche::Chiffre('3'));
                self.bouton(ui, "-", "", Touche::Operateur('-'));
                ui.end_row();

                self.bouton(ui, "0", "", Touche::Chiffre('0'));
                self.bouton(ui, ".", "", Touche::Chiffre('.'));
                self.bouton(ui, "=", "Évalue l'expression", Touche::Egal);
                self.bouton(ui, "+", "", Touche::Operateur('+'));
                ui.end_row();
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(ui.text_style_height(&egui::TextStyle::Monospace));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.monospace(contenu);
                    });
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, touche: Touche) {
        let mut resp = ui.add_sized([56.0, 40.0], egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }

        if resp.clicked() {
            self.frappe(touche);
        }
    }

    /// Route une frappe vers le modèle de saisie.
    fn frappe(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(c) => self.saisie.ajoute_chiffre(c),
            Touche::Operateur(c) => self.saisie.ajoute_operateur(c),
            Touche::BasculeSigne => self.saisie.bascule_signe(),
            Touche::Pourcent => self.saisie.ajoute_pourcent(),
            Touche::Retour => self.saisie.retour_arriere(),
            Touche::EffaceTout => self.efface_tout(),
            Touche::Egal => self.evalue_via_noyau(),
        }
    }

    /// Raccourcis clavier (app.rs) : Enter évalue, Backspace efface,
    /// Escape remet à zéro.
    pub fn frappe_egal(&mut self) {
        self.frappe(Touche::Egal);
    }
    pub fn frappe_retour(&mut self) {
        self.frappe(Touche::Retour);
    }

    /// Évalue le tampon via la session, puis dépose le résultat dans
    /// l'état UI. Le texte de l'expression reste tel quel.
    fn evalue_via_noyau(&mut self) {
        match self.saisie.evalue() {
            Ok(v) => self.depose_valeur(v),
            Err(_) => self.depose_erreur(),
        }
    }
}
