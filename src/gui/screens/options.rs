// src/gui/screens/options.rs
//
// Language, dictionary and order on top; the term box fills the rest.

use eframe::egui::{self, RichText, TextEdit};

use crate::{
    config::options::{Dictionary, Language},
    gui::{actions, app::App},
    lookup::parse_terms,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Options");
    ui.add_space(6.0);

    egui::Grid::new("options_grid").num_columns(2).spacing([12.0, 6.0]).show(ui, |ui| {
        ui.label("Language:");
        let before = app.state.options.language;
        let mut language = before;
        egui::ComboBox::from_id_salt("language")
            .selected_text(language.name())
            .show_ui(ui, |ui| {
                for lang in Language::SELECTABLE {
                    ui.selectable_value(&mut language, lang, lang.name());
                }
            });
        if language != before {
            // dictionary list follows the language
            app.state.options.set_language(language);
            logf!("UI: Language → {language}, dictionary → {}", app.state.options.dictionary);
        }
        ui.end_row();

        ui.label("Dictionary:");
        let opts = &mut app.state.options;
        let available = Dictionary::available_for(opts.language);
        egui::ComboBox::from_id_salt("dictionary")
            .selected_text(opts.dictionary.name())
            .show_ui(ui, |ui| {
                for &d in available {
                    ui.selectable_value(&mut opts.dictionary, d, d.name());
                }
            });
        ui.end_row();

        // Order only matters where the site could answer either way round.
        if opts.language.uses_latin() {
            ui.label("Order:");
            ui.horizontal(|ui| {
                ui.label(opts.direction.label(opts.language));
                if ui.button("⇄").on_hover_text("Swap direction").clicked() {
                    opts.direction = opts.direction.toggled();
                    logf!("UI: Direction → {:?}", opts.direction);
                }
            });
            ui.end_row();

            ui.label("");
            ui.checkbox(&mut opts.strict, "Only accept results in this order");
            ui.end_row();
        }
    });

    ui.add_space(8.0);
    ui.label("Terms (one per line):");

    let n_terms = parse_terms(&app.state.gui.input).len();
    let box_height = (ui.available_height() - 64.0).max(80.0);
    egui::ScrollArea::vertical().max_height(box_height).show(ui, |ui| {
        ui.add_sized(
            [ui.available_width(), box_height],
            TextEdit::multiline(&mut app.state.gui.input).hint_text("bonjour\nau revoir"),
        );
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        let search = ui.add_enabled(n_terms > 0, egui::Button::new("Search"));
        if search.clicked() {
            actions::search(app, ui.ctx());
        }
        ui.weak(format!("{n_terms} term(s)"));

        if let Some(err) = &app.error {
            ui.label(RichText::new(err).color(ui.visuals().error_fg_color));
        }
    });
}
