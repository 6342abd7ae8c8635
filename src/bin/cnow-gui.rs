/*!
 * GUI viewer for cnow-rs - country population, capital, and flag data
 *
 * A cross-platform desktop application providing the three views of the
 * merged country list:
 * - Card grid with search and 2-way sort
 * - Table with search and 4-way sort
 * - Population stats with an exportable pie chart
 *
 * Platform support: Windows, macOS, Linux
 */

use cnow_rs::{Client, Country, SortKey};
use cnow_rs::{query, render, stats, viz};
use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([600.0, 400.0])
            .with_title("Countries Overview - cnow-rs"),
        ..Default::default()
    };

    eframe::run_native(
        "Countries Overview",
        options,
        Box::new(|_cc| Ok(Box::new(CnowApp::new()))),
    )
}

/// Main application state
struct CnowApp {
    view: ViewTab,

    // Per-view UI state
    grid_search: String,
    grid_sort: SortKey,
    table_search: String,
    table_sort: SortKey,

    // Chart export options
    plot_width: u32,
    plot_height: u32,

    // Fetched data
    countries: Vec<Country>,

    // UI state
    is_loading: bool,
    status_message: String,
    error_message: String,

    // Background fetch
    fetch_receiver: Option<mpsc::Receiver<FetchResult>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewTab {
    Grid,
    Table,
    Stats,
}

#[derive(Debug)]
enum FetchResult {
    Success(Vec<Country>),
    Error(String),
}

impl CnowApp {
    fn new() -> Self {
        let mut app = Self {
            view: ViewTab::Grid,
            grid_search: String::new(),
            grid_sort: SortKey::Name,
            table_search: String::new(),
            table_sort: SortKey::Name,
            plot_width: 1000,
            plot_height: 700,
            countries: Vec::new(),
            is_loading: false,
            status_message: String::new(),
            error_message: String::new(),
            fetch_receiver: None,
        };
        // The views show fetched data from the start; kick the one-shot
        // fetch off immediately rather than waiting for a click.
        app.start_fetch();
        app
    }

    fn start_fetch(&mut self) {
        if self.is_loading {
            return;
        }

        self.is_loading = true;
        self.error_message.clear();
        self.status_message = "Fetching data from countriesnow.space...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.fetch_receiver = Some(receiver);

        // Spawn background thread for the fetch-and-merge operation
        thread::spawn(move || {
            let client = Client::default();
            let result = match client.fetch_countries() {
                Ok(countries) => FetchResult::Success(countries),
                Err(err) => FetchResult::Error(format!("Failed to fetch data: {}", err)),
            };

            // The view may be gone by the time the fetch lands; sending
            // into a dead channel just drops the result.
            let _ = sender.send(result);
        });
    }

    fn check_fetch_result(&mut self) {
        if let Some(receiver) = &self.fetch_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_loading = false;
            self.fetch_receiver = None;

            match result {
                FetchResult::Success(countries) => {
                    self.status_message = format!("Loaded {} countries", countries.len());
                    self.error_message.clear();
                    self.countries = countries;
                }
                FetchResult::Error(error) => {
                    // Keep whatever list was shown before the failed refresh.
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }
    }

    fn save_pie_chart(&mut self) {
        let start_dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(start_dir)
            .set_file_name("population_pie.svg")
            .add_filter("SVG image", &["svg"])
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };

        let slices = stats::top_slices(&self.countries);
        match viz::plot_population_pie(
            &slices,
            &path,
            self.plot_width,
            self.plot_height,
            "Top 10 Countries by Population",
        ) {
            Ok(()) => {
                self.status_message = format!("Wrote chart to {}", path.display());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("Failed to create chart: {}", err);
                self.status_message.clear();
            }
        }
    }

    fn grid_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut self.grid_search)
                .on_hover_text("Search by country name or ISO code");
            egui::ComboBox::from_label("Sort by")
                .selected_text(match self.grid_sort {
                    SortKey::Population => "Population (High to Low)",
                    _ => "Alphabetical",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.grid_sort, SortKey::Name, "Alphabetical");
                    ui.selectable_value(
                        &mut self.grid_sort,
                        SortKey::Population,
                        "Population (High to Low)",
                    );
                });
        });

        let visible = query::filter_and_sort(&self.countries, &self.grid_search, self.grid_sort);
        ui.label(render::results_summary(visible.len(), &self.grid_search));
        ui.add_space(5.0);

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("country_cards")
                .num_columns(3)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    for (i, country) in visible.iter().enumerate() {
                        ui.group(|ui| {
                            ui.vertical(|ui| {
                                ui.horizontal(|ui| {
                                    ui.strong(&country.name);
                                    ui.monospace(&country.iso);
                                });
                                ui.label(format!("Capital: {}", country.capital));
                                ui.label(format!(
                                    "Population: {}",
                                    render::format_population(&country.population)
                                ));
                                if country.flag_url.is_empty() {
                                    ui.weak("no flag");
                                } else {
                                    ui.hyperlink_to("flag", &country.flag_url);
                                }
                            });
                        });
                        if (i + 1) % 3 == 0 {
                            ui.end_row();
                        }
                    }
                });
        });
    }

    fn table_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.text_edit_singleline(&mut self.table_search)
                .on_hover_text("Search by country name or ISO code");
            egui::ComboBox::from_label("Sort by")
                .selected_text(match self.table_sort {
                    SortKey::Name => "Country Name",
                    SortKey::Iso => "ISO Code",
                    SortKey::Capital => "Capital",
                    SortKey::Population => "Population",
                })
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.table_sort, SortKey::Name, "Country Name");
                    ui.selectable_value(&mut self.table_sort, SortKey::Iso, "ISO Code");
                    ui.selectable_value(&mut self.table_sort, SortKey::Capital, "Capital");
                    ui.selectable_value(&mut self.table_sort, SortKey::Population, "Population");
                });
        });

        let visible = query::filter_and_sort(&self.countries, &self.table_search, self.table_sort);
        ui.label(render::results_summary(visible.len(), &self.table_search));
        ui.add_space(5.0);

        if visible.is_empty() {
            ui.label("No results found.");
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            egui::Grid::new("country_table")
                .striped(true)
                .min_col_width(80.0)
                .show(ui, |ui| {
                    ui.strong("Country");
                    ui.strong("ISO");
                    ui.strong("Capital");
                    ui.strong("Population");
                    ui.end_row();

                    for country in &visible {
                        ui.label(&country.name);
                        ui.monospace(&country.iso);
                        ui.label(&country.capital);
                        ui.label(render::format_population(&country.population));
                        ui.end_row();
                    }
                });
        });
    }

    fn stats_ui(&mut self, ui: &mut egui::Ui) {
        let overview = stats::population_overview(&self.countries);

        ui.group(|ui| {
            ui.label("Population Overview");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong(render::format_average(overview.total as f64));
                    ui.weak("Total Population");
                });
                ui.add_space(40.0);
                ui.vertical(|ui| {
                    ui.strong(render::format_average(overview.average));
                    ui.weak("Average Population");
                });
                ui.add_space(40.0);
                ui.vertical(|ui| {
                    ui.strong(overview.count.to_string());
                    ui.weak(if overview.missing > 0 {
                        "Countries (some without data)"
                    } else {
                        "Countries"
                    });
                });
            });
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.label("Top 10 Countries by Population");
            ui.add_space(5.0);

            let slices = stats::top_slices(&self.countries);
            egui::Grid::new("pie_slices").min_col_width(24.0).show(ui, |ui| {
                for (i, slice) in slices.iter().enumerate() {
                    let color = viz::palette_color(i);
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(
                        rect,
                        2.0,
                        egui::Color32::from_rgb(color.0, color.1, color.2),
                    );
                    ui.label(&slice.name);
                    ui.label(render::format_population(&cnow_rs::Population::Count(
                        slice.value,
                    )));
                    ui.end_row();
                }
            });
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            ui.label("Chart size:");
            ui.add(egui::DragValue::new(&mut self.plot_width).range(200..=3000));
            ui.label("×");
            ui.add(egui::DragValue::new(&mut self.plot_height).range(200..=3000));
            ui.label("pixels");

            if ui
                .add_enabled(!self.countries.is_empty(), egui::Button::new("Save pie chart"))
                .clicked()
            {
                self.save_pie_chart();
            }
        });
    }
}

impl eframe::App for CnowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for a completed background fetch
        self.check_fetch_result();

        // Request repaint if loading (for spinner animation)
        if self.is_loading {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Countries Overview");
            ui.add_space(5.0);

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.view, ViewTab::Grid, "Card Grid");
                ui.selectable_value(&mut self.view, ViewTab::Table, "Table");
                ui.selectable_value(&mut self.view, ViewTab::Stats, "Stats");

                ui.separator();

                if ui
                    .add_enabled(!self.is_loading, egui::Button::new("Refresh"))
                    .clicked()
                {
                    self.start_fetch();
                }

                if self.is_loading {
                    ui.spinner();
                    ui.label("Loading...");
                }
            });

            // Status messages
            if !self.status_message.is_empty() {
                ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
            }
            if !self.error_message.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.error_message);
            }

            ui.separator();

            match self.view {
                ViewTab::Grid => self.grid_ui(ui),
                ViewTab::Table => self.table_ui(ui),
                ViewTab::Stats => self.stats_ui(ui),
            }
        });
    }
}
