use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use eframe::egui;
use tracing::{debug, info, warn};

use polgallery_core::{Catalog, ComparisonSet, FilterField, FilterSpec};
use polgallery_render::{
    build_comparison, build_gallery, AssetRequest, ComparisonView, GalleryView,
};

use crate::app_state::ActiveDialog;
use crate::asset_worker::{spawn_asset_worker, AssetJob, AssetResponse};
use crate::preferences::AppPreferences;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(80, 200, 255);
pub(crate) const PANEL_FILL: egui::Color32 = egui::Color32::from_rgb(12, 12, 14);
pub(crate) const MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct PolGalleryApp {
    // Data
    pub(crate) catalog: Catalog,
    pub(crate) filter: FilterSpec,
    pub(crate) selection: ComparisonSet,

    // Views, rebuilt wholesale whenever their inputs change
    pub(crate) gallery: GalleryView,
    pub(crate) comparison: ComparisonView,

    // UI state
    pub(crate) active_dialog: ActiveDialog,
    pub(crate) show_settings: bool,
    pub(crate) asset_root_buf: String,
    pub(crate) preferences: AppPreferences,

    // Asset worker
    pub(crate) asset_tx: mpsc::Sender<AssetJob>,
    pub(crate) asset_rx: mpsc::Receiver<AssetResponse>,
    pub(crate) asset_generation: u64,
    pub(crate) textures: HashMap<String, egui::TextureHandle>,
    pub(crate) requested_assets: HashSet<String>,
    pub(crate) failed_assets: HashSet<String>,
}

// ---------------------------------------------------------------------------
// Constructor
// ---------------------------------------------------------------------------

impl PolGalleryApp {
    pub(crate) fn new(egui_ctx: &egui::Context, prefs: AppPreferences) -> Self {
        let catalog = Catalog::standard();
        info!("Catalog ready: {} images", catalog.len());

        let filter = FilterSpec::default();
        let selection = ComparisonSet::new();
        let gallery = build_gallery(&catalog, &filter, &selection);
        let comparison = build_comparison(&catalog, &selection);

        let (asset_tx, asset_rx) = spawn_asset_worker(egui_ctx.clone());
        let asset_root_buf = prefs.asset_root.clone();

        Self {
            catalog,
            filter,
            selection,
            gallery,
            comparison,
            active_dialog: ActiveDialog::None,
            show_settings: false,
            asset_root_buf,
            preferences: prefs,
            asset_tx,
            asset_rx,
            asset_generation: 0,
            textures: HashMap::new(),
            requested_assets: HashSet::new(),
            failed_assets: HashSet::new(),
        }
    }

    // -- Filter & selection ------------------------------------------------

    pub(crate) fn rebuild_gallery(&mut self) {
        debug_assert!(self.filter.validate(self.catalog.domains()).is_ok());
        self.gallery = build_gallery(&self.catalog, &self.filter, &self.selection);
    }

    fn rebuild_views(&mut self) {
        self.comparison = build_comparison(&self.catalog, &self.selection);
        self.rebuild_gallery();
    }

    pub(crate) fn set_filter(&mut self, field: FilterField, value: &str) {
        if self.filter.get(field).unwrap_or("") == value {
            return;
        }
        self.filter.set(field, value);
        debug!("Filter changed: {:?}", self.filter);
        self.rebuild_gallery();
    }

    pub(crate) fn clear_filters(&mut self) {
        if !self.filter.is_empty() {
            self.filter.clear();
            self.rebuild_gallery();
        }
    }

    /// Pin or unpin an image. A rejected pin opens the overflow notice.
    pub(crate) fn toggle_comparison(&mut self, id: &str) {
        match self.selection.toggle(id) {
            Ok(_) => self.rebuild_views(),
            Err(e) => self.active_dialog = ActiveDialog::ComparisonFull(e.to_string()),
        }
    }

    pub(crate) fn clear_comparison(&mut self) {
        if self.selection.clear() {
            self.rebuild_views();
        }
    }

    // -- Assets --------------------------------------------------------------

    /// Forget every decoded image and start over, e.g. after the asset
    /// root changed.
    pub(crate) fn reset_assets(&mut self) {
        self.asset_generation += 1;
        self.textures.clear();
        self.requested_assets.clear();
        self.failed_assets.clear();
    }

    /// Ask the worker for every on-screen image not yet requested.
    fn request_visible_assets(&mut self) {
        let root = self.preferences.asset_root_path();
        let wanted: Vec<&str> = self
            .comparison
            .slots
            .iter()
            .filter_map(|s| s.image().map(|i| i.id.as_str()))
            .chain(self.gallery.cards().map(|c| c.id.as_str()))
            .collect();

        let mut requests = Vec::new();
        for id in wanted {
            if self.requested_assets.contains(id) {
                continue;
            }
            if let Some(record) = self.catalog.get(id) {
                requests.push(AssetRequest::for_record(&root, record));
                self.requested_assets.insert(id.to_string());
            }
        }
        if requests.is_empty() {
            return;
        }

        debug!("Requesting {} images from {}", requests.len(), root.display());
        let job = AssetJob {
            generation: self.asset_generation,
            requests,
        };
        if self.asset_tx.send(job).is_err() {
            warn!("Asset worker is gone; images will not load");
        }
    }

    /// Drain decoded images into textures.
    fn poll_asset_responses(&mut self, ctx: &egui::Context) {
        while let Ok(resp) = self.asset_rx.try_recv() {
            match resp {
                AssetResponse::Loaded {
                    generation,
                    id,
                    image,
                } => {
                    if generation != self.asset_generation {
                        continue;
                    }
                    let color_image = egui::ColorImage::from_rgba_unmultiplied(
                        [image.width as usize, image.height as usize],
                        &image.pixels,
                    );
                    let handle = ctx.load_texture(
                        format!("image_{id}"),
                        color_image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.insert(id, handle);
                }
                AssetResponse::Failed { generation, id } => {
                    if generation == self.asset_generation {
                        self.failed_assets.insert(id);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for PolGalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());
        self.poll_asset_responses(ctx);
        self.request_visible_assets();

        self.draw_filter_bar(ctx);

        let mut toggle_request: Option<String> = None;
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(PANEL_FILL)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.draw_comparison_panel(ui, &mut toggle_request);
                    ui.add_space(16.0);
                    ui.separator();
                    self.draw_gallery(ui, &mut toggle_request);
                });
            });

        if let Some(id) = toggle_request {
            self.toggle_comparison(&id);
        }

        self.show_settings_window(ctx);
        self.show_comparison_notice(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting PolGallery");

    let prefs = AppPreferences::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PolGallery")
            .with_inner_size([prefs.window_width, prefs.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "PolGallery",
        options,
        Box::new(move |cc| {
            egui_material_icons::initialize(&cc.egui_ctx);
            Ok(Box::new(PolGalleryApp::new(&cc.egui_ctx, prefs)))
        }),
    )
}
