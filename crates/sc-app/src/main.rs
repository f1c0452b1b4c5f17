//! Main application entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use eframe::egui::{self, CentralPanel, Context, SidePanel};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use sc_core::{Session, ShowcaseId};
use sc_data::{GalleryConfig, Overview};
use sc_ui::{
    apply_action, apply_theme, keyboard_action, top_bar, ActionQueue, AddressBar, ShellConfig, StatusLine,
    Theme,
};
use sc_ui::{filter_panel::filter_panel, gallery::gallery, overview_panel::overview_panel};
use sc_ui::{quick_nav_panel::quick_nav_panel, viewer};

/// Keys the shell reacts to
const SHORTCUT_KEYS: [egui::Key; 5] = [
    egui::Key::Escape,
    egui::Key::ArrowLeft,
    egui::Key::ArrowRight,
    egui::Key::Enter,
    egui::Key::Q,
];

/// Main application state
struct ShowcaseApp {
    session: Arc<Session>,
    
    /// Mirrors the navigation state as a route
    address_bar: Arc<AddressBar>,
    
    /// Follows session events on the bus
    status: Arc<StatusLine>,
    
    overview: Overview,
    
    shell: ShellConfig,
}

impl ShowcaseApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        session: Arc<Session>,
        address_bar: Arc<AddressBar>,
        status: Arc<StatusLine>,
        overview: Overview,
        shell: ShellConfig,
    ) -> Self {
        apply_theme(&cc.egui_ctx, &Theme::default());
        
        Self {
            session,
            address_bar,
            status,
            overview,
            shell,
        }
    }
    
    fn handle_keyboard(&self, ctx: &Context) {
        let pressed: Vec<egui::Key> = ctx.input(|i| {
            SHORTCUT_KEYS
                .iter()
                .copied()
                .filter(|key| i.key_pressed(*key))
                .collect()
        });
        
        // Each key sees the state left by the previous one
        for key in pressed {
            if let Some(action) = keyboard_action(&self.session, key) {
                apply_action(&self.session, action);
            }
        }
    }
    
    fn catalog_view(&self, ctx: &Context, actions: &mut ActionQueue) {
        SidePanel::left("overview")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                overview_panel(ui, &self.overview);
            });
        
        CentralPanel::default().show(ctx, |ui| {
            let tags = self.session.tag_counts();
            if let Some(action) = filter_panel(ui, &tags, &self.session.filter()) {
                actions.push(action);
            }
            ui.separator();
            
            let visible = self.session.visible_showcases();
            if let Some(action) = gallery(ui, &visible) {
                actions.push(action);
            }
        });
    }
    
    fn showcase_view(&self, ctx: &Context, id: ShowcaseId, actions: &mut ActionQueue) {
        let catalog = self.session.catalog();
        let Some(record) = catalog.get_by_id(id) else {
            return;
        };
        
        let context = self.session.navigation().context();
        viewer::details_panel(ctx, record);
        CentralPanel::default().show(ctx, |ui| {
            if let Some(action) = viewer::viewer(ui, record, &context) {
                actions.push(action);
            }
        });
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);
        
        let mut actions = ActionQueue::default();
        actions.extend(top_bar(ctx, &self.shell, &self.session, &self.address_bar, &self.status));
        
        match self.session.state().current_id() {
            Some(id) => self.showcase_view(ctx, id, &mut actions),
            None => self.catalog_view(ctx, &mut actions),
        }
        
        if self.session.is_quick_nav_open() {
            let current = self.session.navigation().context().position;
            if let Some(action) = quick_nav_panel(ctx, self.session.quick_nav(), current) {
                actions.push(action);
            }
        }
        
        if !actions.is_empty() {
            actions.drain_into(&self.session);
            ctx.request_repaint();
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<()> {
    init_tracing();
    
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => GalleryConfig::load(&path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => GalleryConfig::default(),
    };
    
    let source = config.source();
    info!("Loading showcases from {}", source.source_name());
    
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let gallery = runtime
        .block_on(source.load())
        .with_context(|| format!("failed to load showcases from {}", source.source_name()))?;
    
    let session = Arc::new(Session::new(Arc::new(gallery.catalog), config.session_settings()));
    
    let address_bar = Arc::new(AddressBar::new(session.route()));
    session.navigation().add_subscriber(address_bar.clone());
    let (status, _subscriptions) = StatusLine::attach(session.event_bus(), session.catalog().clone());
    
    let route = config.initial_route();
    if !session.apply_route(route) && route != session.route() {
        warn!("Initial route {} does not name a showcase", route);
    }
    
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };
    
    let shell = ShellConfig {
        title: config.window.title.clone(),
        ..Default::default()
    };
    let overview = gallery.overview;
    
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            Box::new(ShowcaseApp::new(cc, session, address_bar, status, overview, shell))
        }),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;
    
    Ok(())
}
