//! Main application state and update loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use eframe::egui;
use poly_ticker_adapters::TickerAdapterConfig;
use poly_ticker_core::{
    AccountPort, ExpiryFetchTicket, FormField, PageView, PortError, ReservationCommand,
    TickerRegistryPort, TickerTransaction, TransactionStatus, ViewModel,
};

use crate::bridge::ReservationBridge;
use crate::state::{PageUiState, Route};
use crate::ui;

type ExpirySlot = Arc<Mutex<Option<(ExpiryFetchTicket, Result<u64, PortError>)>>>;

/// The main application state
pub struct App {
    bridge: ReservationBridge,
    ui_state: PageUiState,
    /// Runs blocking adapter calls off the UI thread
    runtime: tokio::runtime::Runtime,
    /// Async expiry-limit result receiver
    expiry_result: ExpirySlot,
    /// Whether a background account refresh / receipt poll is running
    refresh_in_flight: Arc<AtomicBool>,
    last_refresh: Option<Instant>,
    refresh_interval: Duration,
    /// Registration shown on the success route
    reserved: Option<TickerTransaction>,
}

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: TickerAdapterConfig,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let refresh_interval = Duration::from_millis(config.receipt_poll_interval_ms.max(250));
        let mut app = Self {
            bridge: ReservationBridge::new(config),
            ui_state: PageUiState::default(),
            runtime,
            expiry_result: Arc::new(Mutex::new(None)),
            refresh_in_flight: Arc::new(AtomicBool::new(false)),
            last_refresh: None,
            refresh_interval,
            reserved: None,
        };
        app.mount_reserve_page(&cc.egui_ctx);
        app
    }

    fn mount_reserve_page(&mut self, ctx: &egui::Context) {
        match self.bridge.mount() {
            Ok(ticket) => self.start_expiry_fetch(ticket, ctx),
            Err(e) => self.ui_state.set_error(format!("Failed to load page: {e}")),
        }
        match self.bridge.form_values() {
            Ok(values) => self.ui_state.draft = values,
            Err(e) => self.ui_state.set_error(e.to_string()),
        }
    }

    fn start_expiry_fetch(&self, ticket: ExpiryFetchTicket, ctx: &egui::Context) {
        let registry = self.bridge.registry();
        let result = Arc::clone(&self.expiry_result);
        let ctx = ctx.clone();
        self.runtime.spawn_blocking(move || {
            let fetched = registry.expiry_limit_seconds();
            if let Ok(mut guard) = result.lock() {
                *guard = Some((ticket, fetched));
            }
            ctx.request_repaint();
        });
    }

    fn check_expiry_result(&mut self) {
        let result = match self.expiry_result.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some((ticket, fetched)) = result {
            self.bridge.complete_expiry_fetch(ticket, fetched);
        }
    }

    /// Refresh the account snapshot and poll the registration receipt in the
    /// background, at most once per interval.
    fn maybe_refresh(&mut self, ctx: &egui::Context) {
        let due = self
            .last_refresh
            .map_or(true, |at| at.elapsed() >= self.refresh_interval);
        if due && !self.refresh_in_flight.swap(true, Ordering::SeqCst) {
            self.last_refresh = Some(Instant::now());
            let account = self.bridge.account();
            let registry = self.bridge.registry();
            let in_flight = Arc::clone(&self.refresh_in_flight);
            let ctx = ctx.clone();
            self.runtime.spawn_blocking(move || {
                if let Err(e) = account.refresh() {
                    tracing::warn!("account refresh failed: {e}");
                }
                if let Err(e) = registry.poll() {
                    tracing::warn!("registration poll failed: {e}");
                }
                in_flight.store(false, Ordering::SeqCst);
                ctx.request_repaint();
            });
        }
        ctx.request_repaint_after(self.refresh_interval);
    }

    fn follow_redirect(&mut self) {
        let path = match self.bridge.take_redirect() {
            Ok(Some(path)) => path,
            Ok(None) => return,
            Err(e) => {
                self.ui_state.set_error(e.to_string());
                return;
            }
        };
        match Route::from_path(&path) {
            Some(Route::Success) => {
                self.reserved = self
                    .bridge
                    .registry()
                    .registration_status()
                    .ok()
                    .and_then(|s| s.transaction);
                self.bridge.unmount();
                self.ui_state.clear_notice();
                self.ui_state.route = Route::Success;
            }
            Some(Route::Reserve) => self.ui_state.route = Route::Reserve,
            None => tracing::warn!(path = %path, "ignoring redirect to unknown route"),
        }
    }

    fn dispatch(&mut self, command: ReservationCommand) {
        match self.bridge.handle(command) {
            Ok(result) if result.registration_dispatched => {
                self.ui_state
                    .set_info("Reservation sent. Waiting for the transaction to be mined...");
            }
            Ok(_) => {}
            Err(e) => self.ui_state.set_error(e.to_string()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        // Check for async expiry-limit result
        self.check_expiry_result();

        self.maybe_refresh(ctx);

        match self.ui_state.route {
            Route::Reserve => self.render_reserve_route(ctx),
            Route::Success => self.render_success_route(ctx),
        }

        self.follow_redirect();
    }
}

impl App {
    fn render_reserve_route(&mut self, ctx: &egui::Context) {
        let page = match self.bridge.present() {
            Ok(ViewModel::Render(page)) => page,
            // Picked up by follow_redirect after this frame
            Ok(ViewModel::Redirect { .. }) => return,
            Err(e) => {
                egui::CentralPanel::default().show(ctx, |ui| ui::error_message(ui, &e.to_string()));
                return;
            }
        };

        if self.ui_state.last_title.as_deref() != Some(page.document_title.as_str()) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(page.document_title.clone()));
            self.ui_state.last_title = Some(page.document_title.clone());
        }

        let dialog_open = page.visible_dialog().is_some();
        let mut command = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                ui.add_enabled_ui(!dialog_open, |ui| {
                    if let Some(c) = self.render_reserve_page(ui, &page) {
                        command = Some(c);
                    }
                });
                ui.add_space(20.0);
            });
        });

        if let Some(view) = page.visible_dialog() {
            if let Some(intent) = ui::dialog(ctx, view) {
                command = Some(intent.into());
            }
        }

        if let Some(command) = command {
            self.dispatch(command);
        }
    }

    fn render_reserve_page(&mut self, ui: &mut egui::Ui, page: &PageView) -> Option<ReservationCommand> {
        ui::styled_heading(ui, &page.heading);
        ui.label(&page.expiry_notice);
        ui.add_space(10.0);

        if let Ok(snapshot) = self.bridge.account().snapshot() {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(snapshot.network_name.as_str()).strong());
                ui.separator();
                ui.label(snapshot.poly_balance.to_string());
            });
        }

        if let Some(err) = self.ui_state.last_error.as_deref() {
            ui::error_message(ui, err);
        }
        if let Some(info) = self.ui_state.last_info.as_deref() {
            ui::success_message(ui, info);
        }

        let mut submit = None;
        ui::card(ui, |ui| {
            let mut changed = false;

            ui.label("Token Symbol");
            changed |= ui::text_input(ui, &mut self.ui_state.draft.ticker, "e.g. POLY").changed();
            ui::field_error(ui, self.ui_state.field_error(FormField::Ticker));
            ui.add_space(6.0);

            ui.label("Token Name");
            changed |= ui::text_input(ui, &mut self.ui_state.draft.token_name, "e.g. Polymath Token")
                .changed();
            ui::field_error(ui, self.ui_state.field_error(FormField::TokenName));
            ui.add_space(6.0);

            ui.label("Issuer's ETH Address");
            changed |= ui::address_input(ui, &mut self.ui_state.draft.owner).changed();
            ui::field_error(ui, self.ui_state.field_error(FormField::Owner));
            ui.add_space(10.0);

            if changed {
                if let Err(e) = self.bridge.set_form_values(self.ui_state.draft.clone()) {
                    self.ui_state.set_error(e.to_string());
                }
            }

            let busy = page
                .transaction
                .as_ref()
                .is_some_and(TickerTransaction::is_in_flight);
            let response = ui.add_enabled_ui(!busy, |ui| ui::primary_button(ui, "Reserve Ticker")).inner;
            if response.clicked() && self.ui_state.validate_draft() {
                submit = Some(ReservationCommand::Submit);
            }
        });

        if let Some(tx) = page.transaction.as_ref() {
            ui::section_header(ui, "Transaction");
            render_transaction(ui, tx);
        }

        submit
    }

    fn render_success_route(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(10.0);
            ui::styled_heading(ui, "Your Token Symbol Has Been Reserved");
            ui.add_space(10.0);
            match self.reserved.as_ref() {
                Some(tx) => {
                    ui.label(format!(
                        "{} is now reserved for your organization.",
                        tx.ticker
                    ));
                    if let Some(hash) = tx.hash {
                        let hash = hash.to_string();
                        ui::copyable_hash(ui, &hash);
                        let network = self
                            .bridge
                            .account()
                            .snapshot()
                            .map(|s| s.network_name)
                            .ok();
                        if let Some(url) = network.and_then(|n| ui::explorer_tx_url(&n, &hash)) {
                            if ui.link("View on block explorer").clicked() {
                                ui::open_url_new_tab(&url);
                            }
                        }
                    }
                }
                None => {
                    ui.label("The reservation transaction has been confirmed.");
                }
            }
            ui.add_space(20.0);
            let build = format!("build {} ({})", env!("GIT_HASH"), env!("BUILD_TIME"));
            ui.label(egui::RichText::new(build).small().weak());
        });
    }
}

fn render_transaction(ui: &mut egui::Ui, tx: &TickerTransaction) {
    match tx.status {
        TransactionStatus::Pending => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Reserving {}...", tx.ticker));
            });
        }
        TransactionStatus::Submitted => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(format!("Waiting for {} to be mined", tx.ticker));
            });
            if let Some(hash) = tx.hash {
                ui::copyable_hash(ui, &hash.to_string());
            }
        }
        TransactionStatus::Confirmed => ui::success_message(ui, &format!("{} reserved", tx.ticker)),
        TransactionStatus::Failed => ui::error_message(
            ui,
            tx.error.as_deref().unwrap_or("Ticker reservation failed"),
        ),
    }
}
