//! UI helper components

use eframe::egui;
use poly_ticker_core::{ButtonKind, DialogIntent, DialogView, NetworkName};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(91, 107, 255);
const WARNING_RED: egui::Color32 = egui::Color32::from_rgb(231, 29, 50);

/// Block explorer URL for a transaction on one of the supported networks
pub fn explorer_tx_url(network: &NetworkName, tx_hash: &str) -> Option<String> {
    let base = if network.is_mainnet() {
        "https://etherscan.io"
    } else if network.is_kovan() {
        "https://kovan.etherscan.io"
    } else {
        return None;
    };
    Some(format!("{base}/tx/{tx_hash}"))
}

/// Open URL in the system browser
pub fn open_url_new_tab(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!("failed to open {url}: {e}");
    }
}

/// Copy to clipboard
pub fn copy_to_clipboard(text: &str) {
    if let Ok(mut clipboard) = arboard::Clipboard::new() {
        let _ = clipboard.set_text(text);
    }
}

/// Styled heading with accent color
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).color(ACCENT));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.label(egui::RichText::new(text).strong().size(14.0));
    ui.separator();
}

/// Create a styled text edit for address input
pub fn address_input(ui: &mut egui::Ui, value: &mut String) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text("0x...")
            .desired_width(400.0)
            .font(egui::TextStyle::Monospace),
    )
}

pub fn text_input(ui: &mut egui::Ui, value: &mut String, hint: &str) -> egui::Response {
    ui.add(
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(400.0),
    )
}

/// Inline validation message under a form field
pub fn field_error(ui: &mut egui::Ui, message: Option<&str>) {
    if let Some(message) = message {
        ui.label(
            egui::RichText::new(message)
                .small()
                .color(egui::Color32::from_rgb(220, 80, 80)),
        );
    }
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 80, 80)));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

/// Display a hash value with copy button
pub fn copyable_hash(ui: &mut egui::Ui, hash: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(hash).monospace());
        if ui
            .small_button("📋")
            .on_hover_text("Copy to clipboard")
            .clicked()
        {
            copy_to_clipboard(hash);
        }
    });
}

/// Primary action button - accent colored, prominent
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(130.0, 34.0))
        .fill(ACCENT);
    ui.add(btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 34.0));
    ui.add(btn)
}

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, add_contents);
}

/// Draw a dialog from the view model as a centered window.
/// Returns the intent of the button pressed this frame.
pub fn dialog(ctx: &egui::Context, view: &DialogView) -> Option<DialogIntent> {
    let mut pressed = None;
    egui::Window::new(egui::RichText::new(format!("⚠ {}", view.title)).color(WARNING_RED))
        .id(egui::Id::new(("dialog", format!("{:?}", view.kind))))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .default_width(460.0)
        .show(ctx, |ui| {
            ui.label(egui::RichText::new(&view.label).small().weak());
            ui.add_space(6.0);
            for paragraph in &view.paragraphs {
                ui.label(paragraph);
                ui.add_space(4.0);
            }
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                for button in &view.buttons {
                    let response = match button.kind {
                        ButtonKind::Primary => primary_button(ui, &button.label),
                        ButtonKind::Secondary => secondary_button(ui, &button.label),
                    };
                    if response.clicked() {
                        pressed = Some(button.intent);
                    }
                }
            });
        });
    pressed
}
