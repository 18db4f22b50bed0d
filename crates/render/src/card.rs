//! Product card fragments
//!
//! Pure string builders for the catalog grid: one card per configuration
//! (model-code heading, family subtitle, labeled attribute rows, a
//! request-quote call-to-action) plus the grid concatenation. No DOM
//! access; a presentation port decides where the markup lands.

use ptcat_core::Configuration;
use std::fmt::Write;

/// Marketing name shown under every model code
pub const FAMILY_NAME: &str = "Rosemount 2051C Pressure Transmitter";

/// Render one product card
pub fn product_card(config: &Configuration) -> String {
    let model_code = config.model_code();
    let mut html = String::with_capacity(1536);

    let _ = write!(
        html,
        r#"<div class="product-card bg-white rounded-lg shadow-md p-6 hover:shadow-xl transition-shadow duration-300" data-model="{model_code}">
    <div class="product-header mb-4">
        <h3 class="text-xl font-bold text-teal-600">{model_code}</h3>
        <p class="text-sm text-gray-500">{FAMILY_NAME}</p>
    </div>
    <div class="product-specs mb-4 space-y-2 text-sm">
"#
    );

    let rows = [
        ("Type", config.measurement.label()),
        ("Range", config.range.label()),
        ("Output", config.output.label()),
        ("Flange", config.flange.label()),
        ("Diaphragm", config.diaphragm.label()),
        ("O-Ring", config.oring.label()),
        ("Fill", config.fill.label()),
        ("Housing", config.housing.label()),
    ];
    for (name, label) in rows {
        let _ = writeln!(
            html,
            r#"        <div><span class="font-semibold">{name}:</span> {label}</div>"#
        );
    }

    let _ = write!(
        html,
        r#"    </div>
    <button onclick="openInquiryForm('{model_code}')" class="w-full bg-teal-500 hover:bg-teal-600 text-white font-semibold py-2 px-4 rounded transition-colors duration-200">Request Quote</button>
    <input type="hidden" class="email-verify" value="" data-verify="bot-trap">
</div>
"#
    );

    html
}

/// Render the full grid for one page window
pub fn product_grid(configs: &[Configuration]) -> String {
    configs.iter().map(product_card).collect()
}
