//! Filtering and pagination over the real master list
//!
//! Exercises the conjunctive filter semantics and the page-window policy
//! against the fully generated catalog, pinning the exact view sizes the
//! rule math predicts.

use ptcat::{generate, CatalogFilter, Pager};
use ptcat_core::{Housing, Output, Range};
use ptcat_render::{pagination_controls, result_count_label};

fn master() -> Vec<ptcat_core::Configuration> {
    generate()
}

#[test]
fn output_filter_pins_exact_view_sizes() {
    let master = master();
    // Wireless: 60 free combinations x 1 housing x 71 wet-side triples
    assert_eq!(
        CatalogFilter::new()
            .with_output(Output::WirelessHart)
            .apply(&master)
            .len(),
        4_260
    );
    // Foundation Fieldbus: 60 x 8 housings x 71
    assert_eq!(
        CatalogFilter::new()
            .with_output(Output::FoundationFieldbus)
            .apply(&master)
            .len(),
        34_080
    );
}

#[test]
fn filters_are_conjunctive() {
    let master = master();
    let both = CatalogFilter::new()
        .with_output(Output::HartAnalog)
        .with_housing(Housing::SstStandard)
        .apply(&master);
    // HART analog with one fixed housing: 60 free x 71 wet-side
    assert_eq!(both.len(), 4_260);
    assert!(both
        .iter()
        .all(|c| c.output == Output::HartAnalog && c.housing == Housing::SstStandard));
}

#[test]
fn filters_are_order_independent() {
    let master = master();

    let simultaneous = CatalogFilter::new()
        .with_output(Output::HartAnalog)
        .with_housing(Housing::SstStandard)
        .apply(&master);

    let output_first = CatalogFilter::new()
        .with_housing(Housing::SstStandard)
        .apply(&CatalogFilter::new().with_output(Output::HartAnalog).apply(&master));

    let housing_first = CatalogFilter::new()
        .with_output(Output::HartAnalog)
        .apply(&CatalogFilter::new().with_housing(Housing::SstStandard).apply(&master));

    assert_eq!(simultaneous, output_first);
    assert_eq!(simultaneous, housing_first);
}

#[test]
fn search_filter_matches_whole_prefix_case_insensitively() {
    let master = master();
    // Every model code starts with the family prefix.
    assert_eq!(
        CatalogFilter::new().with_search("2051").apply(&master).len(),
        master.len()
    );
    assert_eq!(
        CatalogFilter::new().with_search("2051").apply(&master),
        CatalogFilter::new().with_search("2051".to_lowercase()).apply(&master)
    );
}

#[test]
fn search_and_axis_filters_compose() {
    let master = master();
    let view = CatalogFilter::new()
        .with_search("2051d")
        .with_range(Range::Kpa21000)
        .apply(&master);
    assert!(!view.is_empty());
    assert!(view.iter().all(|c| {
        c.range == Range::Kpa21000 && c.model_code().as_str().starts_with("2051D")
    }));
}

#[test]
fn first_page_of_master_list_shows_first_twenty() {
    let master = master();
    let view = Pager::default().page(&master, 1);
    assert_eq!(view.items, &master[0..20]);
    assert_eq!(
        result_count_label(&view),
        "Showing 1-20 of 166140 configurations"
    );
}

#[test]
fn out_of_range_page_clamps_to_last() {
    let master = master();
    let view = Pager::default().page(&master, 99_999);
    assert_eq!(view.page, 8_307);
    assert_eq!(view.items.len(), 166_140 - 8_306 * 20);
    assert!(view.has_prev());
    assert!(!view.has_next());
}

#[test]
fn filtered_view_renders_consistent_controls() {
    let master = master();
    let view_list = CatalogFilter::new()
        .with_output(Output::WirelessHart)
        .apply(&master);
    // 4,260 items -> 213 pages
    let pager = Pager::default();
    assert_eq!(pager.total_pages(view_list.len()), 213);

    let window = pager.page(&view_list, 213);
    let controls = pagination_controls(&window);
    assert!(controls.contains("Previous"));
    assert!(!controls.contains("Next"));
    assert_eq!(
        result_count_label(&window),
        "Showing 4241-4260 of 4260 configurations"
    );
}

#[test]
fn empty_view_is_harmless() {
    let master = master();
    // Fieldbus output with a polymer housing is ruled out entirely.
    let view = CatalogFilter::new()
        .with_output(Output::FoundationFieldbus)
        .with_housing(Housing::WeatherResistantPolymer)
        .apply(&master);
    assert!(view.is_empty());

    let window = Pager::default().page(&view, 1);
    assert_eq!(window.total_pages, 1);
    assert_eq!(result_count_label(&window), "Showing 1-0 of 0 configurations");
}
