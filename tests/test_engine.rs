//! Integration tests for the size allocation engine.

use sizealloc::core::validate::validate_request;
use sizealloc::{
    compute_allocation, EngineConfig, FilterOptions, FilterSelection, SalesRecord,
    SimulationConfig, SizeAllocError, SizeAllocator, SizeUnit,
};

fn sneaker(color: &str, size: i64, qty: f64) -> SalesRecord {
    SalesRecord::new("Shoes", "Sneakers", color, size, qty)
}

/// Seasonal sneaker sales across two color groups.
fn sample_sales() -> Vec<SalesRecord> {
    let black = [
        (230, 294.0),
        (235, 283.0),
        (240, 722.0),
        (245, 424.0),
        (250, 782.0),
        (255, 335.0),
        (260, 1129.0),
        (265, 968.0),
        (270, 1194.0),
        (275, 234.0),
        (280, 551.0),
    ];
    let white = [
        (230, 410.0),
        (235, 516.0),
        (240, 890.0),
        (245, 682.0),
        (250, 700.0),
    ];

    black
        .iter()
        .map(|&(s, q)| sneaker("Black", s, q))
        .chain(white.iter().map(|&(s, q)| sneaker("White", s, q)))
        .collect()
}

fn assert_closed(shares: impl Iterator<Item = f64>) {
    let sum: f64 = shares.sum();
    assert!((sum - 1.0).abs() < 1e-9, "shares sum to {}", sum);
}

#[test]
fn test_actual_mode_two_sizes() {
    let records = vec![sneaker("Black", 240, 100.0), sneaker("Black", 250, 300.0)];
    let result = compute_allocation(&records, &FilterSelection::all(), None);

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].size_code, 240);
    assert!((result.rows[0].quantity - 100.0).abs() < 1e-12);
    assert!((result.rows[0].share - 0.25).abs() < 1e-12);
    assert_eq!(result.rows[1].size_code, 250);
    assert!((result.rows[1].share - 0.75).abs() < 1e-12);
    assert_eq!(result.dominant.unwrap().size_code, 250);
}

#[test]
fn test_fine_simulation_mirrors_from_reference() {
    // Size 230 only sold in another color group
    let records = vec![
        sneaker("Black", 240, 100.0),
        sneaker("Black", 250, 300.0),
        sneaker("White", 230, 50.0),
    ];
    let filter = FilterSelection::all().with_color_group("Black");
    let sim = SimulationConfig::new(SizeUnit::Fine, 230, 260).unwrap();

    let result = compute_allocation(&records, &filter, Some(&sim));

    let sizes: Vec<_> = result.rows.iter().map(|r| r.size_code).collect();
    assert_eq!(sizes, vec![230, 240, 250]);

    // Reference total is 450, actual total 400
    let row_230 = result.row(230).unwrap();
    assert!((row_230.quantity - 50.0 / 450.0 * 400.0).abs() < 1e-9);
    assert!((row_230.quantity - 44.444).abs() < 1e-3);
    assert!(row_230.is_simulated);
    assert!(!result.row(240).unwrap().is_simulated);
    assert!(!result.row(250).unwrap().is_simulated);

    assert_closed(result.rows.iter().map(|r| r.share));
    let total = 400.0 + 50.0 / 450.0 * 400.0;
    assert!((result.row(250).unwrap().share - 300.0 / total).abs() < 1e-12);
    assert_eq!(result.dominant.unwrap().size_code, 250);
}

#[test]
fn test_coarse_simulation_splits_odd_size() {
    let records = vec![sneaker("Black", 235, 200.0)];
    let sim = SimulationConfig::new(SizeUnit::Coarse, 230, 240).unwrap();

    let result = compute_allocation(&records, &FilterSelection::all(), Some(&sim));

    assert_eq!(result.rows.len(), 2);
    assert_eq!(result.rows[0].size_code, 230);
    assert_eq!(result.rows[1].size_code, 240);
    for row in &result.rows {
        assert!((row.quantity - 100.0).abs() < 1e-12);
        assert!((row.share - 0.5).abs() < 1e-12);
    }
    assert_eq!(result.dominant.unwrap().size_code, 230);
}

#[test]
fn test_empty_records_any_mode() {
    let filters = [
        FilterSelection::all(),
        FilterSelection::new("Shoes", "Sneakers", "Black"),
    ];
    let sims = [
        None,
        Some(SimulationConfig::new(SizeUnit::Fine, 230, 260).unwrap()),
        Some(SimulationConfig::new(SizeUnit::Coarse, 230, 260).unwrap()),
    ];

    for filter in &filters {
        for sim in &sims {
            let result = compute_allocation(&[], filter, sim.as_ref());
            assert!(result.rows.is_empty());
            assert!(result.dominant.is_none());
        }
    }
}

#[test]
fn test_inverted_range_rejected_by_caller() {
    assert_eq!(
        SimulationConfig::new(SizeUnit::Fine, 250, 230),
        Err(SizeAllocError::invalid_range(250, 230))
    );

    // Built by hand, it is still caught before invocation
    let sim = SimulationConfig {
        unit: SizeUnit::Fine,
        min_size: 250,
        max_size: 230,
    };
    let records = sample_sales();
    assert!(validate_request(&records, Some(&sim), &EngineConfig::default()).is_err());

    // and the engine does not swap the bounds into a valid range
    let result = compute_allocation(&records, &FilterSelection::all(), Some(&sim));
    assert!(result.is_empty());
}

#[test]
fn test_unknown_filter_value_yields_empty_result() {
    let result = compute_allocation(
        &sample_sales(),
        &FilterSelection::all().with_category("Hats"),
        None,
    );
    assert!(result.is_empty());
    assert!(result.dominant.is_none());
}

#[test]
fn test_mirroring_baseline_default_is_1000() {
    // Color group with no sales at all: every row comes from the reference
    let records = vec![sneaker("Black", 230, 30.0), sneaker("Black", 240, 70.0)];
    let filter = FilterSelection::all().with_color_group("Red");
    let sim = SimulationConfig::new(SizeUnit::Fine, 230, 240).unwrap();

    let result = compute_allocation(&records, &filter, Some(&sim));

    assert!((result.row(230).unwrap().quantity - 300.0).abs() < 1e-9);
    assert!((result.row(240).unwrap().quantity - 700.0).abs() < 1e-9);
    assert!((result.total_quantity() - 1000.0).abs() < 1e-9);
    assert!(result.rows.iter().all(|r| r.is_simulated));
    assert_closed(result.rows.iter().map(|r| r.share));
}

#[test]
fn test_white_extended_to_full_black_range() {
    let records = sample_sales();
    let filter = FilterSelection::new("Shoes", "Sneakers", "White");
    let sim = SimulationConfig::new(SizeUnit::Fine, 230, 280).unwrap();

    let result = compute_allocation(&records, &filter, Some(&sim));

    assert_eq!(result.rows.len(), 11);
    let simulated: Vec<_> = result
        .rows
        .iter()
        .filter(|r| r.is_simulated)
        .map(|r| r.size_code)
        .collect();
    assert_eq!(simulated, vec![255, 260, 265, 270, 275, 280]);

    // Observed white quantities are untouched
    assert!((result.row(240).unwrap().quantity - 890.0).abs() < 1e-9);
    assert_closed(result.rows.iter().map(|r| r.share));
}

#[test]
fn test_coarse_range_cutoff_drops_outer_halves() {
    let records = sample_sales();
    let filter = FilterSelection::all().with_color_group("Black");
    let sim = SimulationConfig::new(SizeUnit::Coarse, 240, 260).unwrap();

    let result = compute_allocation(&records, &filter, Some(&sim));

    let sizes: Vec<_> = result.rows.iter().map(|r| r.size_code).collect();
    assert_eq!(sizes, vec![240, 250, 260]);

    // 240 = 722 + 283/2 + 424/2
    assert!((result.row(240).unwrap().quantity - (722.0 + 141.5 + 212.0)).abs() < 1e-9);
    // 260 = 1129 + 335/2 + 968/2
    assert!((result.row(260).unwrap().quantity - (1129.0 + 167.5 + 484.0)).abs() < 1e-9);
    assert_eq!(result.dominant.unwrap().size_code, 260);
    assert_closed(result.rows.iter().map(|r| r.share));
}

#[test]
fn test_summary_through_engine() {
    let engine = SizeAllocator::new(EngineConfig::default().with_key_size_share(0.3));
    let records = vec![sneaker("Black", 240, 100.0), sneaker("Black", 250, 300.0)];
    let result = engine.compute(&records, &FilterSelection::all(), None);
    let summary = engine.summarize(&result);

    assert_eq!(summary.size_count, 2);
    assert_eq!(summary.key_sizes, vec![250]);
    assert_eq!(summary.dominant.unwrap().size_code, 250);
}

#[test]
fn test_filter_options_from_sample() {
    let mut records = sample_sales();
    records.push(SalesRecord::new("Apparel", "Tees", "Green", 95, 0.0));

    let options = FilterOptions::from_records(&records);
    assert_eq!(options.categories, vec!["All", "Shoes"]);
    assert_eq!(options.sub_categories, vec!["All", "Sneakers"]);
    assert_eq!(options.color_groups, vec!["All", "Black", "White"]);
}

#[test]
fn test_records_deserialize_from_dashboard_columns() {
    let json = r#"[
        {"CAT": "Shoes", "SUB_CAT": "Sneakers", "ColorRange": "Black", "SIZE_CD": 240, "SALE_QTY_CNS": 100},
        {"category": "Shoes", "sub_category": "Sneakers", "color_group": "Black", "size_code": 250, "quantity_sold": 300}
    ]"#;
    let records: Vec<SalesRecord> = serde_json::from_str(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].color_group, "Black");

    let result = compute_allocation(&records, &FilterSelection::all(), None);
    assert!((result.rows[0].share - 0.25).abs() < 1e-12);
}
