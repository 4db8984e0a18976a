// ABOUTME: Integration tests for the future impact simulator
// ABOUTME: Covers yearly projection, tree equivalents, zero clamping, and absent savings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::assert_close;
use ecolens_server::errors::ErrorCode;
use ecolens_server::footprint::{impact_band, simulate_impact};
use ecolens_server::models::ImprovementItem;

#[test]
fn test_reference_simulation() {
    let improvements = [ImprovementItem::saving(100.0), ImprovementItem::saving(50.0)];
    let result = simulate_impact(454.0, &improvements).unwrap();

    assert_close(result.current.monthly, 454.0);
    assert_close(result.current.yearly, 5448.0);
    assert_eq!(result.current.trees, 260);

    assert_close(result.improved.monthly, 304.0);
    assert_close(result.improved.yearly, 3648.0);
    assert_eq!(result.improved.trees, 174);

    assert_close(result.savings.monthly, 150.0);
    assert_close(result.savings.yearly, 1800.0);
    assert_eq!(result.savings.trees, 86);
}

#[test]
fn test_improved_footprint_is_clamped_at_zero() {
    let result = simulate_impact(50.0, &[ImprovementItem::saving(200.0)]).unwrap();

    assert_close(result.improved.monthly, 0.0);
    assert_close(result.improved.yearly, 0.0);
    assert_eq!(result.improved.trees, 0);

    assert_close(result.savings.monthly, 200.0);
    assert_eq!(result.savings.trees, 115);
    assert_eq!(result.current.trees, 29);
}

#[test]
fn test_savings_trees_are_computed_independently() {
    let result = simulate_impact(3.0, &[ImprovementItem::saving(1.0)]).unwrap();

    assert_eq!(result.current.trees, 2);
    assert_eq!(result.improved.trees, 2);
    assert_eq!(result.savings.trees, 1);
    assert_ne!(
        result.savings.trees,
        result.current.trees - result.improved.trees
    );
}

#[test]
fn test_absent_savings_count_as_zero() {
    let improvements = [
        ImprovementItem::default(),
        ImprovementItem::saving(20.0),
        ImprovementItem::default(),
    ];
    let result = simulate_impact(100.0, &improvements).unwrap();
    assert_close(result.savings.monthly, 20.0);
    assert_close(result.improved.monthly, 80.0);
}

#[test]
fn test_no_improvements_keeps_baseline() {
    let result = simulate_impact(120.0, &[]).unwrap();
    assert_eq!(result.current, result.improved);
    assert_close(result.savings.monthly, 0.0);
    assert_eq!(result.savings.trees, 0);
}

#[test]
fn test_tree_count_rounds_up() {
    assert_eq!(impact_band(1.75).trees, 1);
    assert_eq!(impact_band(1.76).trees, 2);
    assert_eq!(impact_band(0.0).trees, 0);
}

#[test]
fn test_negative_values_are_rejected() {
    let err = simulate_impact(-1.0, &[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("currentFootprint"));

    let err = simulate_impact(10.0, &[ImprovementItem::saving(5.0), ImprovementItem::saving(-2.0)])
        .unwrap_err();
    assert!(err.message.contains("improvements[1].potentialSavings"));
}

#[test]
fn test_overflowing_projections_are_rejected() {
    let err = simulate_impact(1e308, &[]).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.starts_with("current yearly projection"));

    let err = simulate_impact(
        100.0,
        &[ImprovementItem::saving(1e308), ImprovementItem::saving(1e308)],
    )
    .unwrap_err();
    assert!(err.message.starts_with("savings yearly projection"));
}

#[test]
fn test_simulation_is_idempotent() {
    let improvements = [ImprovementItem::saving(12.5)];
    assert_eq!(
        simulate_impact(200.0, &improvements).unwrap(),
        simulate_impact(200.0, &improvements).unwrap()
    );
}

#[test]
fn test_improvements_deserialize_with_missing_savings() {
    let items: Vec<ImprovementItem> =
        serde_json::from_value(serde_json::json!([{ "potentialSavings": 5 }, {}])).unwrap();
    assert_eq!(items[0].potential_savings, Some(5.0));
    assert_eq!(items[1].potential_savings, None);
}
