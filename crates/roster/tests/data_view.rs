//! Behavior of `DataView::render` across phases, search, filters and pages.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use roster::{
    ColumnSpec, DataView, FilterOption, KeyPath, Locale, PageSize, PanelKind, ViewPhase,
    ViewState, DEFAULT_SKELETON_ROWS,
};
use serde_json::{json, Value};

// ============================================================================
// Test helpers
// ============================================================================

fn people() -> Vec<Value> {
    vec![
        json!({"name": "Alice", "role": "ADMIN", "dept": {"name": "Registry"}}),
        json!({"name": "Bob", "role": "STUDENT", "dept": {"name": "Physics"}}),
        json!({"name": "Carla", "role": "STUDENT", "dept": {"name": "Mathematics"}}),
        json!({"name": "Dimitri", "role": "TEACHER", "dept": {"name": "Physics"}}),
        json!({"name": "Eve", "role": "STUDENT", "dept": null}),
    ]
}

fn base_view() -> DataView<Value> {
    DataView::new()
        .column(ColumnSpec::new("name", "Name"))
        .column(ColumnSpec::new("role", "Role"))
        .filter(
            FilterOption::new("role")
                .value("Admin", "ADMIN")
                .value("Student", "STUDENT"),
        )
        .resolve_paths()
}

fn names(grid: &[Vec<String>]) -> Vec<&str> {
    grid.iter().map(|row| row[0].as_str()).collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn search_narrows_to_matching_record() {
    let data = vec![
        json!({"name": "Alice", "role": "ADMIN"}),
        json!({"name": "Bob", "role": "STUDENT"}),
    ];
    let model = base_view().render(&data, &ViewState::new().with_search("ali"));

    assert_eq!(model.phase, ViewPhase::Populated);
    assert_eq!(names(&model.cell_grid()), vec!["Alice"]);
}

#[test]
fn five_records_paginated_by_two() {
    let data = people();
    let view = base_view().paginate(PageSize::new(2).unwrap());

    let sizes: Vec<usize> = (1..=3)
        .map(|page| view.render(&data, &ViewState::new().with_page(page)).rows.len())
        .collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let last = view.render(&data, &ViewState::new().with_page(3));
    assert_eq!(names(&last.cell_grid()), vec!["Eve"]);
    let pagination = last.pagination.unwrap();
    assert_eq!(pagination.total_pages, 3);
    assert!(pagination.has_previous);
    assert!(!pagination.has_next);
}

#[test]
fn role_filter_selects_admin_only() {
    let data = vec![
        json!({"name": "Alice", "role": "ADMIN"}),
        json!({"name": "Bob", "role": "STUDENT"}),
    ];
    let model = base_view().render(&data, &ViewState::new().with_filter("role", "ADMIN"));

    assert_eq!(model.cell_grid(), vec![vec!["Alice", "ADMIN"]]);
    assert_eq!(model.filters[0].selected_label(), "Admin");
}

#[test]
fn empty_source_ignores_search_and_filters() {
    let data: Vec<Value> = Vec::new();
    let state = ViewState::new()
        .with_search("anything")
        .with_filter("role", "ADMIN");
    let model = base_view().render(&data, &state);

    assert_eq!(model.phase, ViewPhase::EmptySource);
    assert_eq!(model.panel.unwrap().kind, PanelKind::NoData);
    assert!(model.rows.is_empty());
}

// ============================================================================
// Phases
// ============================================================================

#[test]
fn nothing_matching_is_empty_after_filter() {
    let data = people();
    let view = base_view();

    let no_results = view.render(&data, &ViewState::new().with_search("zzz"));
    assert_eq!(no_results.phase, ViewPhase::EmptyAfterFilter);

    let no_data = view.render(&[], &ViewState::new());
    let (a, b) = (no_results.panel.unwrap(), no_data.panel.unwrap());
    assert_ne!(a.title, b.title);
    assert_ne!(a.body, b.body);
    assert_ne!(a.icon, b.icon);
}

#[test]
fn page_past_end_is_empty_after_filter() {
    let data = people();
    let view = base_view().paginate(PageSize::new(2).unwrap());
    let model = view.render(&data, &ViewState::new().with_page(9));
    assert_eq!(model.phase, ViewPhase::EmptyAfterFilter);
    assert!(model.pagination.is_none());
}

#[test]
fn loading_shows_skeleton_sized_by_page() {
    let data = people();
    let view = base_view().paginate(PageSize::new(3).unwrap()).loading(true);
    let model = view.render(&data, &ViewState::new());

    assert_eq!(model.phase, ViewPhase::Loading);
    assert!(model.rows.is_empty());
    assert_eq!(model.labels(), vec!["Name", "Role"]);
    let skeleton = model.skeleton.unwrap();
    assert_eq!(skeleton.rows, 3);
    assert_eq!(skeleton.columns, 2);
}

#[test]
fn loading_unpaginated_uses_default_rows_and_skeleton_header() {
    let view = base_view().loading(true).skeleton_header(true);
    let model = view.render(&[], &ViewState::new());

    assert_eq!(model.skeleton.map(|s| s.rows), Some(DEFAULT_SKELETON_ROWS));
    assert!(model.header.iter().all(|h| h.skeleton));
    assert!(model.labels().iter().all(|l| l.chars().all(|c| c == '░')));
}

#[test]
fn load_error_shows_failed_panel() {
    let mut view = base_view();
    view.set_load_error(Some("connection refused".into()));
    let data = people();
    let model = view.render(&data, &ViewState::new());

    assert_eq!(model.phase, ViewPhase::Failed);
    let panel = model.panel.unwrap();
    assert_eq!(panel.kind, PanelKind::Failed);
    assert_eq!(panel.detail.as_deref(), Some("connection refused"));

    view.set_load_error(None);
    view.set_loading(true);
    assert_eq!(view.render(&data, &ViewState::new()).phase, ViewPhase::Loading);
}

// ============================================================================
// Search and filters
// ============================================================================

#[test]
fn search_defaults_to_column_keys() {
    let data = people();
    let view = base_view();
    assert_eq!(
        view.effective_search_keys(),
        vec![KeyPath::new("name"), KeyPath::new("role")]
    );

    // "phys" only appears under dept.name, which is not a column.
    let model = view.render(&data, &ViewState::new().with_search("phys"));
    assert_eq!(model.phase, ViewPhase::EmptyAfterFilter);
}

#[test]
fn explicit_search_keys_restrict_search() {
    let data = people();
    let view = base_view().search_keys(["dept.name"]);
    let model = view.render(&data, &ViewState::new().with_search("PHYS"));
    assert_eq!(names(&model.cell_grid()), vec!["Bob", "Dimitri"]);

    // Names are no longer searched.
    let model = view.render(&data, &ViewState::new().with_search("alice"));
    assert_eq!(model.phase, ViewPhase::EmptyAfterFilter);
}

#[test]
fn search_and_filter_combine() {
    let data = people();
    let state = ViewState::new()
        .with_search("a")
        .with_filter("role", "student");
    let model = base_view().render(&data, &state);
    assert_eq!(names(&model.cell_grid()), vec!["Carla"]);
    assert_eq!(model.matched_items, 1);
    assert_eq!(model.total_items, 5);
}

#[test]
fn filter_controls_lead_with_localized_all() {
    let data = people();
    let view = base_view().locale(Locale::Fr);
    let model = view.render(&data, &ViewState::new());
    let control = &model.filters[0];

    assert_eq!(control.label, "Role");
    let labels: Vec<&str> = control.choices.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Tous", "Admin", "Student"]);
    assert!(control.choices[0].selected);
    assert!(!control.is_active());
}

#[test]
fn filter_on_undeclared_column_uses_key_as_heading() {
    let view = base_view().filter(FilterOption::new("dept.name").value("Physics", "Physics"));
    let data = people();
    let model = view.render(&data, &ViewState::new().with_filter("dept.name", "Physics"));
    assert_eq!(model.filters[1].label, "dept.name");
    assert_eq!(names(&model.cell_grid()), vec!["Bob", "Dimitri"]);
}

// ============================================================================
// Field resolution
// ============================================================================

#[test]
fn column_accessor_wins_over_field_and_paths() {
    let data = people();
    let view = DataView::<Value>::new()
        .column(ColumnSpec::new("name", "Name").get(|row: &Value| {
            row["name"].as_str().unwrap_or_default().to_uppercase()
        }))
        .field("name", |_| "from field".to_string())
        .resolve_paths();

    let model = view.render(&data[..1], &ViewState::new());
    assert_eq!(model.cell_grid(), vec![vec!["ALICE"]]);
    assert_eq!(view.resolve_field(&data[0], &KeyPath::new("name")), "ALICE");
}

#[test]
fn field_accessor_serves_search_and_filters() {
    let data = people();
    let view = DataView::<Value>::new()
        .column(ColumnSpec::new("name", "Name"))
        .field("name", |row| row["name"].as_str().unwrap_or_default().to_string())
        .field("initial", |row| {
            row["name"].as_str().unwrap_or_default().chars().take(1).collect()
        });

    let model = view.render(&data, &ViewState::new().with_filter("initial", "d"));
    assert_eq!(names(&model.cell_grid()), vec!["Dimitri"]);
}

#[test]
fn unresolvable_keys_are_empty() {
    let data = people();
    let without_paths = DataView::<Value>::new().column(ColumnSpec::new("name", "Name"));
    assert!(!without_paths.resolves_paths());
    assert_eq!(without_paths.resolve_field(&data[0], &KeyPath::new("name")), "");

    let with_paths = base_view();
    assert_eq!(with_paths.resolve_field(&data[4], &KeyPath::new("dept.name")), "");
    assert_eq!(with_paths.resolve_field(&data[0], &KeyPath::new("nope.deeper")), "");
}

#[test]
fn renderer_shapes_cells_only() {
    let data = people();
    let view = DataView::<Value>::new()
        .column(ColumnSpec::new("name", "Name"))
        .column(
            ColumnSpec::new("role", "Role")
                .render(|value: &str, _row: &Value| format!("[{}]", value.to_lowercase())),
        )
        .resolve_paths();

    let model = view.render(&data, &ViewState::new().with_filter("role", "admin"));
    assert_eq!(model.cell_grid(), vec![vec!["Alice", "[admin]"]]);

    // Filtering still sees the resolved value, not the rendered one.
    let model = view.render(&data, &ViewState::new().with_search("[admin]"));
    assert_eq!(model.phase, ViewPhase::EmptyAfterFilter);
}

// ============================================================================
// Pagination and show-more
// ============================================================================

#[test]
fn show_more_only_when_unpaginated() {
    let data = people();

    let unpaginated = base_view().show_more("/people").render(&data, &ViewState::new());
    assert_eq!(unpaginated.rows.len(), 5);
    assert!(unpaginated.pagination.is_none());
    assert_eq!(unpaginated.show_more.unwrap().target, "/people");

    let paginated = base_view()
        .show_more("/people")
        .paginate(PageSize::new(2).unwrap())
        .render(&data, &ViewState::new());
    assert!(paginated.show_more.is_none());
    assert!(paginated.pagination.is_some());
}

#[test]
fn pagination_labels_are_localized() {
    let data = people();
    let view = base_view().paginate(PageSize::new(2).unwrap()).locale(Locale::Fr);
    let pagination = view
        .render(&data, &ViewState::new().with_page(2))
        .pagination
        .unwrap();

    assert_eq!(pagination.label, "Page 2 sur 3");
    assert_eq!(pagination.range, Some((3, 4)));
    assert_eq!(pagination.range_label.as_deref(), Some("3-4 sur 5"));
    assert_eq!(pagination.previous_label, "Précédent");
    assert_eq!(pagination.next_label, "Suivant");
}

#[test]
fn filtering_from_a_later_page_returns_to_first() {
    let data = people();
    let view = base_view().paginate(PageSize::new(2).unwrap());
    let state = ViewState::new().with_page(3).with_filter("role", "STUDENT");

    let model = view.render(&data, &state);
    assert_eq!(state.page(), 1);
    assert_eq!(names(&model.cell_grid()), vec!["Bob", "Carla"]);
}

// ============================================================================
// Row activation
// ============================================================================

#[test]
fn activation_fires_handler_with_record() {
    let data = people();
    let clicks = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&clicks);

    let view = base_view().on_row_click(move |row: &Value| {
        assert_eq!(row["name"], "Carla");
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let model = view.render(&data, &ViewState::new().with_search("carla"));
    let row = &model.rows[0];
    assert_eq!(row.index, 2);
    assert!(view.activate(row));
    assert_eq!(clicks.load(Ordering::SeqCst), 1);
}

#[test]
fn activation_without_handler_is_a_no_op() {
    let data = people();
    let view = base_view();
    let model = view.render(&data, &ViewState::new());
    assert!(!view.activate(&model.rows[0]));
}

#[test]
fn json_model_omits_records() {
    let data = people();
    let model = base_view()
        .paginate(PageSize::new(1).unwrap())
        .render(&data, &ViewState::new());
    let json = serde_json::to_value(&model).unwrap();

    assert_eq!(json["phase"], "populated");
    assert_eq!(json["rows"][0], json!({"index": 0, "cells": ["Alice", "ADMIN"]}));
    assert_eq!(json["pagination"]["total_pages"], 5);
}
