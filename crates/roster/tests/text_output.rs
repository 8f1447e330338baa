//! Text layout of rendered frames.

use insta::assert_snapshot;
use roster::{
    render_output, BorderStyle, ColumnSpec, DataView, FilterOption, Locale, OutputMode, PageSize,
    TextOptions, ViewState,
};
use serde_json::{json, Value};

fn people() -> Vec<Value> {
    vec![
        json!({"name": "Alice", "role": "ADMIN"}),
        json!({"name": "Bob", "role": "STUDENT"}),
        json!({"name": "Carla", "role": "STUDENT"}),
        json!({"name": "Dimitri", "role": "TEACHER"}),
        json!({"name": "Eve", "role": "STUDENT"}),
    ]
}

fn view() -> DataView<Value> {
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

fn text(view: &DataView<Value>, data: &[Value], state: &ViewState) -> String {
    let model = view.render(data, state);
    render_output(&model, OutputMode::Text, &TextOptions::default()).unwrap()
}

#[test]
fn paginated_table_with_footer() {
    let view = view().paginate(PageSize::new(2).unwrap());
    let out = text(&view, &people(), &ViewState::new().with_page(2));
    assert_snapshot!(out, @r"
    Name     Role
    Carla    STUDENT
    Dimitri  TEACHER

    < Previous  Page 2 of 3  Next >  (3-4 of 5)
    ");
}

#[test]
fn filter_summary_and_show_more() {
    let view = view().show_more("/people");
    let state = ViewState::new().with_search("a").with_filter("role", "STUDENT");
    let out = text(&view, &people(), &state);
    assert_snapshot!(out, @r"
    Search: a  Role: Student

    Name   Role
    Carla  STUDENT

    Show more → /people
    ");
}

#[test]
fn no_results_panel() {
    let out = text(&view(), &people(), &ViewState::new().with_search("zzz"));
    assert_snapshot!(out, @r"
    Search: zzz

    ⌕ No results found
    Try adjusting your search or filters.
    ");
}

#[test]
fn no_data_panel() {
    let out = text(&view(), &[], &ViewState::new());
    assert_snapshot!(out, @r"
    ∅ No data available
    There is nothing to show here yet.
    ");
}

#[test]
fn failed_panel_in_french() {
    let view = view().locale(Locale::Fr).load_error("connection refused");
    let out = text(&view, &people(), &ViewState::new());
    assert_snapshot!(out, @r"
    ⚠ Impossible de charger les données
    Une erreur est survenue lors du chargement de cette liste.
    connection refused
    ");
}

#[test]
fn loading_skeleton() {
    let view = view().loading(true).skeleton_rows(2);
    let out = text(&view, &people(), &ViewState::new());
    assert_snapshot!(out, @r"
    Name      Role
    ░░░░░░░░  ░░░░░
    ░░░░░░    ░░░░░░░░

    Loading…
    ");
}

#[test]
fn bordered_table() {
    let data = people();
    let model = view().render(&data[..2], &ViewState::new());
    let options = TextOptions {
        width: 80,
        border: BorderStyle::Light,
    };
    let out = render_output(&model, OutputMode::Text, &options).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "┌───────┬─────────┐");
    assert_eq!(lines[1], "│ Name  │ Role    │");
    assert_eq!(lines[2], "├───────┼─────────┤");
    assert_eq!(lines[3], "│ Alice │ ADMIN   │");
    assert_eq!(lines[5], "└───────┴─────────┘");
}

#[test]
fn term_mode_matches_text_once_styles_are_stripped() {
    let view = view().paginate(PageSize::new(2).unwrap());
    let data = people();
    let model = view.render(&data, &ViewState::new());
    let term = render_output(&model, OutputMode::Term, &TextOptions::default()).unwrap();
    let plain = render_output(&model, OutputMode::Text, &TextOptions::default()).unwrap();
    assert_eq!(console::strip_ansi_codes(&term), plain);
}

#[test]
fn json_mode_serializes_the_model() {
    let view = view().paginate(PageSize::new(2).unwrap());
    let data = people();
    let model = view.render(&data, &ViewState::new().with_filter("role", "ADMIN"));
    let out = render_output(&model, OutputMode::Json, &TextOptions::default()).unwrap();
    let json: Value = serde_json::from_str(&out).unwrap();

    assert_eq!(json["phase"], "populated");
    assert_eq!(json["matched_items"], 1);
    assert_eq!(json["filters"][0]["selected"], "ADMIN");
    assert_eq!(json["rows"][0]["cells"], json!(["Alice", "ADMIN"]));
}
