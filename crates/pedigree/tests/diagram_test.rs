use pedigree::layout::LayoutOptions;
use pedigree::render::{CardStyle, DeterministicTextMeasurer};
use pedigree::{
    AncestorId, CardId, Diagram, Error, HeadlessError, Record, ViewConfig, render_view,
};
use serde_json::json;

fn record() -> Record {
    Record::from_json_value(&json!({
        "persons": [
            { "id": "I1", "name": "John /Smith/", "sex": "M" },
            { "id": "I2", "name": "Robert /Smith/", "sex": "M" },
            { "id": "I3", "name": "Mary /Jones/", "sex": "F" },
            { "id": "I4", "name": "Anna /Berg/", "sex": "F" },
            { "id": "I5", "name": "Paul /Smith/", "sex": "M" },
            { "id": "I7", "name": "Lucy /Smith/", "sex": "F" },
            { "id": "I8", "name": "Adam /Smith/", "sex": "M" },
            { "id": "I9", "name": "Ruth /Gray/", "sex": "F" }
        ],
        "families": [
            { "id": "F1", "husband": "I2", "wife": "I3", "children": ["I1", "I7"] },
            { "id": "F2", "husband": "I1", "wife": "I4", "children": ["I5"] },
            { "id": "F3", "husband": "I8", "wife": "I9", "children": ["I2"] }
        ]
    }))
    .unwrap()
}

fn coordinates(d: &Diagram) -> Vec<(f64, f64)> {
    let g = d.graph().unwrap();
    g.cards()
        .iter()
        .map(|c| (c.x, c.y))
        .chain(g.ancestors().iter().map(|a| (a.x, a.y)))
        .collect()
}

#[test]
fn render_view_runs_the_whole_pipeline() {
    let r = record();
    let g = render_view(
        &r,
        "I1",
        &ViewConfig::default(),
        &LayoutOptions::default(),
        &DeterministicTextMeasurer::default(),
        &CardStyle::default(),
    )
    .unwrap();

    assert_eq!(g.start_id(), "I1");
    assert!(g.width > 0.0 && g.height > 0.0);
    assert!(g.cards().iter().all(|c| c.width > 0.0 && c.height > 0.0));
    // Top chain to I1 and I7, I1 + I4 to I5, grandparents above I2.
    assert_eq!(g.lines().len(), 4);
}

#[test]
fn diagram_starts_without_a_view() {
    let d = Diagram::new(record());
    assert!(d.graph().is_none());
    assert_eq!(d.fulcrum_id(), None);
    assert!(d.snapshot().is_none());
}

#[test]
fn start_from_replaces_the_view() {
    let mut d = Diagram::new(record());
    d.start_from("I1").unwrap();
    assert_eq!(d.fulcrum_id(), Some("I1"));

    let g = d.start_from("I2").unwrap();
    assert_eq!(g.start_id(), "I2");
    assert!(g.primary_card("I2").is_some());
    assert_eq!(d.fulcrum_id(), Some("I2"));
}

#[test]
fn start_from_an_unknown_person_keeps_the_current_view() {
    let mut d = Diagram::new(record());
    d.start_from("I1").unwrap();
    let before = coordinates(&d);
    let size = d.graph().map(|g| (g.width, g.height));

    let err = d.start_from("I99").unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        HeadlessError::Record(Error::NotFound { ref id }) if id == "I99"
    ));
    assert_eq!(err.to_string(), "Can't find a person with id: I99");

    assert_eq!(d.fulcrum_id(), Some("I1"));
    assert_eq!(coordinates(&d), before);
    assert_eq!(d.graph().map(|g| (g.width, g.height)), size);
}

#[test]
fn invalid_options_keep_the_current_view() {
    let mut d = Diagram::new(record());
    d.start_from("I1").unwrap();
    let before = coordinates(&d);

    d.layout.generation_gap = f64::NAN;
    let err = d.start_from("I5").unwrap_err();
    assert!(matches!(err, HeadlessError::Layout(_)));
    assert_eq!(d.fulcrum_id(), Some("I1"));
    assert_eq!(coordinates(&d), before);
}

#[test]
fn selecting_an_ancestor_re_centers_on_that_person() {
    let mut d = Diagram::new(record());
    let grandfather = d
        .start_from("I1")
        .unwrap()
        .ancestors()
        .iter()
        .find(|a| a.ancestry == 4)
        .map(|a| a.id)
        .unwrap();

    let g = d.select_ancestor(grandfather).unwrap();
    assert_eq!(g.start_id(), "I8");
}

#[test]
fn selecting_a_card_re_centers_on_that_person() {
    let mut d = Diagram::new(record());
    let wife = d
        .start_from("I1")
        .unwrap()
        .cards_of("I4")
        .next()
        .map(|c| c.id)
        .unwrap();

    d.select_card(wife).unwrap();
    assert_eq!(d.fulcrum_id(), Some("I4"));
}

#[test]
fn selecting_a_card_outside_the_view_is_not_found() {
    let record = Record::from_json_value(&json!({
        "persons": [
            { "id": "I1", "name": "John /Smith/", "sex": "M" },
            { "id": "", "name": "Nameless", "sex": "F" }
        ]
    }))
    .unwrap();
    let mut d = Diagram::new(record);
    d.start_from("I1").unwrap();
    let before = coordinates(&d);

    let err = d.select_card(CardId(999)).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        HeadlessError::Record(Error::NotFound { ref id }) if id == "card 999"
    ));
    assert_eq!(d.fulcrum_id(), Some("I1"));
    assert_eq!(coordinates(&d), before);
}

#[test]
fn selecting_an_ancestor_outside_the_view_is_not_found() {
    let mut d = Diagram::new(record()).with_config(ViewConfig::new(1, 1).unwrap());
    let err = d.select_ancestor(AncestorId(0)).unwrap_err();
    assert!(matches!(
        err,
        HeadlessError::Record(Error::NotFound { ref id }) if id == "ancestor 0"
    ));
    assert!(d.graph().is_none());

    let shown = d.start_from("I1").unwrap().ancestors().len();
    let err = d.select_ancestor(AncestorId(shown)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), format!("Can't find a person with id: ancestor {shown}"));
    assert_eq!(d.fulcrum_id(), Some("I1"));
}

#[test]
fn refresh_picks_up_a_new_configuration() {
    let mut d = Diagram::new(record());
    assert!(d.refresh().unwrap().is_none());

    d.start_from("I1").unwrap();
    assert_eq!(d.graph().unwrap().ancestors().len(), 4);

    d.config = ViewConfig::new(1, 1).unwrap();
    let g = d.refresh().unwrap().unwrap();
    assert_eq!(g.start_id(), "I1");
    assert_eq!(g.ancestors().len(), 2);
}

#[test]
fn snapshot_describes_the_current_view() {
    let mut d = Diagram::new(record()).with_config(ViewConfig::new(0, 1).unwrap());
    d.start_from("I1").unwrap();

    let snapshot = d.snapshot().unwrap();
    assert_eq!(snapshot.fulcrum, "I1");
    assert_eq!(snapshot.ancestors.len(), 2);
    assert!(snapshot.cards.iter().any(|c| c.fulcrum && c.label == "John Smith"));
    assert!(snapshot.to_json_pretty().unwrap().contains("\"path\""));
}
