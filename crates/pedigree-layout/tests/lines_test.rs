use pedigree_core::{Graph, Line, Record, ViewConfig, build};
use pedigree_layout::{LayoutOptions, arrange, derive_lines, layout};
use serde_json::json;

fn measured(record: &Record, id: &str, config: ViewConfig) -> Graph {
    let mut g = build(record, id, &config).unwrap();
    for c in g.cards_mut() {
        c.width = 80.0;
        c.height = 30.0;
    }
    for a in g.ancestors_mut() {
        a.width = 50.0;
        a.height = 20.0;
    }
    g
}

#[test]
fn line_control_points_leave_and_arrive_vertically() {
    let line = Line::new(10.0, 20.0, 70.0, 90.0);
    assert_eq!(line.control_points(), ((10.0, 90.0), (70.0, 20.0)));
    assert_eq!(line.to_svg_path(), "M10,20 C10,90 70,20 70,90");
}

#[test]
fn derive_lines_links_the_top_chain_to_its_single_child() {
    let r = Record::from_json_value(&json!({
        "persons": [
            { "id": "C", "sex": "M" },
            { "id": "P", "sex": "M" },
            { "id": "M", "sex": "F" }
        ],
        "families": [{ "id": "F", "husband": "P", "wife": "M", "children": ["C"] }]
    }))
    .unwrap();
    let mut g = measured(&r, "C", ViewConfig::new(1, 1).unwrap());
    arrange(&mut g, &LayoutOptions::default()).unwrap();

    assert_eq!(derive_lines(&g), vec![Line::new(55.0, 20.0, 55.0, 60.0)]);
}

#[test]
fn derive_lines_fans_out_from_a_couple_to_each_child() {
    let r = Record::from_json_value(&json!({
        "persons": [
            { "id": "H", "sex": "M" },
            { "id": "W", "sex": "F" },
            { "id": "S", "sex": "M" },
            { "id": "D", "sex": "F" }
        ],
        "families": [{ "id": "F", "husband": "H", "wife": "W", "children": ["S", "D"] }]
    }))
    .unwrap();
    let mut g = measured(&r, "H", ViewConfig::new(1, 0).unwrap());
    arrange(&mut g, &LayoutOptions::default()).unwrap();

    assert_eq!(
        derive_lines(&g),
        vec![
            Line::new(90.0, 30.0, 40.0, 70.0),
            Line::new(90.0, 30.0, 140.0, 70.0),
        ]
    );
}

#[test]
fn derive_lines_connects_nested_chains_to_their_owner() {
    let r = Record::from_json_value(&json!({
        "persons": [
            { "id": "H", "sex": "M" },
            { "id": "W", "sex": "F" },
            { "id": "WF", "sex": "M" },
            { "id": "WM", "sex": "F" }
        ],
        "families": [
            { "id": "F", "husband": "H", "wife": "W" },
            { "id": "G", "husband": "WF", "wife": "WM", "children": ["W"] }
        ]
    }))
    .unwrap();
    let mut g = measured(&r, "H", ViewConfig::new(0, 1).unwrap());
    arrange(&mut g, &LayoutOptions::default()).unwrap();

    assert_eq!(derive_lines(&g), vec![Line::new(150.0, 20.0, 150.0, 32.0)]);
}

#[test]
fn derive_lines_counts_one_line_per_edge() {
    let r = Record::from_json_value(&json!({
        "persons": [
            { "id": "I1", "sex": "M" },
            { "id": "I2", "sex": "M" },
            { "id": "I3", "sex": "F" },
            { "id": "I4", "sex": "F" },
            { "id": "I5", "sex": "M" },
            { "id": "I7", "sex": "F" },
            { "id": "I8", "sex": "M" },
            { "id": "I9", "sex": "F" }
        ],
        "families": [
            { "id": "F1", "husband": "I2", "wife": "I3", "children": ["I1", "I7"] },
            { "id": "F2", "husband": "I1", "wife": "I4", "children": ["I5"] },
            { "id": "F3", "husband": "I8", "wife": "I9", "children": ["I2"] }
        ]
    }))
    .unwrap();
    let mut g = measured(&r, "I1", ViewConfig::new(1, 2).unwrap());
    arrange(&mut g, &LayoutOptions::default()).unwrap();
    let lines = derive_lines(&g);

    // I1 and I7 below the top chain, I5 below I1 + I4, grandparents above I2.
    assert_eq!(lines.len(), 4);
    let grandparents = g.ancestor(g.ancestors()[0].id).parents.unwrap();
    let chain = g.chain(grandparents);
    let father = &g.ancestors()[0];
    assert!(lines.contains(&Line::new(
        chain.center_x(),
        chain.y + chain.height,
        father.center_x(),
        father.y
    )));
}

#[test]
fn layout_stores_fresh_lines_on_the_graph() {
    let r = Record::from_json_value(&json!({
        "persons": [{ "id": "C" }, { "id": "P", "sex": "M" }],
        "families": [{ "id": "F", "husband": "P", "children": ["C"] }]
    }))
    .unwrap();
    let mut g = measured(&r, "C", ViewConfig::default());
    g.set_lines(vec![Line::new(0.0, 0.0, 1.0, 1.0)]);
    layout(&mut g, &LayoutOptions::default()).unwrap();

    assert_eq!(g.lines(), derive_lines(&g).as_slice());
    assert_eq!(g.lines().len(), 1);
}
