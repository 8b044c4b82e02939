use crate::*;
use serde_json::json;


/// Three generations around John Smith (`I1`).
///
/// - parents `I2` + `I3` (family `F1`), sister `I7`
/// - paternal grandparents `I8` + `I9` (`F3`)
/// - wife `I4` whose parents are `I10` + `I11` (`F4`)
/// - children `I5`, `I6`; `I5` married `I12` and has `I13`
pub(crate) fn smith_record() -> Record {
    Record::from_json_value(&json!({
        "persons": [
            { "id": "I1", "name": "John /Smith/", "sex": "M" },
            { "id": "I2", "name": "Robert /Smith/", "sex": "M", "death": "1950" },
            { "id": "I3", "name": "Mary /Jones/", "sex": "F" },
            { "id": "I4", "name": "Anna /Berg/", "sex": "F" },
            { "id": "I5", "name": "Paul /Smith/", "sex": "M" },
            { "id": "I6", "name": "Eve /Smith/", "sex": "F" },
            { "id": "I7", "name": "Lucy /Smith/", "sex": "F" },
            { "id": "I8", "name": "Adam /Smith/", "sex": "M", "dead": true },
            { "id": "I9", "name": "Ruth /Gray/", "sex": "F", "dead": true },
            { "id": "I10", "name": "Karl /Berg/", "sex": "M" },
            { "id": "I11", "name": "Ida /Lund/", "sex": "F" },
            { "id": "I12", "name": "Zoe /Hart/", "sex": "F" },
            { "id": "I13", "name": "Tim /Smith/", "sex": "M" }
        ],
        "families": [
            { "id": "F1", "husband": "I2", "wife": "I3", "children": ["I1", "I7"] },
            { "id": "F2", "husband": "I1", "wife": "I4", "marriageDate": "12 MAR 1950", "children": ["I5", "I6"] },
            { "id": "F3", "husband": "I8", "wife": "I9", "children": ["I2"] },
            { "id": "F4", "husband": "I10", "wife": "I11", "children": ["I4"] },
            { "id": "F5", "husband": "I5", "wife": "I12", "children": ["I13"] }
        ]
    }))
    .unwrap()
}

pub(crate) fn config(descent: i64, ancestors: i64) -> ViewConfig {
    ViewConfig::new(descent, ancestors).unwrap()
}

pub(crate) fn ancestor_numbers(graph: &Graph) -> Vec<(String, u64)> {
    graph
        .ancestors()
        .iter()
        .map(|a| (a.person.clone(), a.ancestry))
        .collect()
}
