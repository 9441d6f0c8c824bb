//! Parsing of timetable exports as produced by the school's spreadsheet tool.

use exitpass_domain::{GroupSpec, SchoolDay, TimetableDocument};

const EXPORT: &str = r#"[
  {
    "id": 7,
    "nombre": "García López, Marta",
    "email": "mgarcia@school.example",
    "horario": [
      {
        "tramo": "Sesión 1",
        "Lunes": {"grupo": "E_1A", "materia": "MAT", "aula": 101},
        "Martes": {"grupo": ["1A", "1B"], "materia": "REF", "aula": "B2"},
        "Miércoles": {},
        "Jueves": null
      },
      {
        "tramo": "Sesión 3 / Sesión 4",
        "Viernes": {"grupo": null, "materia": "GUARDIA"}
      }
    ],
    "observaciones": "ignored"
  },
  {
    "nombre": "Sin Horario",
    "email": null,
    "horario": null
  }
]"#;

#[test]
fn export_parses_with_mixed_field_types() {
    let doc: TimetableDocument = serde_json::from_str(EXPORT).unwrap();
    assert_eq!(doc.len(), 2);

    let marta = &doc[0];
    assert_eq!(marta.teacher_id, "7");
    assert_eq!(marta.schedule.len(), 2);

    let first = &marta.schedule[0];
    let monday = first.class_on(SchoolDay::Monday).unwrap();
    assert_eq!(monday.group, GroupSpec::Single("E_1A".into()));
    assert_eq!(monday.room, "101");

    let tuesday = first.class_on(SchoolDay::Tuesday).unwrap();
    assert_eq!(tuesday.group, GroupSpec::Multiple(vec!["1A".into(), "1B".into()]));

    assert!(first.class_on(SchoolDay::Wednesday).is_none());
    assert!(first.class_on(SchoolDay::Thursday).is_none());
    assert!(marta.schedule[1].class_on(SchoolDay::Friday).is_none());
}

#[test]
fn teacher_without_schedule_or_email_is_kept() {
    let doc: TimetableDocument = serde_json::from_str(EXPORT).unwrap();
    let empty = &doc[1];
    assert!(empty.teacher_id.is_empty());
    assert!(!empty.has_email());
    assert!(empty.schedule.is_empty());
}

#[test]
fn document_survives_a_write_read_cycle() {
    let doc: TimetableDocument = serde_json::from_str(EXPORT).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    assert!(json.contains("\"Miércoles\""));
    let again: TimetableDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(again, doc);
}
