//! Unit tests for keyed record reading.

use super::*;

mod keyed_records_tests {
    use super::*;

    #[test]
    fn keeps_first_seen_order() {
        let mut records = KeyedRecords::new();
        records.insert("B".to_string(), 1);
        records.insert("A".to_string(), 2);
        records.insert("C".to_string(), 3);

        let ids: Vec<&str> = records.ids().collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn overwrite_keeps_position_and_reports_duplicate() {
        let mut records = KeyedRecords::new();
        assert!(!records.insert("A".to_string(), 1));
        assert!(!records.insert("B".to_string(), 2));
        assert!(records.insert("A".to_string(), 3));

        let entries: Vec<(&str, &i32)> = records.iter().collect();
        assert_eq!(entries, vec![("A", &3), ("B", &2)]);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn lookup_of_unknown_id() {
        let records: KeyedRecords<i32> = KeyedRecords::new();
        assert!(records.get("missing").is_none());
        assert!(!records.contains("missing"));
        assert!(records.is_empty());
    }
}

mod read_keyed_tests {
    use super::*;

    fn first_column(columns: &[&str]) -> std::result::Result<String, FieldError> {
        columns
            .first()
            .map(|c| c.to_string())
            .ok_or(FieldError::MissingField("value"))
    }

    #[test]
    fn skips_blank_lines() {
        let content = "A,1\n\nB,2\n   \n , \t\nC,3\n";
        let records = read_keyed(content.as_bytes(), "test", first_column).unwrap();
        let ids: Vec<&str> = records.ids().collect();
        assert_eq!(ids, vec!["A", "B", "C"]);
    }

    #[test]
    fn double_quotes_are_plain_characters() {
        let content = "A,\"Acme\nB,Acme, Inc\"\nC,\"Sony\"\n";
        let records = read_keyed(content.as_bytes(), "test", first_column).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records.get("A").map(String::as_str), Some("\"Acme"));
        assert_eq!(records.get("B").map(String::as_str), Some("Acme"));
        assert_eq!(records.get("C").map(String::as_str), Some("\"Sony\""));
    }

    #[test]
    fn empty_id_is_malformed() {
        let content = "A,1\n ,2\n";
        let err = read_keyed(content.as_bytes(), "test", first_column).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::MalformedRecord {
                line: 2,
                reason: FieldError::MissingField("item id"),
                ..
            }
        ));
    }

    #[test]
    fn reports_line_of_failing_row() {
        let content = "A,1\nB,2\nC\n";
        let err = read_keyed(content.as_bytes(), "list.txt", first_column).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed record in list.txt at line 3: missing value field"
        );
    }
}
