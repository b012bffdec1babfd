//! Unit tests for inventory export.

use super::*;

fn item(
    id: &str,
    manufacturer: &str,
    item_type: &str,
    price: f64,
    date: (i32, u32, u32),
    damaged: bool,
) -> InventoryItem {
    InventoryItem {
        item_id: id.to_string(),
        manufacturer: manufacturer.to_string(),
        item_type: item_type.to_string(),
        price,
        service_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        damaged,
    }
}

fn sample_inventory() -> Inventory {
    Inventory::from_items(vec![
        item("E1003", "Samsung", "tv", 800.0, (2025, 1, 1), false),
        item("E1001", "Samsung", "Fridge", 450.0, (2023, 5, 10), true),
        item("E1002", "LG", "Fridge", 500.0, (2022, 8, 15), false),
        item("E1005", "Apple", "Laptop", 1200.0, (2024, 2, 1), true),
        item("E1004", "Dell", "laptop", 900.0, (2019, 12, 24), true),
    ])
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

mod full_inventory_tests {
    use super::*;

    #[test]
    fn sorted_by_manufacturer_keeps_ties_in_join_order() {
        let inventory = sample_inventory();
        let ids: Vec<&str> = sorted_by_manufacturer(&inventory)
            .iter()
            .map(|i| i.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["E1005", "E1004", "E1002", "E1003", "E1001"]);
    }

    #[test]
    fn manufacturer_order_ignores_case() {
        let inventory = Inventory::from_items(vec![
            item("E1", "Sony", "TV", 1.0, (2024, 1, 1), false),
            item("E2", "apple", "Laptop", 2.0, (2024, 1, 1), false),
            item("E3", "APPLE", "Phone", 3.0, (2024, 1, 1), false),
            item("E4", "lg", "TV", 4.0, (2024, 1, 1), false),
        ]);
        let ids: Vec<&str> = sorted_by_manufacturer(&inventory)
            .iter()
            .map(|i| i.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["E2", "E3", "E4", "E1"]);
    }

    #[test]
    fn writes_export_lines() {
        let mut buffer = Vec::new();
        let count = write_full_inventory(&sample_inventory(), &mut buffer).unwrap();

        assert_eq!(count, 5);
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "E1005,Apple,Laptop,1200.0,02/01/2024,damaged\n\
             E1004,Dell,laptop,900.0,12/24/2019,damaged\n\
             E1002,LG,Fridge,500.0,08/15/2022,\n\
             E1003,Samsung,tv,800.0,01/01/2025,\n\
             E1001,Samsung,Fridge,450.0,05/10/2023,damaged\n"
        );
    }

    #[test]
    fn empty_inventory_writes_nothing() {
        let mut buffer = Vec::new();
        let count = write_full_inventory(&Inventory::default(), &mut buffer).unwrap();
        assert_eq!(count, 0);
        assert!(buffer.is_empty());
    }

    #[test]
    fn export_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FULL_INVENTORY_FILE);
        let inventory = sample_inventory();

        export_full_inventory(&inventory, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        export_full_inventory(&inventory, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_eq!(first, second);
    }
}

mod report_tests {
    use super::*;

    #[test]
    fn item_type_file_names() {
        assert_eq!(item_type_file_name("laptop"), "LaptopInventory.txt");
        assert_eq!(item_type_file_name("TV"), "TVInventory.txt");
        assert_eq!(item_type_file_name(""), "Inventory.txt");
    }

    #[test]
    fn groups_types_ignoring_case_and_sorts_by_id() {
        let inventory = sample_inventory();
        let groups = group_by_item_type(&inventory);

        let summary: Vec<(String, Vec<String>)> = groups
            .into_iter()
            .map(|(t, items)| (t, items.iter().map(|i| i.item_id.clone()).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("tv".to_string(), vec!["E1003".to_string()]),
                ("Fridge".to_string(), vec!["E1001".to_string(), "E1002".to_string()]),
                ("Laptop".to_string(), vec!["E1004".to_string(), "E1005".to_string()]),
            ]
        );
    }

    #[test]
    fn past_service_date_oldest_first() {
        let inventory = sample_inventory();
        let ids: Vec<&str> = past_service_date(&inventory, today())
            .iter()
            .map(|i| i.item_id.as_str())
            .collect();
        assert_eq!(ids, vec!["E1004", "E1002", "E1001", "E1005"]);
    }

    #[test]
    fn damaged_most_expensive_first() {
        let inventory = sample_inventory();
        let lines: Vec<String> = damaged(&inventory).into_iter().map(damaged_line).collect();
        assert_eq!(
            lines,
            vec![
                "E1005,Apple,Laptop,1200.0,02/01/2024",
                "E1004,Dell,laptop,900.0,12/24/2019",
                "E1001,Samsung,Fridge,450.0,05/10/2023",
            ]
        );
    }

    #[test]
    fn writes_all_report_files() {
        let dir = tempfile::tempdir().unwrap();
        let written = export_reports(&sample_inventory(), dir.path(), today()).unwrap();

        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "TvInventory.txt",
                "FridgeInventory.txt",
                "LaptopInventory.txt",
                PAST_SERVICE_DATE_FILE,
                DAMAGED_FILE,
            ]
        );

        assert_eq!(
            read_lines(&dir.path().join("LaptopInventory.txt")),
            vec![
                "E1004,Dell,900.0,12/24/2019,damaged",
                "E1005,Apple,1200.0,02/01/2024,damaged",
            ]
        );
        assert_eq!(
            read_lines(&dir.path().join(PAST_SERVICE_DATE_FILE))[0],
            "E1004,Dell,laptop,900.0,12/24/2019,damaged"
        );
        assert_eq!(read_lines(&dir.path().join(DAMAGED_FILE)).len(), 3);
    }
}
