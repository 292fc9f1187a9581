// JSON Output Module

use crate::error::InventoryError;
use serde::Serialize;

/// Generate JSON output from an inventory or a single parse result
pub fn generate_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, InventoryError> {
    if pretty {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(serde_json::to_string(value)?)
    }
}

/// Write JSON to file
pub fn write_json_file<T: Serialize>(
    value: &T,
    path: &str,
    pretty: bool,
) -> Result<(), InventoryError> {
    let json = generate_json(value, pretty)?;
    std::fs::write(path, json).map_err(|source| InventoryError::FileSystemError {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{HostInventory, Inventory};

    #[test]
    fn test_json_generation() {
        let inventory = Inventory {
            hosts: vec![HostInventory {
                ip: "93.184.216.34".to_string(),
                hostnames: vec!["example.com".to_string()],
                ports: Vec::new(),
            }],
            failures: Vec::new(),
        };

        let json = generate_json(&inventory, false).unwrap();
        assert!(json.contains("example.com"));
        assert!(!json.contains('\n'));

        let pretty_json = generate_json(&inventory, true).unwrap();
        assert!(pretty_json.contains("example.com"));
        assert!(pretty_json.contains("\n")); // Check for pretty printing
    }

    #[test]
    fn test_write_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let path = path.to_str().unwrap();

        write_json_file(&Inventory::default(), path, true).unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        let parsed: Inventory = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, Inventory::default());
    }

    #[test]
    fn test_unserializable_value_is_serialization_error() {
        use std::collections::HashMap;

        // JSON object keys must be strings
        let mut value = HashMap::new();
        value.insert((1u8, 2u8), "x");

        let err = generate_json(&value, false).unwrap_err();
        assert!(matches!(err, InventoryError::SerializationError(_)));
    }

    #[test]
    fn test_write_json_file_missing_directory() {
        let err = write_json_file(&Inventory::default(), "/nonexistent/dir/out.json", false)
            .unwrap_err();
        assert!(matches!(err, InventoryError::FileSystemError { .. }));
        assert!(err.to_string().contains("/nonexistent/dir/out.json"));
    }
}
