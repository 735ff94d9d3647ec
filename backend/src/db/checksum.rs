//! Checksum calculation for loaded datasets.

use sha2::{Digest, Sha256};

use crate::models::VideoTable;

/// Calculate SHA-256 checksum of raw dataset bytes.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    hex::encode(hasher.finalize())
}

/// Calculate SHA-256 checksum over the rows of an in-memory table.
///
/// Every field is length-prefixed, so row boundaries cannot be confused.
/// The result depends on row content and order, not on any source file.
pub fn calculate_table_checksum(table: &VideoTable) -> String {
    let mut hasher = Sha256::new();
    for record in table {
        let date = record.published_date.to_string();
        let fields: [&[u8]; 4] = [
            record.title.as_bytes(),
            record.description.as_bytes(),
            date.as_bytes(),
            record.channel_name.as_bytes(),
        ];
        for field in fields {
            hasher.update((field.len() as u64).to_le_bytes());
            hasher.update(field);
        }
        hasher.update(record.views.to_le_bytes());
        hasher.update(record.duration.to_le_bytes());
        hasher.update([u8::from(record.is_short)]);
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VideoRecord;
    use chrono::NaiveDate;

    fn record(title: &str, views: u64) -> VideoRecord {
        VideoRecord {
            title: title.to_string(),
            description: String::new(),
            published_date: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            channel_name: "chan".to_string(),
            views,
            duration: 60,
            is_short: false,
        }
    }

    #[test]
    fn test_table_checksum_tracks_content() {
        let a = VideoTable::new(vec![record("a", 1), record("b", 2)]);
        let b = VideoTable::new(vec![record("a", 1), record("b", 3)]);
        assert_eq!(a.len(), b.len());
        assert_ne!(calculate_table_checksum(&a), calculate_table_checksum(&b));
        assert_eq!(calculate_table_checksum(&a), calculate_table_checksum(&a.clone()));
    }

    #[test]
    fn test_table_checksum_field_boundaries() {
        let a = VideoTable::new(vec![VideoRecord {
            description: "bc".to_string(),
            ..record("a", 1)
        }]);
        let b = VideoTable::new(vec![VideoRecord {
            description: "c".to_string(),
            ..record("ab", 1)
        }]);
        assert_ne!(calculate_table_checksum(&a), calculate_table_checksum(&b));
    }

    #[test]
    fn test_checksum_consistency() {
        let content = "title,views\nA,10\n";
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
        assert_eq!(calculate_checksum(content).len(), 64);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let checksum1 = calculate_checksum("title,views\nA,10\n");
        let checksum2 = calculate_checksum("title,views\nA,11\n");
        assert_ne!(checksum1, checksum2);
    }

    #[test]
    fn test_bytes_and_str_agree() {
        let text = "a,b,c";
        assert_eq!(calculate_checksum(text), calculate_checksum(text.as_bytes()));
    }
}
