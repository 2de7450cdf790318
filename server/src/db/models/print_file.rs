//! Print File Model
//!
//! The simpler submission path: customer metadata plus a single print-ready
//! file, no payment slip and no pricing.

use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::utils::time::now_millis;

pub type PrintFileId = Thing;

/// Uploaded print file entity matching the `print_file` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintFile {
    #[serde(
        with = "super::serde_thing::option",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<PrintFileId>,
    pub customer_name: String,
    pub customer_email: String,
    pub file_name: String,
    pub file_type: String,
    pub print_type: String,
    pub quantity: u32,
    pub paper_size: String,
    /// Blob store reference, fetchable by the client
    pub file_url: String,
    /// Unix millis, set at insert
    pub created_at: i64,
}

/// Validated upload payload, ready for insertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintFileCreate {
    pub customer_name: String,
    pub customer_email: String,
    pub file_name: String,
    pub file_type: String,
    pub print_type: String,
    pub quantity: u32,
    pub paper_size: String,
    pub file_url: String,
}

impl PrintFileCreate {
    pub fn into_print_file(self) -> PrintFile {
        PrintFile {
            id: None,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            file_name: self.file_name,
            file_type: self.file_type,
            print_type: self.print_type,
            quantity: self.quantity,
            paper_size: self.paper_size,
            file_url: self.file_url,
            created_at: now_millis(),
        }
    }
}
