//! Record-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Cards never mutate the list directly. A successful delete bumps
//! `refresh_seq`, and the dashboard re-fetches whenever the sequence changes.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::Record;

/// Dashboard record inventory.
#[derive(Clone, Debug, Default)]
pub struct RecordsState {
    pub items: Vec<Record>,
    pub loading: bool,
    pub error: Option<String>,
    /// Incremented each time the view asks for a re-fetch.
    pub refresh_seq: u64,
}

impl RecordsState {
    /// Request a re-fetch of the list.
    pub fn request_refresh(&mut self) {
        self.refresh_seq = self.refresh_seq.wrapping_add(1);
    }

    /// Mark a fetch as started.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store the outcome of a fetch. On error the previous items are kept.
    pub fn finish_load(&mut self, result: Result<Vec<Record>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}
