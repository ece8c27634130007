//! Upload Model
//!
//! In-flight upload placeholders. Each upload gets a ticket so two uploads
//! of the same name expire independently.

use super::types::UploadEntry;

#[derive(Clone, Debug, Default)]
pub struct UploadModel {
    /// Placeholders in arrival order
    pub entries: Vec<UploadEntry>,

    next_ticket: u64,
}

impl UploadModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an upload and return its ticket
    pub fn begin(&mut self, name: String) -> u64 {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.entries.push(UploadEntry { ticket, name });
        ticket
    }

    /// Remove a finished upload; unknown tickets are ignored
    pub fn finish(&mut self, ticket: u64) -> Option<UploadEntry> {
        let pos = self.entries.iter().position(|e| e.ticket == ticket)?;
        Some(self.entries.remove(pos))
    }

    /// Drop every placeholder, returning the tickets that were pending
    pub fn clear(&mut self) -> Vec<u64> {
        self.entries.drain(..).map(|e| e.ticket).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
