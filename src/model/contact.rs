//! The restaurant's fixed contact card shown beside the contact form.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactChannel {
    Address,
    Phone,
    Hours,
    Email,
}

impl ContactChannel {
    pub const ALL: [ContactChannel; 4] = [
        ContactChannel::Address,
        ContactChannel::Phone,
        ContactChannel::Hours,
        ContactChannel::Email,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ContactChannel::Address => "Address",
            ContactChannel::Phone => "Phone",
            ContactChannel::Hours => "Hours",
            ContactChannel::Email => "Email",
        }
    }
}

impl fmt::Display for ContactChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub channel: ContactChannel,
    pub details: String,
    pub subtext: String,
}

impl ContactEntry {
    pub fn new(
        channel: ContactChannel,
        details: impl Into<String>,
        subtext: impl Into<String>,
    ) -> Self {
        Self {
            channel,
            details: details.into(),
            subtext: subtext.into(),
        }
    }
}

/// Contact entries in display order.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    entries: Vec<ContactEntry>,
}

impl ContactInfo {
    pub fn standard() -> Self {
        Self {
            entries: vec![
                ContactEntry::new(
                    ContactChannel::Address,
                    "123 Portage Avenue, Winnipeg, MB R3G 0T1",
                    "Located in the heart of downtown Winnipeg",
                ),
                ContactEntry::new(
                    ContactChannel::Phone,
                    "(204) 555-0123",
                    "Call us for reservations or inquiries",
                ),
                ContactEntry::new(
                    ContactChannel::Hours,
                    "Mon-Sun: 11:00 AM - 10:00 PM",
                    "Kitchen closes 30 minutes before closing",
                ),
                ContactEntry::new(
                    ContactChannel::Email,
                    "info@bagdatasian.ca",
                    "We'll respond within 24 hours",
                ),
            ],
        }
    }

    pub fn entries(&self) -> &[ContactEntry] {
        &self.entries
    }

    pub fn get(&self, channel: ContactChannel) -> Option<&ContactEntry> {
        self.entries.iter().find(|entry| entry.channel == channel)
    }
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self::standard()
    }
}
