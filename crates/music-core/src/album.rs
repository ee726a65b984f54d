//! Album record

use serde::{Deserialize, Serialize};
use std::fmt;

/// A music album as returned by any repository.
///
/// Fields are private so a record cannot change after a repository hands it
/// out; use the accessors to read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    id: i32,
    title: String,
    artist: String,
    price: f64,
}

impl Album {
    /// Create a new album record
    pub fn new(id: i32, title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Console line used by the client, e.g.
/// `Id: 3, Artist: John Coltrane, Title: Blue Train, Price: 56.99`
impl fmt::Display for Album {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Id: {}, Artist: {}, Title: {}, Price: {}",
            self.id, self.artist, self.title, self.price
        )
    }
}
