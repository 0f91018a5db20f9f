use serde::{Deserialize, Serialize};

/// A car dealership's identity and location fields, flattened from the
/// cloud-function document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dealer {
    pub id: u64,
    pub address: String,
    pub city: String,
    pub full_name: String,
    pub short_name: String,
    /// Two-letter state code.
    pub st: String,
    pub zip: String,
    pub lat: f64,
    pub long: f64,
}

impl Dealer {
    /// Creates a dealer with the given id and name, leaving location fields
    /// empty (useful for testing).
    pub fn new(id: u64, full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        Self {
            id,
            address: String::new(),
            city: String::new(),
            short_name: full_name.clone(),
            full_name,
            st: String::new(),
            zip: String::new(),
            lat: 0.0,
            long: 0.0,
        }
    }

    /// Sets the street address for this dealer.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the city for this dealer.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the short display name for this dealer.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Sets the state code for this dealer.
    pub fn with_state(mut self, st: impl Into<String>) -> Self {
        self.st = st.into();
        self
    }

    /// Sets the zip code for this dealer.
    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.zip = zip.into();
        self
    }

    /// Sets the coordinates for this dealer.
    pub fn with_location(mut self, lat: f64, long: f64) -> Self {
        self.lat = lat;
        self.long = long;
        self
    }
}
