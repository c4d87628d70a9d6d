//! Request parameter types shared across services.

/// Circular search area (`Lat`, `Lon`, `Radius` parameters).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    /// Center latitude.
    pub lat: f64,
    /// Center longitude.
    pub lon: f64,
    /// Radius in meters.
    pub radius: u32,
}

impl SearchArea {
    /// Creates a new `SearchArea`.
    #[must_use]
    pub const fn new(lat: f64, lon: f64, radius: u32) -> Self {
        Self { lat, lon, radius }
    }

    /// Appends `Lat`, `Lon` and `Radius` to `query`.
    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        query.push(("Lat", self.lat.to_string()));
        query.push(("Lon", self.lon.to_string()));
        query.push(("Radius", self.radius.to_string()));
    }
}

/// Appends `(name, value)` when `value` is present and non-empty.
pub(crate) fn push_optional(
    query: &mut Vec<(&'static str, String)>,
    name: &'static str,
    value: Option<&str>,
) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        query.push((name, String::from(v)));
    }
}
