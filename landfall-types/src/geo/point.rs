use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Point on the surface of the Earth given by latitude and longitude in degrees.
pub trait GeoPoint {
    /// Numeric type used to represent coordinates.
    type Num: Float;

    /// Latitude in degrees.
    fn lat(&self) -> Self::Num;
    /// Longitude in degrees.
    fn lon(&self) -> Self::Num;

    /// Latitude in radians.
    fn lat_rad(&self) -> Self::Num {
        self.lat().to_radians()
    }

    /// Longitude in radians.
    fn lon_rad(&self) -> Self::Num {
        self.lon().to_radians()
    }
}

/// Geographic point that can be constructed from coordinates.
pub trait NewGeoPoint<N = f64>: GeoPoint<Num = N> + Sized {
    /// Creates a point from latitude and longitude.
    fn latlon(lat: N, lon: N) -> Self;
    /// Creates a point from longitude and latitude, which is the axis order of GeoJSON and most
    /// geometry libraries.
    fn lonlat(lon: N, lat: N) -> Self {
        Self::latlon(lat, lon)
    }
}

/// 2d point on the surface of the Earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeoPoint2d {
    lat: f64,
    lon: f64,
}

impl GeoPoint for GeoPoint2d {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat
    }

    fn lon(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeoPoint2d {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl GeoPoint2d {
    /// Returns the same location with the axes swapped. Used when the caller gave coordinates in
    /// `(lon, lat)` order.
    pub fn flipped(&self) -> Self {
        Self {
            lat: self.lon,
            lon: self.lat,
        }
    }
}

impl From<(f64, f64)> for GeoPoint2d {
    /// Tuples are read as `(lat, lon)`.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Creates a new GeoPoint2d from latitude and longitude values (in degrees).
///
/// ```
/// use landfall_types::geo::GeoPoint;
/// use landfall_types::latlon;
///
/// let point = latlon!(38.0, 52.0);
/// assert_eq!(point.lat(), 38.0);
/// ```
#[macro_export]
macro_rules! latlon {
    ($lat:expr, $lon:expr) => {
        <$crate::geo::GeoPoint2d as $crate::geo::NewGeoPoint<f64>>::latlon($lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_is_lat_lon() {
        let p = GeoPoint2d::from((27.88, -82.49));
        assert_eq!(p.lat(), 27.88);
        assert_eq!(p.lon(), -82.49);
    }

    #[test]
    fn flipped_swaps_axes() {
        let p = latlon!(10.0, 20.0).flipped();
        assert_eq!(p, GeoPoint2d::lonlat(10.0, 20.0));
    }
}
