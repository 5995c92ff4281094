use std::marker::PhantomData;

use crate::cartesian::Point2d;
use crate::geo::{Datum, GeoPoint, NewGeoPoint};

/// Conversion of points between coordinate systems.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects a point. Returns `None` if the point cannot be represented in the output system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Reverse of [`Projection::project`].
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}

/// Spherical Web Mercator (EPSG:3857) projection into meters.
#[derive(Debug, Copy, Clone)]
pub struct WebMercator<In> {
    datum: Datum,
    phantom_in: PhantomData<In>,
}

impl<In> WebMercator<In> {
    /// Creates a projection for the given datum.
    pub fn new(datum: Datum) -> Self {
        Self {
            datum,
            phantom_in: Default::default(),
        }
    }
}

impl<In> Default for WebMercator<In> {
    fn default() -> Self {
        Self::new(Datum::WGS84)
    }
}

impl<In: NewGeoPoint<f64>> Projection for WebMercator<In> {
    type InPoint = In;
    type OutPoint = Point2d;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let x = self.datum.semimajor() * input.lon_rad();
        let y = self.datum.semimajor()
            * (std::f64::consts::FRAC_PI_4 + input.lat_rad() / 2.0)
                .tan()
                .ln();

        if x.is_finite() && y.is_finite() {
            Some(Point2d::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let lat = std::f64::consts::FRAC_PI_2
            - 2.0 * (-input.y / self.datum.semimajor()).exp().atan();
        let lon = input.x / self.datum.semimajor();

        Some(Self::InPoint::latlon(lat.to_degrees(), lon.to_degrees()))
    }
}
