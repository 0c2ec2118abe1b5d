// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geographic primitives and slippy-tile coordinate maths.

use std::f64::consts::PI;

use serde::Serialize;

/// A WGS-84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self::new(lat, lng)
    }
}

/// Rectangular geographic extent given by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Build bounds from two opposite corners in any order.
    #[must_use]
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Inclusive point containment.
    #[must_use]
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// True if the two extents share an area. Touching edges do not count.
    #[must_use]
    pub fn overlaps(&self, other: &LatLngBounds) -> bool {
        other.north_east.lat > self.south_west.lat
            && other.south_west.lat < self.north_east.lat
            && other.north_east.lng > self.south_west.lng
            && other.south_west.lng < self.north_east.lng
    }
}

impl From<[[f64; 2]; 2]> for LatLngBounds {
    fn from([a, b]: [[f64; 2]; 2]) -> Self {
        Self::new(a.into(), b.into())
    }
}

/// Tile address in the XYZ scheme (origin top-left, y grows southwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

impl TileCoord {
    #[must_use]
    pub const fn new(x: u32, y: u32, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    /// The tile containing `point` at `zoom`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "values are clamped to the tile grid before the cast"
    )]
    pub fn containing(point: LatLng, zoom: u8) -> Self {
        let n = tiles_per_side(zoom);
        let max_index = n - 1.0;
        let x = lon_to_x(point.lng, zoom).floor().clamp(0.0, max_index);
        let y = lat_to_y(point.lat, zoom).floor().clamp(0.0, max_index);
        Self::new(x as u32, y as u32, zoom)
    }

    /// Geographic extent covered by this tile.
    #[must_use]
    pub fn bounds(&self) -> LatLngBounds {
        let x = f64::from(self.x);
        let y = f64::from(self.y);
        LatLngBounds::new(
            LatLng::new(y_to_lat(y + 1.0, self.zoom), x_to_lon(x, self.zoom)),
            LatLng::new(y_to_lat(y, self.zoom), x_to_lon(x + 1.0, self.zoom)),
        )
    }
}

fn tiles_per_side(zoom: u8) -> f64 {
    2_f64.powi(i32::from(zoom))
}

/// Latitude to fractional Web Mercator tile row.
fn lat_to_y(lat: f64, zoom: u8) -> f64 {
    let lat_rad = lat.to_radians();
    let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;
    y * tiles_per_side(zoom)
}

/// Longitude to fractional Web Mercator tile column.
fn lon_to_x(lon: f64, zoom: u8) -> f64 {
    ((lon + 180.0) / 360.0) * tiles_per_side(zoom)
}

fn y_to_lat(y: f64, zoom: u8) -> f64 {
    let lat_rad = (PI * (1.0 - 2.0 * y / tiles_per_side(zoom))).sinh().atan();
    lat_rad.to_degrees()
}

fn x_to_lon(x: f64, zoom: u8) -> f64 {
    x / tiles_per_side(zoom) * 360.0 - 180.0
}
