use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::aoi::error::AoiError;

const METERS_PER_DEGREE: f64 = 111_320.0;
pub const DEFAULT_COST_PER_SQ_KM_USD: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Polygon drawn on the map, vertices in order, implicitly closed
#[derive(Debug, Clone, PartialEq)]
pub struct Aoi {
    points: Vec<GeoPoint>,
}

impl Aoi {
    pub fn new(points: Vec<GeoPoint>) -> Result<Self, AoiError> {
        if points.len() < 3 {
            return Err(AoiError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    /// Parse `"lat,lon; lat,lon; ..."`.
    pub fn parse(s: &str) -> Result<Self, AoiError> {
        let points = s
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .enumerate()
            .map(|(index, pair)| parse_point(index, pair))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Approximate area using an equirectangular projection at the mean latitude.
    pub fn area_sq_km(&self) -> f64 {
        let n = self.points.len();
        let mut area = 0.0;
        for i in 0..n {
            let p1 = self.points[i];
            let p2 = self.points[(i + 1) % n];
            area += p1.longitude * p2.latitude;
            area -= p2.longitude * p1.latitude;
        }
        let area_deg2 = area.abs() / 2.0;

        let mean_lat = self.centroid().latitude;
        let m_per_deg_lon = METERS_PER_DEGREE * mean_lat.to_radians().cos();

        area_deg2 * METERS_PER_DEGREE * m_per_deg_lon / 1_000_000.0
    }

    /// Vertex average, good enough as a tasking target for small polygons.
    pub fn centroid(&self) -> GeoPoint {
        let n = self.points.len() as f64;
        let (lat, lon) = self
            .points
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));
        GeoPoint {
            latitude: lat / n,
            longitude: lon / n,
        }
    }
}

pub fn estimated_cost_usd(area_sq_km: f64, cost_per_sq_km_usd: f64) -> f64 {
    area_sq_km * cost_per_sq_km_usd
}

fn parse_point(index: usize, pair: &str) -> Result<GeoPoint, AoiError> {
    let err = |message: String| AoiError::InvalidPoint { index, message };

    let parts: Vec<_> = pair.split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return Err(err(format!("expected 'lat,lon', got {:?}", pair)));
    }
    let latitude = parts[0].parse().map_err(|e| err(format!("latitude: {}", e)))?;
    let longitude = parts[1].parse().map_err(|e| err(format!("longitude: {}", e)))?;
    Ok(GeoPoint {
        latitude,
        longitude,
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn square(lat: f64, lon: f64, side: f64) -> Aoi {
        Aoi::new(vec![
            GeoPoint { latitude: lat, longitude: lon },
            GeoPoint { latitude: lat, longitude: lon + side },
            GeoPoint { latitude: lat + side, longitude: lon + side },
            GeoPoint { latitude: lat + side, longitude: lon },
        ])
        .unwrap()
    }

    #[test]
    fn test_area_at_equator() {
        // 0.1 x 0.1 deg around lat 0.05
        let aoi = square(0.0, 0.0, 0.1);
        let expected = 0.01 * 111.32 * 111.32 * 0.05_f64.to_radians().cos();
        assert!((aoi.area_sq_km() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_area_shrinks_with_latitude() {
        let equator = square(0.0, 0.0, 0.1).area_sq_km();
        let north = square(60.0, 0.0, 0.1).area_sq_km();
        assert!(north < equator * 0.51);
    }

    #[test]
    fn test_area_ignores_winding() {
        let mut points = square(10.0, 10.0, 0.5).points().to_vec();
        let a = Aoi::new(points.clone()).unwrap().area_sq_km();
        points.reverse();
        let b = Aoi::new(points).unwrap().area_sq_km();
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn test_centroid() {
        let c = square(40.0, -100.0, 2.0).centroid();
        assert_eq!(41.0, c.latitude);
        assert_eq!(-99.0, c.longitude);
    }

    #[test]
    fn test_cost() {
        assert_eq!(150.0, estimated_cost_usd(10.0, DEFAULT_COST_PER_SQ_KM_USD));
    }

    #[test]
    fn test_parse() {
        let aoi = Aoi::parse("40,-100; 40,-99 ;41,-99;").unwrap();
        assert_eq!(3, aoi.points().len());
        assert_eq!(-99.0, aoi.points()[2].longitude);
    }

    #[rstest]
    #[case("40,-100; 41,-99", AoiError::TooFewPoints(2))]
    #[case("", AoiError::TooFewPoints(0))]
    fn test_parse_too_few(#[case] inp: &str, #[case] err: AoiError) {
        assert_eq!(err, Aoi::parse(inp).unwrap_err());
    }

    #[rstest]
    #[case("40,-100; 41; 42,-98")]
    #[case("40,-100; 41,abc; 42,-98")]
    #[case("40,-100,3; 41,-99; 42,-98")]
    fn test_parse_bad_point(#[case] inp: &str) {
        assert!(matches!(
            Aoi::parse(inp),
            Err(AoiError::InvalidPoint { .. })
        ));
    }
}
