//! Cities and tours.

use rand::Rng;

/// A city at integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

/// A closed tour: each city connects to the next, the last back to the first.
pub type Tour = Vec<Point>;

/// Samples `count` cities uniformly from the rectangle `[0, width] x [0, height]`.
///
/// Both bounds are inclusive. Duplicate cities are kept.
///
/// # Examples
///
/// ```
/// use tsp_anneal::random::create_rng;
/// use tsp_anneal::tsp::generate_cities;
///
/// let mut rng = create_rng(42);
/// let cities = generate_cities(&mut rng, 500, 500, 20);
/// assert_eq!(cities.len(), 20);
/// assert!(cities.iter().all(|c| (0..=500).contains(&c.x) && (0..=500).contains(&c.y)));
/// ```
pub fn generate_cities<R: Rng>(rng: &mut R, width: u32, height: u32, count: usize) -> Tour {
    (0..count)
        .map(|_| {
            Point::new(
                rng.random_range(0..=width) as i64,
                rng.random_range(0..=height) as i64,
            )
        })
        .collect()
}
