use super::smooth::*;
use super::super::consts::*;
use super::super::coordinate::*;

use std::iter::FromIterator;

///
/// A single continuous pointer gesture, stored as the points that were captured while
/// it was being made
///
/// The raw samples are kept exactly as the input device reported them: smoothing
/// always generates a new sequence, leaving the capture itself untouched.
///
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Stroke {
    /// The captured points, in the order the input device reported them
    points: Vec<Coord2>,

    /// Number of points each captured segment contributes when this stroke is smoothed
    granularity: usize,

    /// Set to false to present the captured points without smoothing them
    should_smooth: bool
}

impl Stroke {
    ///
    /// Creates a new empty stroke with the default settings
    ///
    pub fn new() -> Stroke {
        Stroke {
            points:         vec![],
            granularity:    DEFAULT_GRANULARITY,
            should_smooth:  true
        }
    }

    ///
    /// Creates a stroke from a set of points that have already been captured
    ///
    pub fn from_points<PointIter: IntoIterator<Item=Coord2>>(points: PointIter) -> Stroke {
        Stroke {
            points:         points.into_iter().collect(),
            granularity:    DEFAULT_GRANULARITY,
            should_smooth:  true
        }
    }

    ///
    /// Appends a point sampled from the input device
    ///
    pub fn push(&mut self, point: Coord2) {
        self.points.push(point);
    }

    ///
    /// The points captured for this stroke so far
    ///
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    /// Number of points captured for this stroke
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if no points have been captured yet
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The granularity used when this stroke is smoothed
    pub fn granularity(&self) -> usize {
        self.granularity
    }

    ///
    /// Changes the granularity used when this stroke is smoothed
    ///
    /// Values below `MIN_GRANULARITY` are raised to it, as smaller granularities
    /// produce no visible smoothing.
    ///
    pub fn set_granularity(&mut self, granularity: usize) {
        self.granularity = usize::max(granularity, MIN_GRANULARITY);
    }

    ///
    /// Returns this stroke with its granularity changed, raised to `MIN_GRANULARITY`
    /// the same way `set_granularity` does
    ///
    pub fn with_granularity(mut self, granularity: usize) -> Stroke {
        self.set_granularity(granularity);
        self
    }

    /// True if this stroke is smoothed when it is presented
    pub fn should_smooth(&self) -> bool {
        self.should_smooth
    }

    /// Sets whether this stroke is smoothed when it is presented
    pub fn set_should_smooth(&mut self, should_smooth: bool) {
        self.should_smooth = should_smooth;
    }

    ///
    /// The points to present for this stroke: the Catmull-Rom smoothed sequence when
    /// smoothing is enabled, or a copy of the captured points when it is not
    ///
    pub fn smoothed_points(&self) -> Vec<Coord2> {
        if !self.should_smooth {
            return self.points.clone();
        }

        // The granularity is clamped when it's set, so it's always valid here
        smooth_path(&self.points, self.granularity)
            .unwrap_or_else(|_| self.points.clone())
    }

    ///
    /// The captured points with samples that landed too close to their predecessor
    /// removed
    ///
    /// The first captured point is always kept. The threshold has a floor of
    /// `SMALL_DISTANCE`, so coincident samples from a stationary pointer are always
    /// collapsed.
    ///
    pub fn distinct_points(&self, min_distance: f64) -> Vec<Coord2> {
        let min_distance = f64::max(min_distance, SMALL_DISTANCE);

        let mut distinct = vec![];

        if let Some(first) = self.points.first() {
            let mut last_point = *first;
            distinct.push(last_point);

            for point in self.points.iter().skip(1) {
                if last_point.distance_to(point) >= min_distance {
                    last_point = *point;
                    distinct.push(last_point);
                }
            }
        }

        distinct
    }
}

impl FromIterator<Coord2> for Stroke {
    fn from_iter<PointIter: IntoIterator<Item=Coord2>>(points: PointIter) -> Stroke {
        Stroke::from_points(points)
    }
}
