/// Granularity a freshly captured stroke starts out with
pub const DEFAULT_GRANULARITY: usize = 5;

/// Smallest granularity a stroke will accept (smaller values generate too few points for the smoothing to show)
pub const MIN_GRANULARITY: usize = 5;

/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;
