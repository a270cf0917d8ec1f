mod series;

pub use series::{ChartBundle, PARAMETER_CATEGORIES, RangeSeries, SeriesPoint, project};
