pub mod summary;
pub mod trend_chart;

pub use summary::SummaryCards;
pub use trend_chart::TrendChart;
