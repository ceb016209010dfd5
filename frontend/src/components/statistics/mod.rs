pub mod bar_chart;
pub mod pie_chart;
pub mod statistics_page;

pub use statistics_page::StatisticsPage;
