pub mod controls;
pub mod header;
pub mod kpi_cards;
pub mod officer_details;
pub mod par_chart;
pub mod weekly_table;
