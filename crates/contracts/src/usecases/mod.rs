pub mod common;
pub mod u701_convert_excel;
pub mod u702_generate_erp;
pub mod u703_generate_erp_10y;
pub mod u704_generate_erp_rolling;
pub mod u705_generate_erp_interval;
pub mod u706_thermometer_clean;
pub mod u707_thermometer_percentiles;
pub mod u708_thermometer_merge;
