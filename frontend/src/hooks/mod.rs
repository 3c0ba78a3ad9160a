pub mod use_export;
pub mod use_par_data;
