//! Test utilities and fixtures for CSV parser testing
//!
//! This module provides sample dataset text shared by the parser test modules.

mod tokenizer_tests;

/// Weather-station climate dataset in the published column layout
pub fn create_climate_csv() -> String {
    "uuid,City,Barangay,date,tave,tmin,tmax,heat_index,wind_speed,rh,solar_rad,uv_rad\n\
     c-1,Davao City,Poblacion,2024-01-05,28.4,24.1,32.6,31.0,3.2,78,210.5,7.1\n\
     c-2,Davao City,Talomo,2024-01-06,27.9,23.8,31.9,30.2,2.8,81,198.0,6.4\n\
     c-3,Davao City,Buhangin,2024-02-03,29.1,25.0,33.4,33.8,4.1,74,230.2,8.0\n"
        .to_string()
}

/// Disease dataset with US-style dates and a quoted source column
pub fn create_disease_csv() -> String {
    "Id,Date,Disease,Cases,Source\r\n\
     1,01/05/2024,Dengue Cases,12,\"PIDSR, Region XI\"\r\n\
     2,01/06/2024,Respiratory Cases,7,PIDSR\r\n\
     \r\n\
     3,02/03/2024,Dengue Cases,9,PIDSR\r\n"
        .to_string()
}
