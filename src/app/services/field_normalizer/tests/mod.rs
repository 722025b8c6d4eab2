//! Test utilities and fixtures for field normalizer testing

use crate::app::services::csv_parser::{CsvParser, RawRow};

// Test modules
mod alias_tests;
mod health_tests;

/// Rows in the weather-station layout
pub fn weather_station_rows() -> Vec<RawRow> {
    CsvParser::default().parse(
        "uuid,City,Barangay,date,tave,tmin,tmax,heat_index,wind_speed,rh,solar_rad,uv_rad\n\
         ws-1,Davao City,Poblacion,2024-01-05,28.4,24.1,32.6,31.0,3.2,78,210.5,7.1\n\
         ws-2,,Talomo,2024-01-06,n/a,23.8,31.9,30.2,2.8,81,198.0,6.4\n",
    )
}

/// Rows in the barangay sensor layout
pub fn sensor_rows() -> Vec<RawRow> {
    CsvParser::default().parse(
        "barangay,date,time,temperature,humidity,soil_moisture,soil_temperature,rainfall\n\
         Buhangin,2024-03-01,06:00,26.5,88,41.2,25.1,12.5\n\
         ,2024-03-01,12:00,31.0,70,39.0,27.4,0\n",
    )
}

/// Rows in the disease dataset layout
pub fn disease_rows() -> Vec<RawRow> {
    CsvParser::default().parse(
        "Id,Date,Disease,Cases,Source\n\
         1,01/05/2024,Dengue Cases,12,PIDSR\n\
         2,13/45/2024,Respiratory Cases,,\n\
         ,02/03/2024,,seven,DOH\n",
    )
}
