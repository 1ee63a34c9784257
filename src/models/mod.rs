pub mod open_meteo_forecast;
