pub mod clock;
pub mod estimator;
pub mod solar_algorithm;
pub mod sun_times;
