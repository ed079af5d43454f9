pub mod sun;
