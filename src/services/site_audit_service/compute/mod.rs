pub mod ecoindex;
pub mod grade;
pub mod stats;

pub use ecoindex::{
    compute_eco_index, compute_greenhouse_gases_emission, compute_water_consumption, eco_index_for,
};
pub use grade::get_grade;
pub use stats::{average, compute_report};
