pub mod into_utc_trait;
pub mod observation;
pub mod summary;

pub mod traits {
    pub mod any_date;
    pub mod types;
}
