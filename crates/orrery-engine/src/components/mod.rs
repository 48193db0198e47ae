pub mod appearance;
pub mod body;
