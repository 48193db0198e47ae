pub mod registry;
pub mod time;
pub mod kinematics;
pub mod pick;
