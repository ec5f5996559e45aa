pub mod alert;
pub mod consultation;
pub mod evidence;
pub mod hypothesis;
pub mod patient;
pub mod risk;
pub mod suggestion;
pub mod token_count;
pub mod workup;
