pub mod assign;
pub mod detect;
pub mod extract;
pub mod load;
pub mod reconcile;
