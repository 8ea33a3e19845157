pub mod line_edit;
pub mod unicode;
