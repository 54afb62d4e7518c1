pub mod assignment_form;
pub mod select;
pub mod submitted_data;
pub mod text_input;
