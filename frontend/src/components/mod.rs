pub mod common_toast;
pub mod photo_editor;
pub mod registration_form;
