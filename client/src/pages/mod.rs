pub mod campaigns;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod public_campaign;
pub mod reset_password;
pub mod settings;
