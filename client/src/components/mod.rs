pub mod campaign_form;
pub mod layout;
pub mod prize_modal;
pub mod registration_modal;
pub mod result_modal;
pub mod scratch_card;
pub mod share_link;
pub mod social_gate;
pub mod spin_wheel;
